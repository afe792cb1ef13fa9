use crate::units::{airflow::m3_per_h_to_m3_per_s, pa_to_in_h2o};

use super::SizingError;

/// HP = Q[CFM]·ΔP[inH2O] / (6356·η) 의 상수.
pub const HP_CFM_IN_H2O_CONSTANT: f64 = 6356.0;

/// 팬 소요 동력 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct PowerInput {
    /// 풍량 [m³/h]
    pub airflow_m3h: f64,
    /// 압력 강하 [Pa]
    pub pressure_drop_pa: f64,
    /// 팬 효율 [%]
    pub efficiency_percent: f64,
    pub num_fans: u32,
}

/// 팬 소요 동력 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerResult {
    /// 팬 1대당 동력 [W]
    pub power_watt: f64,
    /// 전체 동력 [W]
    pub total_power: f64,
}

/// P = Q·ΔP/η 로 팬 1대 및 전체 동력을 구한다. 효율이 0%면 계산하지 않는다.
pub fn compute_power(input: PowerInput) -> Result<PowerResult, SizingError> {
    let flow_m3s = m3_per_h_to_m3_per_s(input.airflow_m3h);
    let eff = input.efficiency_percent / 100.0;
    if eff == 0.0 {
        return Err(SizingError::InvalidEfficiency);
    }
    let power_watt = flow_m3s * input.pressure_drop_pa / eff;
    Ok(PowerResult {
        power_watt,
        total_power: power_watt * f64::from(input.num_fans),
    })
}

/// 축동력(마력) 추정치. 효율이 0%면 계산하지 않는다.
pub fn brake_horsepower(
    airflow_cfm: f64,
    pressure_drop_pa: f64,
    efficiency_percent: f64,
) -> Result<f64, SizingError> {
    let eff = efficiency_percent / 100.0;
    if eff == 0.0 {
        return Err(SizingError::InvalidEfficiency);
    }
    let in_h2o = pa_to_in_h2o(pressure_drop_pa);
    Ok(airflow_cfm * in_h2o / (HP_CFM_IN_H2O_CONSTANT * eff))
}
