//! 풍량 환산 → 동력 계산 → 카탈로그 매칭을 한 번에 수행하는 계산 파이프라인.
//!
//! 모든 함수는 입력 스냅샷만 보고 결과를 만든다. 화면 프레임워크는 매 상호작용마다
//! [`SizingInput`]을 새로 만들어 [`size`]를 호출하면 된다.

pub mod matcher;
pub mod power;

use thiserror::Error;
use tracing::debug;

use crate::catalog::{FanCatalog, FanRecord, FanType};
use crate::presets::Region;
use crate::units::{convert_airflow, AirflowReading, AirflowUnit};

pub use matcher::{match_fans, MatchCriteria, RPM_TOLERANCE};
pub use power::{brake_horsepower, compute_power, PowerInput, PowerResult};

/// 사이징 계산 오류.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SizingError {
    #[error("Efficiency cannot be zero.")]
    InvalidEfficiency,
}

/// 팬 외형 치수 [mm]. 계산에는 쓰이지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanDimensions {
    pub height_mm: f64,
    pub width_mm: f64,
    pub depth_mm: f64,
}

/// 한 번의 상호작용에서 읽어 들인 입력값 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInput {
    pub region: Region,
    pub fan_type: FanType,
    /// 요구 풍량 [m³/h]. 풍량 입력칸의 기본값을 정하는 데만 쓰인다.
    pub flow_rate: f64,
    /// [Pa]
    pub pressure_drop: f64,
    /// [%]
    pub efficiency: f64,
    pub num_fans: u32,
    pub dimensions: FanDimensions,
    /// [VDC]
    pub voltage: f64,
    pub rpm: i32,
    pub airflow_unit: AirflowUnit,
    pub airflow_value: f64,
}

impl SizingInput {
    pub fn airflow(&self) -> AirflowReading {
        convert_airflow(self.airflow_value, self.airflow_unit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizingResult {
    pub airflow_m3h: f64,
    pub airflow_cfm: f64,
    /// 팬 1대당 [W]
    pub power_watt: f64,
    /// [W]
    pub total_power: f64,
    /// 팬 1대당 [HP]
    pub brake_horsepower: f64,
    pub suggested: Vec<FanRecord>,
}

impl SizingResult {
    pub fn has_match(&self) -> bool {
        !self.suggested.is_empty()
    }
}

/// 입력 스냅샷 하나로 전체 결과를 계산한다.
pub fn size(input: &SizingInput, catalog: &FanCatalog) -> Result<SizingResult, SizingError> {
    let airflow = input.airflow();
    let power = compute_power(PowerInput {
        airflow_m3h: airflow.m3_per_h,
        pressure_drop_pa: input.pressure_drop,
        efficiency_percent: input.efficiency,
        num_fans: input.num_fans,
    })?;
    let hp = brake_horsepower(airflow.cfm, input.pressure_drop, input.efficiency)?;
    let criteria = MatchCriteria {
        fan_type: input.fan_type,
        airflow_m3h: airflow.m3_per_h,
        pressure_drop_pa: input.pressure_drop,
        voltage: input.voltage,
        rpm: input.rpm,
    };
    let suggested: Vec<FanRecord> = match_fans(catalog, &criteria)
        .into_iter()
        .cloned()
        .collect();
    debug!(
        region = %input.region,
        fan_type = %input.fan_type,
        airflow_m3h = airflow.m3_per_h,
        power_watt = power.power_watt,
        matches = suggested.len(),
        "sizing pass"
    );
    Ok(SizingResult {
        airflow_m3h: airflow.m3_per_h,
        airflow_cfm: airflow.cfm,
        power_watt: power.power_watt,
        total_power: power.total_power,
        brake_horsepower: hp,
        suggested,
    })
}
