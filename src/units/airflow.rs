use serde::{Deserialize, Serialize};

/// 1 m³/min 당 CFM 환산 계수.
pub const CFM_PER_M3_PER_MIN: f64 = 35.315;
/// 1 시간당 분.
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// 1 시간당 초.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// 풍량 단위. 내부 기준은 m³/h 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AirflowUnit {
    #[default]
    CubicMeterPerMinute,
    Cfm,
    CubicMeterPerHour,
}

impl AirflowUnit {
    pub const ALL: [AirflowUnit; 3] = [
        AirflowUnit::CubicMeterPerMinute,
        AirflowUnit::Cfm,
        AirflowUnit::CubicMeterPerHour,
    ];

    /// 화면 표시용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            AirflowUnit::CubicMeterPerMinute => "m³/min",
            AirflowUnit::Cfm => "CFM",
            AirflowUnit::CubicMeterPerHour => "m³/h",
        }
    }
}

impl std::fmt::Display for AirflowUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 두 가지 기준 단위(m³/h, CFM)로 환산된 풍량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirflowReading {
    pub m3_per_h: f64,
    pub cfm: f64,
}

/// 입력 풍량을 m³/h 와 CFM 으로 동시에 환산한다. 반올림하지 않는다.
///
/// 단위별로 고정된 식을 그대로 쓰므로 CFM 입력 시 `cfm` 은 입력값과 같고,
/// m³/h 입력 시 `m3_per_h` 는 입력값과 같다. 0 이나 음수도 그대로 통과한다.
pub fn convert_airflow(value: f64, unit: AirflowUnit) -> AirflowReading {
    match unit {
        AirflowUnit::CubicMeterPerMinute => AirflowReading {
            m3_per_h: value * MINUTES_PER_HOUR,
            cfm: value * CFM_PER_M3_PER_MIN,
        },
        AirflowUnit::Cfm => AirflowReading {
            m3_per_h: value / CFM_PER_M3_PER_MIN * MINUTES_PER_HOUR,
            cfm: value,
        },
        AirflowUnit::CubicMeterPerHour => AirflowReading {
            m3_per_h: value,
            cfm: value / MINUTES_PER_HOUR * CFM_PER_M3_PER_MIN,
        },
    }
}

/// m³/h 값을 원하는 단위로 되돌린다.
pub fn from_m3_per_h(value_m3h: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::CubicMeterPerMinute => value_m3h / MINUTES_PER_HOUR,
        AirflowUnit::Cfm => value_m3h / MINUTES_PER_HOUR * CFM_PER_M3_PER_MIN,
        AirflowUnit::CubicMeterPerHour => value_m3h,
    }
}

/// 풍량을 변환한다.
pub fn convert_airflow_between(value: f64, from: AirflowUnit, to: AirflowUnit) -> f64 {
    let m3h = convert_airflow(value, from).m3_per_h;
    from_m3_per_h(m3h, to)
}

/// m³/h 를 m³/s 로 환산한다.
pub fn m3_per_h_to_m3_per_s(value_m3h: f64) -> f64 {
    value_m3h / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_meter_per_minute_fills_both_forms() {
        let r = convert_airflow(10.0, AirflowUnit::CubicMeterPerMinute);
        assert!((r.m3_per_h - 600.0).abs() < 1e-9);
        assert!((r.cfm - 353.15).abs() < 1e-9);
    }

    #[test]
    fn negative_values_pass_through() {
        let r = convert_airflow(-60.0, AirflowUnit::CubicMeterPerHour);
        assert_eq!(r.m3_per_h, -60.0);
        assert!((r.cfm + 35.315).abs() < 1e-9);
    }

    #[test]
    fn between_same_unit_is_identity() {
        for unit in AirflowUnit::ALL {
            let v = convert_airflow_between(12.5, unit, unit);
            assert!((v - 12.5).abs() < 1e-9, "{unit}: {v}");
        }
    }
}
