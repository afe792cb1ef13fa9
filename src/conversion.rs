use thiserror::Error;

use crate::units::{convert_airflow, AirflowReading, AirflowUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 m³/h, CFM 으로 환산한다.
///
/// 단위 문자열 예시는 `m3/min`, `m³/min`, `cfm`, `m3/h` 등을 사용할 수 있다.
pub fn convert(value: f64, unit_str: &str) -> Result<AirflowReading, ConversionError> {
    let unit = parse_airflow_unit(unit_str)?;
    Ok(convert_airflow(value, unit))
}

pub fn parse_airflow_unit(s: &str) -> Result<AirflowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/min" | "m³/min" | "m^3/min" | "cmm" => Ok(AirflowUnit::CubicMeterPerMinute),
        "cfm" | "ft3/min" | "ft³/min" => Ok(AirflowUnit::Cfm),
        "m3/h" | "m³/h" | "m^3/h" | "m3/hr" | "cmh" => Ok(AirflowUnit::CubicMeterPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbols_case_insensitively() {
        assert_eq!(parse_airflow_unit("CFM"), Ok(AirflowUnit::Cfm));
        assert_eq!(
            parse_airflow_unit(" m³/min "),
            Ok(AirflowUnit::CubicMeterPerMinute)
        );
        assert_eq!(
            parse_airflow_unit("M3/H"),
            Ok(AirflowUnit::CubicMeterPerHour)
        );
    }

    #[test]
    fn every_display_symbol_parses_back() {
        for unit in AirflowUnit::ALL {
            assert_eq!(parse_airflow_unit(unit.symbol()), Ok(unit));
        }
    }

    #[test]
    fn unknown_unit_is_reported() {
        let err = convert(1.0, "l/s").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("l/s".into()));
    }
}
