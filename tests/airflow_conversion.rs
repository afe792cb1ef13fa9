use aircraft_fan_sizing::{
    conversion::{self, ConversionError},
    units::{convert_airflow, convert_airflow_between, AirflowUnit},
};
use approx::assert_relative_eq;

#[test]
fn ten_cubic_meters_per_minute() {
    let r = convert_airflow(10.0, AirflowUnit::CubicMeterPerMinute);
    assert_relative_eq!(r.m3_per_h, 600.0);
    assert_relative_eq!(r.cfm, 353.15, epsilon = 1e-9);
}

#[test]
fn cfm_input_keeps_cfm_verbatim() {
    let r = convert_airflow(500.0, AirflowUnit::Cfm);
    assert_eq!(r.cfm, 500.0);
    assert_relative_eq!(r.m3_per_h, 849.497, epsilon = 1e-3);
}

#[test]
fn cubic_meters_per_hour_keeps_m3h_verbatim() {
    let r = convert_airflow(1000.0, AirflowUnit::CubicMeterPerHour);
    assert_eq!(r.m3_per_h, 1000.0);
    assert_relative_eq!(r.cfm, 588.583, epsilon = 1e-3);
}

#[test]
fn zero_and_negative_pass_through() {
    let zero = convert_airflow(0.0, AirflowUnit::Cfm);
    assert_eq!(zero.m3_per_h, 0.0);
    let neg = convert_airflow(-1.0, AirflowUnit::CubicMeterPerMinute);
    assert_relative_eq!(neg.m3_per_h, -60.0);
}

#[test]
fn between_units_returns_to_start() {
    for from in AirflowUnit::ALL {
        for to in AirflowUnit::ALL {
            let there = convert_airflow_between(123.4, from, to);
            let back = convert_airflow_between(there, to, from);
            assert_relative_eq!(back, 123.4, max_relative = 1e-12);
        }
    }
}

#[test]
fn string_units_go_through_the_same_formulas() {
    let r = conversion::convert(500.0, " CFM ").unwrap();
    assert_eq!(r, convert_airflow(500.0, AirflowUnit::Cfm));
    assert_eq!(
        conversion::convert(1.0, "l/s"),
        Err(ConversionError::UnknownUnit("l/s".into()))
    );
}
