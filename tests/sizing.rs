use aircraft_fan_sizing::{
    catalog::{FanCatalog, FanType},
    presets::Region,
    session::FormSession,
    sizing::{self, compute_power, match_fans, MatchCriteria, PowerInput, SizingError},
};
use approx::assert_relative_eq;

fn models(fans: &[aircraft_fan_sizing::catalog::FanRecord]) -> Vec<String> {
    fans.iter().map(|f| f.model.to_string()).collect()
}

#[test]
fn power_for_one_and_three_fans() {
    let one = compute_power(PowerInput {
        airflow_m3h: 1000.0,
        pressure_drop_pa: 300.0,
        efficiency_percent: 60.0,
        num_fans: 1,
    })
    .expect("power calc");
    assert_relative_eq!(one.power_watt, 138.888_888, epsilon = 1e-5);
    assert_relative_eq!(one.total_power, one.power_watt);

    let three = compute_power(PowerInput {
        airflow_m3h: 1000.0,
        pressure_drop_pa: 300.0,
        efficiency_percent: 60.0,
        num_fans: 3,
    })
    .expect("power calc");
    assert_relative_eq!(three.total_power, 416.666_666, epsilon = 1e-5);
}

#[test]
fn zero_efficiency_is_rejected_by_the_pipeline() {
    let mut input = FormSession::default().snapshot();
    input.efficiency = 0.0;
    assert_eq!(
        sizing::size(&input, &FanCatalog::builtin()),
        Err(SizingError::InvalidEfficiency)
    );
}

#[test]
fn cabin_defaults_end_to_end() {
    let input = FormSession::default().snapshot();
    let res = sizing::size(&input, &FanCatalog::builtin()).expect("sizing");
    assert_relative_eq!(res.airflow_m3h, 499.8, epsilon = 1e-9);
    assert_relative_eq!(res.airflow_cfm, 294.174, epsilon = 1e-3);
    assert_relative_eq!(res.power_watt, 57.847, epsilon = 1e-3);
    assert!(res.brake_horsepower > 0.0);
    assert_eq!(models(&res.suggested), ["A2D200-AA02-01"]);
}

#[test]
fn cargo_hold_centrifugal_lists_all_three_in_catalog_order() {
    let mut session = FormSession::default();
    session.set_region(Region::CargoHold);
    session.set_fan_type(FanType::Centrifugal);
    let res = sizing::size(&session.snapshot(), &FanCatalog::builtin()).expect("sizing");
    assert_eq!(
        models(&res.suggested),
        ["9HV1248P1G03", "R2E220-AA40-17", "BFB1012VH"]
    );
}

#[test]
fn rpm_tolerance_is_inclusive() {
    let catalog = FanCatalog::builtin();
    let mut criteria = MatchCriteria {
        fan_type: FanType::Axial,
        airflow_m3h: 500.0,
        pressure_drop_pa: 250.0,
        voltage: 12.0,
        rpm: 3000,
    };
    let hits: Vec<&str> = match_fans(&catalog, &criteria)
        .iter()
        .map(|f| &*f.model)
        .collect();
    assert_eq!(hits, ["A2D200-AA02-01", "AFB1212GHE"]);

    criteria.rpm = 2999;
    let hits: Vec<&str> = match_fans(&catalog, &criteria)
        .iter()
        .map(|f| &*f.model)
        .collect();
    assert_eq!(hits, ["A2D200-AA02-01"]);
}

#[test]
fn no_candidate_gives_empty_list() {
    let mut session = FormSession::default();
    session.set_voltage(28.0);
    let res = sizing::size(&session.snapshot(), &FanCatalog::builtin()).expect("sizing");
    assert!(!res.has_match());
}
