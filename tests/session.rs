use aircraft_fan_sizing::{
    presets::Region,
    session::{FormSession, SessionDefaults},
    units::AirflowUnit,
};

#[test]
fn region_change_updates_defaults_but_keeps_overrides() {
    let mut s = FormSession::default();
    s.set_pressure_drop(400.0);
    s.set_region(Region::Cockpit);

    assert_eq!(s.flow_rate().value(), 150.0);
    assert!(!s.flow_rate().is_overridden());
    assert_eq!(s.efficiency().value(), 55.0);
    assert_eq!(s.pressure_drop().value(), 400.0);
    assert_eq!(s.pressure_drop().default_value(), 200.0);
    assert!(s.pressure_drop().is_overridden());
}

#[test]
fn every_region_sets_its_own_defaults() {
    let expected = [
        (Region::Cabin, 500.0, 250.0, 60.0),
        (Region::Cockpit, 150.0, 200.0, 55.0),
        (Region::AvionicsBay, 100.0, 350.0, 50.0),
        (Region::CargoHold, 200.0, 300.0, 65.0),
    ];
    let mut s = FormSession::default();
    for (region, flow, dp, eff) in expected {
        s.set_region(region);
        let input = s.snapshot();
        assert_eq!(input.region, region);
        assert_eq!(input.flow_rate, flow);
        assert_eq!(input.pressure_drop, dp);
        assert_eq!(input.efficiency, eff);
    }
}

#[test]
fn configured_defaults_seed_the_form() {
    let s = FormSession::new(SessionDefaults {
        voltage: 28.0,
        rpm: 3000,
        airflow_unit: AirflowUnit::Cfm,
    });
    let input = s.snapshot();
    assert_eq!(input.voltage, 28.0);
    assert_eq!(input.rpm, 3000);
    assert_eq!(input.airflow_unit, AirflowUnit::Cfm);
    assert_eq!(input.num_fans, 1);
}

#[test]
fn reset_returns_to_region_defaults() {
    let mut s = FormSession::default();
    s.set_region(Region::AvionicsBay);
    s.set_flow_rate(900.0);
    s.set_airflow_value(20.0);
    s.reset_overrides();
    let input = s.snapshot();
    assert_eq!(input.region, Region::AvionicsBay);
    assert_eq!(input.flow_rate, 100.0);
    assert_eq!(input.airflow_value, 1.67);
}
