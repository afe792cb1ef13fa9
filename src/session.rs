//! 화면 입력칸의 현재 값을 보관한다.
//!
//! 각 입력칸은 기본값과 사용자가 직접 넣은 값을 따로 가진다. 구역을 바꾸면 기본값만
//! 갱신되고 사용자가 넣은 값은 그대로 남는다. 계산에는 [`FormSession::snapshot`]으로
//! 만든 불변 스냅샷만 넘긴다.

use crate::catalog::FanType;
use crate::config::Config;
use crate::presets::Region;
use crate::sizing::{FanDimensions, SizingInput};
use crate::units::AirflowUnit;

pub const MIN_FLOW_RATE: f64 = 10.0;
pub const MIN_PRESSURE_DROP: f64 = 10.0;
pub const MIN_EFFICIENCY: f64 = 30.0;
pub const MAX_EFFICIENCY: f64 = 90.0;
pub const MIN_FANS: u32 = 1;
pub const MIN_DIMENSION_MM: f64 = 10.0;
pub const MIN_AIRFLOW_VALUE: f64 = 0.0;

/// 기본값 + 사용자 지정값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<T> {
    default: T,
    user: Option<T>,
}

impl<T: Copy> Field<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            user: None,
        }
    }

    pub fn value(&self) -> T {
        self.user.unwrap_or(self.default)
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub fn is_overridden(&self) -> bool {
        self.user.is_some()
    }

    fn set(&mut self, value: T) {
        self.user = Some(value);
    }

    fn set_default(&mut self, value: T) {
        self.default = value;
    }

    pub fn reset(&mut self) {
        self.user = None;
    }
}

/// 구역과 무관한 입력칸의 기본값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionDefaults {
    pub voltage: f64,
    pub rpm: i32,
    pub airflow_unit: AirflowUnit,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            voltage: 12.0,
            rpm: 2500,
            airflow_unit: AirflowUnit::CubicMeterPerMinute,
        }
    }
}

impl From<&Config> for SessionDefaults {
    fn from(cfg: &Config) -> Self {
        Self {
            voltage: cfg.default_voltage,
            rpm: cfg.default_rpm,
            airflow_unit: cfg.default_airflow_unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    region: Region,
    fan_type: FanType,
    flow_rate: Field<f64>,
    pressure_drop: Field<f64>,
    efficiency: Field<f64>,
    num_fans: Field<u32>,
    height_mm: Field<f64>,
    width_mm: Field<f64>,
    depth_mm: Field<f64>,
    voltage: Field<f64>,
    rpm: Field<i32>,
    airflow_unit: AirflowUnit,
    airflow_value: Option<f64>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(SessionDefaults::default())
    }
}

impl FormSession {
    pub fn new(defaults: SessionDefaults) -> Self {
        let region = Region::default();
        let preset = region.preset();
        Self {
            region,
            fan_type: FanType::default(),
            flow_rate: Field::new(preset.default_flow),
            pressure_drop: Field::new(preset.default_pressure),
            efficiency: Field::new(f64::from(preset.default_efficiency_percent())),
            num_fans: Field::new(MIN_FANS),
            height_mm: Field::new(MIN_DIMENSION_MM),
            width_mm: Field::new(MIN_DIMENSION_MM),
            depth_mm: Field::new(MIN_DIMENSION_MM),
            voltage: Field::new(defaults.voltage),
            rpm: Field::new(defaults.rpm),
            airflow_unit: defaults.airflow_unit,
            airflow_value: None,
        }
    }

    /// 구역을 바꾸고 풍량/압력/효율 기본값을 해당 프리셋으로 갱신한다.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        let preset = region.preset();
        self.flow_rate.set_default(preset.default_flow);
        self.pressure_drop.set_default(preset.default_pressure);
        self.efficiency
            .set_default(f64::from(preset.default_efficiency_percent()));
    }

    pub fn set_fan_type(&mut self, fan_type: FanType) {
        self.fan_type = fan_type;
    }

    pub fn set_flow_rate(&mut self, value: f64) {
        self.flow_rate.set(value.max(MIN_FLOW_RATE));
    }

    pub fn set_pressure_drop(&mut self, value: f64) {
        self.pressure_drop.set(value.max(MIN_PRESSURE_DROP));
    }

    pub fn set_efficiency(&mut self, percent: f64) {
        self.efficiency
            .set(percent.clamp(MIN_EFFICIENCY, MAX_EFFICIENCY));
    }

    pub fn set_num_fans(&mut self, count: u32) {
        self.num_fans.set(count.max(MIN_FANS));
    }

    pub fn set_dimensions(&mut self, height_mm: f64, width_mm: f64, depth_mm: f64) {
        self.height_mm.set(height_mm.max(MIN_DIMENSION_MM));
        self.width_mm.set(width_mm.max(MIN_DIMENSION_MM));
        self.depth_mm.set(depth_mm.max(MIN_DIMENSION_MM));
    }

    pub fn set_voltage(&mut self, volts: f64) {
        self.voltage.set(volts);
    }

    pub fn set_rpm(&mut self, rpm: i32) {
        self.rpm.set(rpm);
    }

    pub fn set_airflow_unit(&mut self, unit: AirflowUnit) {
        self.airflow_unit = unit;
    }

    pub fn set_airflow_value(&mut self, value: f64) {
        self.airflow_value = Some(value.max(MIN_AIRFLOW_VALUE));
    }

    /// 사용자가 넣은 값을 모두 지우고 현재 구역 기본값으로 돌아간다.
    pub fn reset_overrides(&mut self) {
        for field in [
            &mut self.flow_rate,
            &mut self.pressure_drop,
            &mut self.efficiency,
            &mut self.height_mm,
            &mut self.width_mm,
            &mut self.depth_mm,
            &mut self.voltage,
        ] {
            field.reset();
        }
        self.num_fans.reset();
        self.rpm.reset();
        self.airflow_value = None;
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn fan_type(&self) -> FanType {
        self.fan_type
    }

    pub fn flow_rate(&self) -> &Field<f64> {
        &self.flow_rate
    }

    pub fn pressure_drop(&self) -> &Field<f64> {
        &self.pressure_drop
    }

    pub fn efficiency(&self) -> &Field<f64> {
        &self.efficiency
    }

    pub fn num_fans(&self) -> u32 {
        self.num_fans.value()
    }

    pub fn voltage(&self) -> f64 {
        self.voltage.value()
    }

    pub fn rpm(&self) -> i32 {
        self.rpm.value()
    }

    pub fn dimensions(&self) -> FanDimensions {
        FanDimensions {
            height_mm: self.height_mm.value(),
            width_mm: self.width_mm.value(),
            depth_mm: self.depth_mm.value(),
        }
    }

    pub fn airflow_unit(&self) -> AirflowUnit {
        self.airflow_unit
    }

    /// 풍량 값. 직접 넣지 않았다면 요구 풍량/60 을 소수 둘째 자리로 반올림한 값.
    pub fn airflow_value(&self) -> f64 {
        self.airflow_value
            .unwrap_or_else(|| round_to(self.flow_rate.value() / 60.0, 2))
    }

    pub fn snapshot(&self) -> SizingInput {
        SizingInput {
            region: self.region,
            fan_type: self.fan_type,
            flow_rate: self.flow_rate.value(),
            pressure_drop: self.pressure_drop.value(),
            efficiency: self.efficiency.value(),
            num_fans: self.num_fans.value(),
            dimensions: self.dimensions(),
            voltage: self.voltage.value(),
            rpm: self.rpm.value(),
            airflow_unit: self.airflow_unit,
            airflow_value: self.airflow_value(),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_cabin_preset() {
        let s = FormSession::default();
        let input = s.snapshot();
        assert_eq!(input.region, Region::Cabin);
        assert_eq!(input.flow_rate, 500.0);
        assert_eq!(input.pressure_drop, 250.0);
        assert_eq!(input.efficiency, 60.0);
        assert_eq!(input.num_fans, 1);
        assert_eq!(input.voltage, 12.0);
        assert_eq!(input.rpm, 2500);
        assert_eq!(input.airflow_value, 8.33);
    }

    #[test]
    fn setters_clamp_like_input_widgets() {
        let mut s = FormSession::default();
        s.set_flow_rate(1.0);
        s.set_efficiency(0.0);
        s.set_num_fans(0);
        s.set_airflow_value(-5.0);
        s.set_dimensions(0.0, 50.0, 5.0);
        let input = s.snapshot();
        assert_eq!(input.flow_rate, MIN_FLOW_RATE);
        assert_eq!(input.efficiency, MIN_EFFICIENCY);
        assert_eq!(input.num_fans, 1);
        assert_eq!(input.airflow_value, 0.0);
        assert_eq!(input.dimensions.width_mm, 50.0);
        assert_eq!(input.dimensions.depth_mm, MIN_DIMENSION_MM);
    }

    #[test]
    fn airflow_default_follows_flow_rate_until_set() {
        let mut s = FormSession::default();
        s.set_flow_rate(1200.0);
        assert_eq!(s.airflow_value(), 20.0);
        s.set_airflow_value(3.5);
        s.set_flow_rate(600.0);
        assert_eq!(s.airflow_value(), 3.5);
    }

    #[test]
    fn reset_restores_region_defaults() {
        let mut s = FormSession::default();
        s.set_region(Region::Cockpit);
        s.set_pressure_drop(999.0);
        s.set_rpm(4000);
        s.reset_overrides();
        assert_eq!(s.pressure_drop().value(), 200.0);
        assert_eq!(s.rpm(), 2500);
    }

    #[test]
    fn rpm_accepts_negative_entry() {
        let mut s = FormSession::default();
        s.set_rpm(-300);
        assert_eq!(s.snapshot().rpm, -300);
    }
}
