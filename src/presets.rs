//! 항공기 구역별 기본 설계값.

use serde::{Deserialize, Serialize};

/// 항공기 내부 구역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Region {
    #[default]
    Cabin,
    Cockpit,
    AvionicsBay,
    CargoHold,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Cabin,
        Region::Cockpit,
        Region::AvionicsBay,
        Region::CargoHold,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Cabin => "Cabin",
            Region::Cockpit => "Cockpit",
            Region::AvionicsBay => "Avionics Bay",
            Region::CargoHold => "Cargo Hold",
        }
    }

    /// 표시 이름으로 구역을 찾는다. 정확히 일치해야 한다.
    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.name() == name)
    }

    pub fn preset(&self) -> &'static RegionPreset {
        region_preset(*self)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionPreset {
    pub region: Region,
    /// [m³/h]
    pub default_flow: f64,
    /// [Pa]
    pub default_pressure: f64,
    /// 소수(0~1]
    pub default_efficiency: f64,
}

impl RegionPreset {
    /// 효율 기본값을 퍼센트 정수로 돌려준다. 0.55*100 같은 부동소수 오차 때문에 반올림한다.
    pub fn default_efficiency_percent(&self) -> u32 {
        (self.default_efficiency * 100.0).round() as u32
    }
}

const PRESETS: [RegionPreset; 4] = [
    RegionPreset {
        region: Region::Cabin,
        default_flow: 500.0,
        default_pressure: 250.0,
        default_efficiency: 0.6,
    },
    RegionPreset {
        region: Region::Cockpit,
        default_flow: 150.0,
        default_pressure: 200.0,
        default_efficiency: 0.55,
    },
    RegionPreset {
        region: Region::AvionicsBay,
        default_flow: 100.0,
        default_pressure: 350.0,
        default_efficiency: 0.5,
    },
    RegionPreset {
        region: Region::CargoHold,
        default_flow: 200.0,
        default_pressure: 300.0,
        default_efficiency: 0.65,
    },
];

pub fn presets() -> &'static [RegionPreset] {
    &PRESETS
}

pub fn region_preset(region: Region) -> &'static RegionPreset {
    match region {
        Region::Cabin => &PRESETS[0],
        Region::Cockpit => &PRESETS[1],
        Region::AvionicsBay => &PRESETS[2],
        Region::CargoHold => &PRESETS[3],
    }
}

pub fn preset_by_name(name: &str) -> Option<&'static RegionPreset> {
    Region::from_name(name).map(region_preset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_region_matches_table_row() {
        for region in Region::ALL {
            assert_eq!(region_preset(region).region, region);
        }
        let order: Vec<Region> = presets().iter().map(|p| p.region).collect();
        assert_eq!(order, Region::ALL);
    }

    #[test]
    fn lookup_by_name_is_exact() {
        let p = preset_by_name("Avionics Bay").unwrap();
        assert_eq!(p.default_flow, 100.0);
        assert_eq!(p.default_pressure, 350.0);
        assert!(preset_by_name("avionics bay").is_none());
        assert!(preset_by_name("Galley").is_none());
    }

    #[test]
    fn efficiency_percent_rounds_float_noise() {
        assert_eq!(Region::Cockpit.preset().default_efficiency_percent(), 55);
        assert_eq!(Region::CargoHold.preset().default_efficiency_percent(), 65);
        assert_eq!(Region::Cabin.preset().default_efficiency_percent(), 60);
    }
}
