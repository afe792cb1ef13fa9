use crate::catalog::{FanCatalog, FanRecord, FanType};

/// 허용 회전수 편차 [RPM]. 경계값 포함.
pub const RPM_TOLERANCE: u32 = 1000;

/// 카탈로그 검색 조건.
#[derive(Debug, Clone, Copy)]
pub struct MatchCriteria {
    pub fan_type: FanType,
    /// 요구 풍량 [m³/h]
    pub airflow_m3h: f64,
    /// 요구 정압 [Pa]
    pub pressure_drop_pa: f64,
    /// 운전 전압 [VDC]
    pub voltage: f64,
    pub rpm: i32,
}

impl MatchCriteria {
    /// 다섯 조건을 모두 만족하는지 확인한다.
    pub fn accepts(&self, fan: &FanRecord) -> bool {
        fan.fan_type == self.fan_type
            && fan.max_flow >= self.airflow_m3h
            && fan.max_pressure >= self.pressure_drop_pa
            && fan.voltage == self.voltage
            && fan.rpm.abs_diff(self.rpm) <= RPM_TOLERANCE
    }
}

/// 조건을 만족하는 팬을 카탈로그 순서 그대로 돌려준다. 정렬이나 점수화는 하지 않는다.
pub fn match_fans<'a>(catalog: &'a FanCatalog, criteria: &MatchCriteria) -> Vec<&'a FanRecord> {
    catalog
        .fans()
        .iter()
        .filter(|fan| criteria.accepts(fan))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axial(rpm: i32) -> MatchCriteria {
        MatchCriteria {
            fan_type: FanType::Axial,
            airflow_m3h: 500.0,
            pressure_drop_pa: 300.0,
            voltage: 12.0,
            rpm,
        }
    }

    fn models(found: &[&FanRecord]) -> Vec<String> {
        found.iter().map(|f| f.model.to_string()).collect()
    }

    #[test]
    fn rpm_bound_is_inclusive() {
        let cat = FanCatalog::builtin();
        let found = match_fans(&cat, &axial(3000));
        assert_eq!(models(&found), ["A2D200-AA02-01", "AFB1212GHE"]);
    }

    #[test]
    fn rpm_difference_over_tolerance_excludes() {
        let cat = FanCatalog::builtin();
        let found = match_fans(&cat, &axial(2500));
        assert_eq!(models(&found), ["A2D200-AA02-01"]);
    }

    #[test]
    fn pressure_above_fan_limit_excludes() {
        let cat = FanCatalog::builtin();
        let mut c = axial(3000);
        c.pressure_drop_pa = 320.0;
        assert_eq!(models(&match_fans(&cat, &c)), ["A2D200-AA02-01"]);
    }

    #[test]
    fn flow_bound_is_inclusive() {
        let cat = FanCatalog::builtin();
        let mut c = axial(3000);
        c.airflow_m3h = 600.0;
        assert_eq!(
            models(&match_fans(&cat, &c)),
            ["A2D200-AA02-01", "AFB1212GHE"]
        );
        c.airflow_m3h = 600.1;
        assert_eq!(models(&match_fans(&cat, &c)), ["A2D200-AA02-01"]);
    }

    #[test]
    fn negative_rpm_request_uses_absolute_difference() {
        let cat = FanCatalog::from_records(vec![FanRecord {
            brand: "Acme".into(),
            model: "LOW-500".into(),
            fan_type: FanType::Axial,
            max_flow: 900.0,
            max_pressure: 900.0,
            power: 10.0,
            voltage: 12.0,
            rpm: 500,
        }]);
        assert_eq!(models(&match_fans(&cat, &axial(-500))), ["LOW-500"]);
        assert!(match_fans(&cat, &axial(-501)).is_empty());
    }

    #[test]
    fn voltage_must_match_exactly() {
        let cat = FanCatalog::builtin();
        let mut c = axial(2500);
        c.voltage = 12.000_001;
        assert!(match_fans(&cat, &c).is_empty());
    }

    #[test]
    fn centrifugal_keeps_catalog_order() {
        let cat = FanCatalog::builtin();
        let c = MatchCriteria {
            fan_type: FanType::Centrifugal,
            airflow_m3h: 250.0,
            pressure_drop_pa: 400.0,
            voltage: 12.0,
            rpm: 2600,
        };
        assert_eq!(
            models(&match_fans(&cat, &c)),
            ["9HV1248P1G03", "R2E220-AA40-17", "BFB1012VH"]
        );
    }

    #[test]
    fn no_candidate_gives_empty_vec() {
        let cat = FanCatalog::builtin();
        let mut c = axial(2500);
        c.airflow_m3h = 5000.0;
        assert!(match_fans(&cat, &c).is_empty());
    }
}
