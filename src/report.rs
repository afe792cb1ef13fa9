//! 계산 결과를 화면 표시용 텍스트로 만든다. CLI 는 그대로 출력하고 GUI 는 줄 단위로 쓴다.

use crate::catalog::{FanCatalog, FanRecord};
use crate::i18n::{keys, Translator};
use crate::sizing::{self, SizingError, SizingInput, SizingResult};
use crate::units::AirflowReading;

/// 환산 풍량 한 줄 (소수 첫째 자리).
pub fn conversion_line(tr: &Translator, reading: &AirflowReading) -> String {
    tr.tf(
        keys::RESULT_CONVERTED_FLOW,
        &[
            ("m3h", format!("{:.1}", reading.m3_per_h)),
            ("cfm", format!("{:.1}", reading.cfm)),
        ],
    )
}

/// 결과 섹션의 요약 줄들.
pub fn result_lines(tr: &Translator, input: &SizingInput, result: &SizingResult) -> Vec<String> {
    vec![
        tr.tf(
            keys::RESULT_FLOW_PER_FAN,
            &[("m3h", format!("{:.1}", result.airflow_m3h))],
        ),
        tr.tf(
            keys::RESULT_PRESSURE,
            &[("pa", input.pressure_drop.to_string())],
        ),
        tr.tf(
            keys::RESULT_EFFICIENCY,
            &[("eff", input.efficiency.to_string())],
        ),
        tr.tf(
            keys::RESULT_POWER_PER_FAN,
            &[("w", format!("{:.2}", result.power_watt))],
        ),
        tr.tf(
            keys::RESULT_TOTAL_POWER,
            &[
                ("n", input.num_fans.to_string()),
                ("w", format!("{:.2}", result.total_power)),
            ],
        ),
        tr.tf(
            keys::RESULT_HORSEPOWER,
            &[("hp", format!("{:.3}", result.brake_horsepower))],
        ),
    ]
}

/// 팬 한 대의 제목 줄과 상세 줄.
pub fn fan_lines(tr: &Translator, fan: &FanRecord) -> (String, String) {
    let title = tr.tf(
        keys::FAN_TITLE,
        &[
            ("brand", fan.brand.to_string()),
            ("model", fan.model.to_string()),
        ],
    );
    let detail = tr.tf(
        keys::FAN_DETAIL,
        &[
            ("type", fan.fan_type.to_string()),
            ("flow", fan.max_flow.to_string()),
            ("pressure", fan.max_pressure.to_string()),
            ("power", fan.power.to_string()),
            ("voltage", fan.voltage.to_string()),
            ("rpm", fan.rpm.to_string()),
        ],
    );
    (title, detail)
}

pub fn error_message(tr: &Translator, err: &SizingError) -> String {
    match err {
        SizingError::InvalidEfficiency => tr.t(keys::ERROR_INVALID_EFFICIENCY),
    }
}

/// 결과 또는 오류 섹션. 오류면 결과와 추천 목록을 모두 생략한다.
pub fn render_outcome(
    tr: &Translator,
    input: &SizingInput,
    outcome: &Result<SizingResult, SizingError>,
) -> String {
    let mut out = String::new();
    match outcome {
        Err(err) => {
            let prefix = tr.t(keys::ERROR_PREFIX);
            push_line(&mut out, &format!("{prefix}: {}", error_message(tr, err)));
        }
        Ok(result) => {
            push_line(&mut out, &tr.t(keys::RESULTS_HEADING));
            for line in result_lines(tr, input, result) {
                push_line(&mut out, &line);
            }
            push_line(&mut out, &tr.t(keys::SUGGESTED_HEADING));
            if result.has_match() {
                for fan in &result.suggested {
                    let (title, detail) = fan_lines(tr, fan);
                    push_line(&mut out, &title);
                    push_line(&mut out, &detail);
                    push_line(&mut out, "---");
                }
            } else {
                push_line(&mut out, &format!("❌ {}", tr.t(keys::NO_MATCH)));
            }
        }
    }
    out
}

pub fn render_formulas(tr: &Translator) -> String {
    let mut out = String::new();
    push_line(&mut out, &tr.t(keys::FORMULA_HEADING));
    push_line(&mut out, &tr.t(keys::FORMULA_BODY));
    out
}

pub fn render_catalog(tr: &Translator, catalog: &FanCatalog) -> String {
    let mut out = String::new();
    push_line(&mut out, &tr.t(keys::CATALOG_HEADING));
    for fan in catalog.fans() {
        let (title, detail) = fan_lines(tr, fan);
        push_line(&mut out, &title);
        push_line(&mut out, &detail);
    }
    out
}

/// 입력 스냅샷 하나에 대한 전체 보고서: 환산 풍량, 결과(또는 오류), 계산식 참고.
pub fn render_report(tr: &Translator, input: &SizingInput, catalog: &FanCatalog) -> String {
    let mut out = String::new();
    push_line(&mut out, &conversion_line(tr, &input.airflow()));
    let outcome = sizing::size(input, catalog);
    out.push_str(&render_outcome(tr, input, &outcome));
    out.push_str(&render_formulas(tr));
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FormSession;

    #[test]
    fn cabin_defaults_report_lists_single_axial_match() {
        // Cabin 기본값: 8.33 m³/min = 499.8 m³/h, 250 Pa, Axial, 2500 RPM
        let tr = Translator::new("en");
        let input = FormSession::default().snapshot();
        let text = render_report(&tr, &input, &FanCatalog::builtin());
        assert!(
            text.contains("Converted flow: 499.8 m³/h | 294.2 CFM"),
            "{text}"
        );
        assert!(text.contains("ebm-papst – A2D200-AA02-01"), "{text}");
        assert!(!text.contains("AFB1212GHE"), "{text}");
        assert!(text.contains("Fan Sizing Equations"));
    }

    #[test]
    fn no_match_report_shows_notice_under_heading() {
        let tr = Translator::new("en");
        let mut session = FormSession::default();
        session.set_voltage(28.0);
        let text = render_report(&tr, &session.snapshot(), &FanCatalog::builtin());
        assert!(text.contains("Suggested Fan Models"), "{text}");
        assert!(
            text.contains("❌ No suitable fan model found in the database"),
            "{text}"
        );
        assert!(!text.contains("A2D200-AA02-01"), "{text}");
    }

    #[test]
    fn invalid_efficiency_suppresses_results() {
        let tr = Translator::new("en");
        let mut input = FormSession::default().snapshot();
        input.efficiency = 0.0;
        let text = render_report(&tr, &input, &FanCatalog::builtin());
        assert!(text.contains("Error: Efficiency cannot be zero."));
        assert!(!text.contains("Sizing Results"));
        assert!(!text.contains("Suggested Fan Models"));
    }
}
