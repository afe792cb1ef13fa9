use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";
    pub const APP_FOOTER: &str = "general.app_footer";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_REGION: &str = "main_menu.region";
    pub const MAIN_MENU_FAN_TYPE: &str = "main_menu.fan_type";
    pub const MAIN_MENU_PARAMETERS: &str = "main_menu.parameters";
    pub const MAIN_MENU_PHYSICAL: &str = "main_menu.physical";
    pub const MAIN_MENU_AIRFLOW: &str = "main_menu.airflow";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_FORMULAS: &str = "main_menu.formulas";
    pub const MAIN_MENU_RESET: &str = "main_menu.reset";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_KEEP_HINT: &str = "prompt.keep_hint";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const OVERRIDES_CLEARED: &str = "session.overrides_cleared";

    pub const HEADING_INPUTS: &str = "input.heading";
    pub const HEADING_PHYSICAL: &str = "input.physical_heading";
    pub const HEADING_AIRFLOW: &str = "input.airflow_heading";
    pub const LABEL_REGION: &str = "input.region";
    pub const LABEL_FAN_TYPE: &str = "input.fan_type";
    pub const LABEL_FLOW_RATE: &str = "input.flow_rate";
    pub const LABEL_PRESSURE_DROP: &str = "input.pressure_drop";
    pub const LABEL_EFFICIENCY: &str = "input.efficiency";
    pub const LABEL_NUM_FANS: &str = "input.num_fans";
    pub const LABEL_HEIGHT: &str = "input.height";
    pub const LABEL_WIDTH: &str = "input.width";
    pub const LABEL_DEPTH: &str = "input.depth";
    pub const LABEL_VOLTAGE: &str = "input.voltage";
    pub const LABEL_RPM: &str = "input.rpm";
    pub const LABEL_AIRFLOW_UNIT: &str = "input.airflow_unit";
    pub const LABEL_AIRFLOW_VALUE: &str = "input.airflow_value";

    pub const RESULT_CONVERTED_FLOW: &str = "result.converted_flow";
    pub const RESULTS_HEADING: &str = "result.heading";
    pub const RESULT_FLOW_PER_FAN: &str = "result.flow_per_fan";
    pub const RESULT_PRESSURE: &str = "result.pressure";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const RESULT_POWER_PER_FAN: &str = "result.power_per_fan";
    pub const RESULT_TOTAL_POWER: &str = "result.total_power";
    pub const RESULT_HORSEPOWER: &str = "result.horsepower";
    pub const SUGGESTED_HEADING: &str = "result.suggested_heading";
    pub const FAN_TITLE: &str = "result.fan_title";
    pub const FAN_DETAIL: &str = "result.fan_detail";
    pub const NO_MATCH: &str = "result.no_match";
    pub const ERROR_INVALID_EFFICIENCY: &str = "error.invalid_efficiency";

    pub const FORMULA_HEADING: &str = "formula.heading";
    pub const FORMULA_BODY: &str = "formula.body";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_LOAD_BUTTON: &str = "catalog.load_button";
    pub const CATALOG_LOAD_FAILED: &str = "catalog.load_failed";
    pub const CATALOG_BUILTIN: &str = "catalog.builtin";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("en-us")
    }
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순. 한국어 번역이 없으면 영어로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or("[missing translation]").to_string()
    }

    /// `{name}` 자리표시자를 채운 번역을 가져온다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 점(.)으로 이은 키가 된다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.to_string()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }
    Some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "항공기 팬 사이징 도구",
        APP_SUBTITLE => "항공기 객실/구역 환기용 팬 선정을 돕는 계산기입니다.",
        APP_FOOTER => "항공기 환기 팬 사이징용",
        MAIN_MENU_TITLE => "\n=== 항공기 팬 사이징 도구 ===",
        MAIN_MENU_REGION => "1) 구역 선택",
        MAIN_MENU_FAN_TYPE => "2) 팬 형식 선택",
        MAIN_MENU_PARAMETERS => "3) 설계 입력값 (풍량/압력/효율/대수)",
        MAIN_MENU_PHYSICAL => "4) 물리 치수/전압/회전수",
        MAIN_MENU_AIRFLOW => "5) 풍량 환산 입력",
        MAIN_MENU_RESULTS => "6) 사이징 결과 보기",
        MAIN_MENU_CATALOG => "7) 팬 카탈로그 보기",
        MAIN_MENU_FORMULAS => "8) 계산식 참고",
        MAIN_MENU_RESET => "9) 입력값 초기화",
        MAIN_MENU_SETTINGS => "10) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        PROMPT_KEEP_HINT => "(엔터 = 현재값 유지)",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        OVERRIDES_CLEARED => "직접 입력한 값을 모두 지웠습니다.",
        HEADING_INPUTS => "\n-- 설계 입력값 --",
        HEADING_PHYSICAL => "\n-- 물리 치수 --",
        HEADING_AIRFLOW => "\n-- 풍량 환산 --",
        LABEL_REGION => "항공기 구역",
        LABEL_FAN_TYPE => "팬 형식",
        LABEL_FLOW_RATE => "요구 풍량 (m³/h)",
        LABEL_PRESSURE_DROP => "예상 압력 강하 (Pa)",
        LABEL_EFFICIENCY => "팬 효율 (%)",
        LABEL_NUM_FANS => "팬 대수",
        LABEL_HEIGHT => "팬 높이 (mm)",
        LABEL_WIDTH => "팬 폭 (mm)",
        LABEL_DEPTH => "팬 깊이 (mm)",
        LABEL_VOLTAGE => "운전 전압 (VDC)",
        LABEL_RPM => "팬 회전수 (RPM)",
        LABEL_AIRFLOW_UNIT => "풍량 입력 단위",
        LABEL_AIRFLOW_VALUE => "풍량 값",
        RESULT_CONVERTED_FLOW => "환산 풍량: {m3h} m³/h | {cfm} CFM",
        RESULTS_HEADING => "\n-- 사이징 결과 --",
        RESULT_FLOW_PER_FAN => "팬 1대당 요구 풍량: {m3h} m³/h",
        RESULT_PRESSURE => "요구 압력: {pa} Pa",
        RESULT_EFFICIENCY => "팬 효율: {eff}%",
        RESULT_POWER_PER_FAN => "팬 1대당 계산 동력: {w} W",
        RESULT_TOTAL_POWER => "팬 {n}대 전체 동력: {w} W",
        RESULT_HORSEPOWER => "팬 1대당 축동력 추정: {hp} HP",
        SUGGESTED_HEADING => "\n-- 추천 팬 모델 --",
        FAN_TITLE => "{brand} – {model}",
        FAN_DETAIL => {
            "• 형식: {type} | 최대 풍량: {flow} m³/h | 최대 압력: {pressure} Pa | 동력: {power} W | 전압: {voltage} VDC | 회전수: {rpm} RPM"
        }
        NO_MATCH => "입력 조건에 맞는 팬 모델을 데이터베이스에서 찾지 못했습니다.",
        ERROR_INVALID_EFFICIENCY => "효율은 0일 수 없습니다.",
        FORMULA_HEADING => "\n-- 팬 사이징 계산식 --",
        FORMULA_BODY => {
            "- 동력(W): P = Q·ΔP / η\n- Q: 풍량 (m³/s)\n- ΔP: 압력 강하 (Pa)\n- η: 효율 (소수)\n\n환산:\n- 1 CFM ≈ 0.0283 m³/min ≈ 1.699 m³/h\n- 1 m³/min ≈ 35.315 CFM\n- 1 m³/h = 0.5886 CFM\n\n마력(HP) 추정:\nHP = Q_cfm·ΔP / (6356·η)  (ΔP: inH2O, 1 inH2O = 249.089 Pa)"
        }
        CATALOG_HEADING => "\n-- 팬 카탈로그 --",
        CATALOG_LOAD_BUTTON => "카탈로그 불러오기",
        CATALOG_LOAD_FAILED => "카탈로그를 불러오지 못했습니다. 기존 카탈로그를 유지합니다",
        CATALOG_BUILTIN => "내장 카탈로그",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 자동(시스템)  2) English  3) 한국어",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Aircraft Fan Sizing Tool",
        APP_SUBTITLE => "This tool helps to size fans for aircraft interior ventilation systems.",
        APP_FOOTER => "Developed for aircraft ventilation sizing",
        MAIN_MENU_TITLE => "\n=== Aircraft Fan Sizing Tool ===",
        MAIN_MENU_REGION => "1) Select aircraft region",
        MAIN_MENU_FAN_TYPE => "2) Select fan type",
        MAIN_MENU_PARAMETERS => "3) Input parameters (flow/pressure/efficiency/fans)",
        MAIN_MENU_PHYSICAL => "4) Physical parameters/voltage/speed",
        MAIN_MENU_AIRFLOW => "5) Airflow conversion",
        MAIN_MENU_RESULTS => "6) Show sizing results",
        MAIN_MENU_CATALOG => "7) Show fan catalog",
        MAIN_MENU_FORMULAS => "8) Formula reference",
        MAIN_MENU_RESET => "9) Reset inputs",
        MAIN_MENU_SETTINGS => "10) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        PROMPT_KEEP_HINT => "(Enter = keep current)",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        OVERRIDES_CLEARED => "All entered values were cleared.",
        HEADING_INPUTS => "\n-- Input Parameters --",
        HEADING_PHYSICAL => "\n-- Physical Parameters --",
        HEADING_AIRFLOW => "\n-- Airflow Conversion --",
        LABEL_REGION => "Aircraft region",
        LABEL_FAN_TYPE => "Fan type",
        LABEL_FLOW_RATE => "Required flow rate (m³/h)",
        LABEL_PRESSURE_DROP => "Estimated pressure drop (Pa)",
        LABEL_EFFICIENCY => "Fan efficiency (%)",
        LABEL_NUM_FANS => "Number of fans",
        LABEL_HEIGHT => "Fan height (mm)",
        LABEL_WIDTH => "Fan width (mm)",
        LABEL_DEPTH => "Fan depth (mm)",
        LABEL_VOLTAGE => "Operating voltage (VDC)",
        LABEL_RPM => "Fan speed (RPM)",
        LABEL_AIRFLOW_UNIT => "Enter airflow in",
        LABEL_AIRFLOW_VALUE => "Airflow value",
        RESULT_CONVERTED_FLOW => "Converted flow: {m3h} m³/h | {cfm} CFM",
        RESULTS_HEADING => "\n-- Sizing Results --",
        RESULT_FLOW_PER_FAN => "Required flow rate per fan: {m3h} m³/h",
        RESULT_PRESSURE => "Required pressure: {pa} Pa",
        RESULT_EFFICIENCY => "Fan efficiency: {eff}%",
        RESULT_POWER_PER_FAN => "Calculated power per fan: {w} W",
        RESULT_TOTAL_POWER => "Total power for {n} fan(s): {w} W",
        RESULT_HORSEPOWER => "Estimated shaft power per fan: {hp} HP",
        SUGGESTED_HEADING => "\n-- Suggested Fan Models --",
        FAN_TITLE => "{brand} – {model}",
        FAN_DETAIL => {
            "• Type: {type} | Max Flow: {flow} m³/h | Max Pressure: {pressure} Pa | Power: {power} W | Voltage: {voltage} VDC | Speed: {rpm} RPM"
        }
        NO_MATCH => "No suitable fan model found in the database based on your inputs.",
        ERROR_INVALID_EFFICIENCY => "Efficiency cannot be zero.",
        FORMULA_HEADING => "\n-- Fan Sizing Equations --",
        FORMULA_BODY => {
            "- Power (W): P = Q·ΔP / η\n- Q: Flow rate (m³/s)\n- ΔP: Pressure drop (Pa)\n- η: Efficiency (decimal)\n\nConversions:\n- 1 CFM ≈ 0.0283 m³/min ≈ 1.699 m³/h\n- 1 m³/min ≈ 35.315 CFM\n- 1 m³/h = 0.5886 CFM\n\nHorsepower (HP) estimate:\nHP = Q_cfm·ΔP / (6356·η)  (ΔP in inH2O, 1 inH2O = 249.089 Pa)"
        }
        CATALOG_HEADING => "\n-- Fan Catalog --",
        CATALOG_LOAD_BUTTON => "Load catalog",
        CATALOG_LOAD_FAILED => "Could not load catalog, keeping the current one",
        CATALOG_BUILTIN => "Built-in catalog",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Auto (system)  2) English  3) 한국어",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_for_unknown_keys() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let tr = Translator::new("en");
        let line = tr.tf(
            keys::RESULT_TOTAL_POWER,
            &[("n", "3".into()), ("w", "416.67".into())],
        );
        assert_eq!(line, "Total power for 3 fan(s): 416.67 W");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en-us")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en")), "en-us");
    }

    #[test]
    fn nested_pack_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[result]\nno_match = \"none\"").unwrap();
        assert_eq!(map.get(keys::NO_MATCH).map(String::as_str), Some("none"));
    }
}
