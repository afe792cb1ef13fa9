use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use crate::app::{AppContext, AppError};
use crate::catalog::FanType;
use crate::i18n::{self, keys, Translator};
use crate::presets::Region;
use crate::report;
use crate::session::FormSession;
use crate::units::{convert_airflow, AirflowUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Region,
    FanType,
    Parameters,
    Physical,
    Airflow,
    Results,
    Catalog,
    Formulas,
    Reset,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_REGION,
        keys::MAIN_MENU_FAN_TYPE,
        keys::MAIN_MENU_PARAMETERS,
        keys::MAIN_MENU_PHYSICAL,
        keys::MAIN_MENU_AIRFLOW,
        keys::MAIN_MENU_RESULTS,
        keys::MAIN_MENU_CATALOG,
        keys::MAIN_MENU_FORMULAS,
        keys::MAIN_MENU_RESET,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Region),
        "2" => Some(MenuChoice::FanType),
        "3" => Some(MenuChoice::Parameters),
        "4" => Some(MenuChoice::Physical),
        "5" => Some(MenuChoice::Airflow),
        "6" => Some(MenuChoice::Results),
        "7" => Some(MenuChoice::Catalog),
        "8" => Some(MenuChoice::Formulas),
        "9" => Some(MenuChoice::Reset),
        "10" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 구역 선택 메뉴를 처리한다.
pub fn handle_region(tr: &Translator, session: &mut FormSession) -> Result<(), AppError> {
    let names: Vec<&str> = Region::ALL.iter().map(|r| r.name()).collect();
    if let Some(idx) = select_from(tr, keys::LABEL_REGION, &names, session.region() as usize)? {
        session.set_region(Region::ALL[idx]);
    }
    println!(
        "{}: {} | {}: {} | {}: {}",
        tr.t(keys::LABEL_FLOW_RATE),
        session.flow_rate().value(),
        tr.t(keys::LABEL_PRESSURE_DROP),
        session.pressure_drop().value(),
        tr.t(keys::LABEL_EFFICIENCY),
        session.efficiency().value()
    );
    Ok(())
}

/// 팬 형식 선택 메뉴를 처리한다.
pub fn handle_fan_type(tr: &Translator, session: &mut FormSession) -> Result<(), AppError> {
    let names: Vec<&str> = FanType::ALL.iter().map(|t| t.name()).collect();
    let current = session.fan_type() as usize;
    if let Some(idx) = select_from(tr, keys::LABEL_FAN_TYPE, &names, current)? {
        session.set_fan_type(FanType::ALL[idx]);
    }
    Ok(())
}

/// 풍량/압력/효율/대수 입력을 처리한다. 엔터만 누르면 현재 값을 유지한다.
pub fn handle_parameters(tr: &Translator, session: &mut FormSession) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEADING_INPUTS));
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    if let Some(v) = read_optional(tr, keys::LABEL_FLOW_RATE, session.flow_rate().value())? {
        session.set_flow_rate(v);
    }
    let pressure = session.pressure_drop().value();
    if let Some(v) = read_optional(tr, keys::LABEL_PRESSURE_DROP, pressure)? {
        session.set_pressure_drop(v);
    }
    if let Some(v) = read_optional(tr, keys::LABEL_EFFICIENCY, session.efficiency().value())? {
        session.set_efficiency(v);
    }
    if let Some(v) = read_optional(tr, keys::LABEL_NUM_FANS, session.num_fans())? {
        session.set_num_fans(v);
    }
    Ok(())
}

/// 치수/전압/회전수 입력을 처리한다.
pub fn handle_physical(tr: &Translator, session: &mut FormSession) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEADING_PHYSICAL));
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    let dims = session.dimensions();
    let h = read_optional(tr, keys::LABEL_HEIGHT, dims.height_mm)?;
    let w = read_optional(tr, keys::LABEL_WIDTH, dims.width_mm)?;
    let d = read_optional(tr, keys::LABEL_DEPTH, dims.depth_mm)?;
    if h.is_some() || w.is_some() || d.is_some() {
        session.set_dimensions(
            h.unwrap_or(dims.height_mm),
            w.unwrap_or(dims.width_mm),
            d.unwrap_or(dims.depth_mm),
        );
    }
    if let Some(v) = read_optional(tr, keys::LABEL_VOLTAGE, session.voltage())? {
        session.set_voltage(v);
    }
    if let Some(v) = read_optional(tr, keys::LABEL_RPM, session.rpm())? {
        session.set_rpm(v);
    }
    Ok(())
}

/// 풍량 단위와 값을 입력받고 환산 결과를 바로 보여준다.
pub fn handle_airflow(tr: &Translator, session: &mut FormSession) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEADING_AIRFLOW));
    let symbols: Vec<&str> = AirflowUnit::ALL.iter().map(|u| u.symbol()).collect();
    let current = AirflowUnit::ALL
        .iter()
        .position(|u| *u == session.airflow_unit())
        .unwrap_or(0);
    if let Some(idx) = select_from(tr, keys::LABEL_AIRFLOW_UNIT, &symbols, current)? {
        session.set_airflow_unit(AirflowUnit::ALL[idx]);
    }
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    if let Some(v) = read_optional(tr, keys::LABEL_AIRFLOW_VALUE, session.airflow_value())? {
        session.set_airflow_value(v);
    }
    let reading = convert_airflow(session.airflow_value(), session.airflow_unit());
    println!("{}", report::conversion_line(tr, &reading));
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어를 바꾸면 번역기를 즉시 다시 만든다.
pub fn handle_settings(ctx: &mut AppContext) -> Result<(), AppError> {
    println!("{}", ctx.tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        ctx.tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        ctx.config.language
    );
    println!("{}", ctx.tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&ctx.tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let lang = match sel.trim() {
        "1" => "auto",
        "2" => "en-us",
        "3" => "ko-kr",
        _ => {
            println!("{}", ctx.tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    ctx.config.language = lang.to_string();
    let resolved = i18n::resolve_language(lang, None);
    ctx.tr = Translator::new_with_pack(&resolved, ctx.config.language_pack_dir.as_deref());
    println!("{}", ctx.tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 목록을 번호와 함께 보여주고 선택 인덱스를 돌려준다. 엔터는 변경 없음(None).
fn select_from(
    tr: &Translator,
    label_key: &str,
    options: &[&str],
    current: usize,
) -> Result<Option<usize>, AppError> {
    println!("\n{}", tr.t(label_key));
    for (i, opt) in options.iter().enumerate() {
        let mark = if i == current { "*" } else { " " };
        println!("{mark}{}) {opt}", i + 1);
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(None);
        }
        match sel.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 값을 입력받는다. 엔터만 누르면 None (현재 값 유지).
fn read_optional<T>(tr: &Translator, label_key: &str, current: T) -> Result<Option<T>, AppError>
where
    T: FromStr + Display,
{
    loop {
        let s = read_line(&format!("{} [{current}]: ", tr.t(label_key)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu_choice(" 6\n"), Some(MenuChoice::Results));
        assert_eq!(parse_menu_choice("10"), Some(MenuChoice::Settings));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("11"), None);
    }
}
