use std::path::PathBuf;

use aircraft_fan_sizing::{
    app::{self, AppContext, AppError},
    catalog::{FanCatalog, FanType},
    config, conversion,
    i18n::{self, keys, Translator},
    presets::Region,
    session::FormSession,
    units::AirflowUnit,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// 항공기 내부 구역 환기 팬 사이징 계산기 (CLI).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Cabin, Cockpit, "Avionics Bay", "Cargo Hold"
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,
    /// Axial, Centrifugal, Mixed
    #[arg(long, value_parser = parse_fan_type)]
    fan_type: Option<FanType>,
    /// 요구 풍량 [m³/h]
    #[arg(long)]
    flow_rate: Option<f64>,
    /// 압력 강하 [Pa]
    #[arg(long)]
    pressure_drop: Option<f64>,
    /// 팬 효율 [%]
    #[arg(long)]
    efficiency: Option<f64>,
    /// 팬 대수
    #[arg(long)]
    fans: Option<u32>,
    /// [mm]
    #[arg(long)]
    height: Option<f64>,
    /// [mm]
    #[arg(long)]
    width: Option<f64>,
    /// [mm]
    #[arg(long)]
    depth: Option<f64>,
    /// 운전 전압 [VDC]
    #[arg(long)]
    voltage: Option<f64>,
    /// 회전수 [RPM]
    #[arg(long, allow_negative_numbers = true)]
    rpm: Option<i32>,
    /// m3/min, cfm, m3/h
    #[arg(long)]
    airflow_unit: Option<String>,
    #[arg(long)]
    airflow_value: Option<f64>,
    /// 팬 카탈로그 TOML
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// auto / en-us / ko-kr
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 보고서를 한 번 출력하고 종료한다
    #[arg(long)]
    batch: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("aircraft_fan_sizing=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = try_run(args) {
        let tr = Translator::new(&i18n::resolve_language("auto", None));
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(args: Args) -> Result<(), AppError> {
    let cfg = config::load_or_default()?;
    let catalog = match &args.catalog {
        Some(path) => Some(FanCatalog::load(path)?),
        None => None,
    };
    let mut ctx = AppContext::from_config(cfg, &args.lang, catalog);
    apply_args(&args, &mut ctx.session)?;
    if args.batch {
        print!("{}", ctx.report());
        return Ok(());
    }
    app::run(&mut ctx)
}

/// 명령행 값은 사용자가 직접 입력한 값으로 취급한다.
fn apply_args(args: &Args, session: &mut FormSession) -> Result<(), AppError> {
    if let Some(region) = args.region {
        session.set_region(region);
    }
    if let Some(fan_type) = args.fan_type {
        session.set_fan_type(fan_type);
    }
    if let Some(v) = args.flow_rate {
        session.set_flow_rate(v);
    }
    if let Some(v) = args.pressure_drop {
        session.set_pressure_drop(v);
    }
    if let Some(v) = args.efficiency {
        session.set_efficiency(v);
    }
    if let Some(v) = args.fans {
        session.set_num_fans(v);
    }
    if args.height.is_some() || args.width.is_some() || args.depth.is_some() {
        let dims = session.dimensions();
        session.set_dimensions(
            args.height.unwrap_or(dims.height_mm),
            args.width.unwrap_or(dims.width_mm),
            args.depth.unwrap_or(dims.depth_mm),
        );
    }
    if let Some(v) = args.voltage {
        session.set_voltage(v);
    }
    if let Some(v) = args.rpm {
        session.set_rpm(v);
    }
    if let Some(unit) = &args.airflow_unit {
        session.set_airflow_unit(conversion::parse_airflow_unit(unit)?);
    }
    if let Some(v) = args.airflow_value {
        session.set_airflow_value(v);
    }
    Ok(())
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_lowercase()
}

fn parse_region(s: &str) -> Result<Region, String> {
    Region::ALL
        .into_iter()
        .find(|r| squash(r.name()) == squash(s))
        .ok_or_else(|| format!("unknown region: {s}"))
}

fn parse_fan_type(s: &str) -> Result<FanType, String> {
    FanType::ALL
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("unknown fan type: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_flag_accepts_kebab_case() {
        assert_eq!(parse_region("avionics-bay"), Ok(Region::AvionicsBay));
        assert_eq!(parse_region("Cargo Hold"), Ok(Region::CargoHold));
        assert!(parse_region("galley").is_err());
    }

    #[test]
    fn args_become_user_overrides() {
        let args = Args::parse_from([
            "aircraft_fan_sizing_cli",
            "--region",
            "cockpit",
            "--pressure-drop",
            "180",
            "--airflow-unit",
            "cfm",
            "--batch",
        ]);
        let mut session = FormSession::default();
        apply_args(&args, &mut session).unwrap();
        let input = session.snapshot();
        assert_eq!(input.region, Region::Cockpit);
        assert_eq!(input.flow_rate, 150.0);
        assert_eq!(input.pressure_drop, 180.0);
        assert_eq!(input.airflow_unit, AirflowUnit::Cfm);
        assert!(args.batch);
    }

    #[test]
    fn rpm_flag_takes_negative_value() {
        let args = Args::parse_from(["aircraft_fan_sizing_cli", "--rpm", "-300"]);
        let mut session = FormSession::default();
        apply_args(&args, &mut session).unwrap();
        assert_eq!(session.rpm(), -300);
    }

    #[test]
    fn unknown_airflow_unit_is_an_error() {
        let args = Args::parse_from(["aircraft_fan_sizing_cli", "--airflow-unit", "l/s"]);
        let mut session = FormSession::default();
        assert!(matches!(
            apply_args(&args, &mut session),
            Err(AppError::Conversion(_))
        ));
    }
}
