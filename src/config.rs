use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::units::AirflowUnit;

pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto / en-us / ko-kr)
    pub language: String,
    /// 언어팩 디렉터리. 없으면 내장 문자열 사용
    pub language_pack_dir: Option<String>,
    /// 팬 카탈로그 TOML 경로. 없으면 내장 카탈로그 사용
    pub catalog_path: Option<String>,
    pub default_voltage: f64,
    pub default_rpm: i32,
    pub default_airflow_unit: AirflowUnit,
    /// GUI 창 불투명도 (0.3~1.0)
    pub window_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            catalog_path: None,
            default_voltage: 12.0,
            default_rpm: 2500,
            default_airflow_unit: AirflowUnit::CubicMeterPerMinute,
            window_alpha: 1.0,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("default_rpm = 3000").unwrap();
        assert_eq!(cfg.default_rpm, 3000);
        assert_eq!(cfg.default_voltage, 12.0);
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.default_airflow_unit, AirflowUnit::CubicMeterPerMinute);
    }

    #[test]
    fn creates_then_reloads_file() {
        let path = std::env::temp_dir().join(format!(
            "aircraft_fan_sizing_cfg_{}.toml",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        let created = load_or_create(&path).unwrap();
        assert_eq!(created, Config::default());

        let mut changed = created.clone();
        changed.catalog_path = Some("fans.toml".into());
        changed.default_airflow_unit = AirflowUnit::Cfm;
        changed.save_to(&path).unwrap();
        let reloaded = load_or_create(&path).unwrap();
        assert_eq!(reloaded, changed);
        let _ = fs::remove_file(&path);
    }
}
