//! 팬 카탈로그. 내장 테이블과 TOML 파일 두 가지 출처를 지원한다.
//! 값은 참고용이며 실제 선정 시 제조사 데이터시트로 검증해야 한다.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// 팬 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FanType {
    #[default]
    Axial,
    Centrifugal,
    Mixed,
}

impl FanType {
    pub const ALL: [FanType; 3] = [FanType::Axial, FanType::Centrifugal, FanType::Mixed];

    pub fn name(&self) -> &'static str {
        match self {
            FanType::Axial => "Axial",
            FanType::Centrifugal => "Centrifugal",
            FanType::Mixed => "Mixed",
        }
    }

    /// 고정된 이름과 정확히 일치(대소문자 구분)할 때만 인식한다.
    pub fn from_name(name: &str) -> Option<FanType> {
        FanType::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl std::fmt::Display for FanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 카탈로그 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanRecord {
    pub brand: Cow<'static, str>,
    pub model: Cow<'static, str>,
    pub fan_type: FanType,
    /// 최대 풍량 [m³/h]
    pub max_flow: f64,
    /// 최대 정압 [Pa]
    pub max_pressure: f64,
    /// 소비 전력 [W]
    pub power: f64,
    /// 정격 전압 [VDC]
    pub voltage: f64,
    pub rpm: i32,
}

/// 카탈로그 로드 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("카탈로그 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("카탈로그에 팬 항목이 없습니다")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    fans: Vec<FanRecord>,
}

/// 실행 중에는 변경되지 않는 팬 목록. 선언 순서가 곧 출력 순서다.
#[derive(Debug, Clone, PartialEq)]
pub struct FanCatalog {
    fans: Vec<FanRecord>,
}

impl Default for FanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FanCatalog {
    pub fn builtin() -> Self {
        Self {
            fans: BUILTIN_FANS.to_vec(),
        }
    }

    /// 임의의 목록으로 카탈로그를 만든다. 테스트나 외부 데이터 주입용.
    pub fn from_records(fans: Vec<FanRecord>) -> Self {
        Self { fans }
    }

    /// `[[fans]]` 테이블 배열 형식의 TOML 을 읽는다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        if file.fans.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { fans: file.fans })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        info!(path = %path.display(), fans = catalog.len(), "fan catalog loaded");
        Ok(catalog)
    }

    /// 경로가 주어지면 파일을 읽고, 실패하면 경고를 남긴 뒤 내장 카탈로그로 대체한다.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load(p).unwrap_or_else(|err| {
                warn!(path = %p.display(), error = %err, "falling back to built-in fan catalog");
                Self::builtin()
            }),
            None => Self::builtin(),
        }
    }

    pub fn fans(&self) -> &[FanRecord] {
        &self.fans
    }

    pub fn len(&self) -> usize {
        self.fans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fans.is_empty()
    }

    pub fn find_model(&self, model: &str) -> Option<&FanRecord> {
        self.fans
            .iter()
            .find(|f| f.model.eq_ignore_ascii_case(model))
    }
}

const BUILTIN_FANS: &[FanRecord] = &[
    FanRecord {
        brand: Cow::Borrowed("ebm-papst"),
        model: Cow::Borrowed("A2D200-AA02-01"),
        fan_type: FanType::Axial,
        max_flow: 800.0,
        max_pressure: 350.0,
        power: 70.0,
        voltage: 12.0,
        rpm: 2500,
    },
    FanRecord {
        brand: Cow::Borrowed("Sanyo Denki"),
        model: Cow::Borrowed("9HV1248P1G03"),
        fan_type: FanType::Centrifugal,
        max_flow: 420.0,
        max_pressure: 500.0,
        power: 48.0,
        voltage: 12.0,
        rpm: 3200,
    },
    FanRecord {
        brand: Cow::Borrowed("Delta"),
        model: Cow::Borrowed("AFB1212GHE"),
        fan_type: FanType::Axial,
        max_flow: 600.0,
        max_pressure: 300.0,
        power: 60.0,
        voltage: 12.0,
        rpm: 4000,
    },
    FanRecord {
        brand: Cow::Borrowed("Nidec"),
        model: Cow::Borrowed("U76X12MS1A5-57"),
        fan_type: FanType::Mixed,
        max_flow: 500.0,
        max_pressure: 400.0,
        power: 55.0,
        voltage: 12.0,
        rpm: 2800,
    },
    FanRecord {
        brand: Cow::Borrowed("ebm-papst"),
        model: Cow::Borrowed("R2E220-AA40-17"),
        fan_type: FanType::Centrifugal,
        max_flow: 1000.0,
        max_pressure: 600.0,
        power: 120.0,
        voltage: 12.0,
        rpm: 1800,
    },
    FanRecord {
        brand: Cow::Borrowed("Delta"),
        model: Cow::Borrowed("BFB1012VH"),
        fan_type: FanType::Centrifugal,
        max_flow: 300.0,
        max_pressure: 450.0,
        power: 40.0,
        voltage: 12.0,
        rpm: 3500,
    },
];
