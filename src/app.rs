use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::catalog::{CatalogError, FanCatalog};
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, keys, Translator};
use crate::report;
use crate::session::{FormSession, SessionDefaults};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
}

/// CLI 실행 한 번 동안 유지되는 상태.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub tr: Translator,
    pub session: FormSession,
    pub catalog: FanCatalog,
}

impl AppContext {
    /// 설정으로부터 번역기, 입력 세션, 카탈로그를 준비한다.
    /// `lang_arg` 와 `catalog` 는 CLI 에서 넘어온 값이며 설정값보다 우선한다.
    pub fn from_config(config: Config, lang_arg: &str, catalog: Option<FanCatalog>) -> Self {
        let lang = i18n::resolve_language(lang_arg, Some(config.language.as_str()));
        let tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
        let catalog = catalog.unwrap_or_else(|| {
            FanCatalog::load_or_builtin(config.catalog_path.as_deref().map(Path::new))
        });
        let session = FormSession::new(SessionDefaults::from(&config));
        info!(
            language = tr.language_code(),
            fans = catalog.len(),
            "application context ready"
        );
        Self {
            config,
            tr,
            session,
            catalog,
        }
    }

    pub fn report(&self) -> String {
        report::render_report(&self.tr, &self.session.snapshot(), &self.catalog)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(ctx: &mut AppContext) -> Result<(), AppError> {
    println!("{}", ctx.tr.t(keys::APP_SUBTITLE));
    loop {
        match ui_cli::main_menu(&ctx.tr)? {
            MenuChoice::Region => ui_cli::handle_region(&ctx.tr, &mut ctx.session)?,
            MenuChoice::FanType => ui_cli::handle_fan_type(&ctx.tr, &mut ctx.session)?,
            MenuChoice::Parameters => ui_cli::handle_parameters(&ctx.tr, &mut ctx.session)?,
            MenuChoice::Physical => ui_cli::handle_physical(&ctx.tr, &mut ctx.session)?,
            MenuChoice::Airflow => ui_cli::handle_airflow(&ctx.tr, &mut ctx.session)?,
            MenuChoice::Results => print!("{}", ctx.report()),
            MenuChoice::Catalog => print!("{}", report::render_catalog(&ctx.tr, &ctx.catalog)),
            MenuChoice::Formulas => print!("{}", report::render_formulas(&ctx.tr)),
            MenuChoice::Reset => {
                ctx.session.reset_overrides();
                println!("{}", ctx.tr.t(keys::OVERRIDES_CLEARED));
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(ctx)?;
                ctx.config.save()?;
            }
            MenuChoice::Exit => {
                println!("{}", ctx.tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
