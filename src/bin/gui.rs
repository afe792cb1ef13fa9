#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use aircraft_fan_sizing::{
    catalog::{FanCatalog, FanType},
    config,
    i18n::{self, keys},
    presets::Region,
    report,
    session::{self, FormSession, SessionDefaults},
    sizing,
    units::AirflowUnit,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("aircraft_fan_sizing=info")),
        )
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(760.0, 900.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|err| {
        warn!(error = %err, "config unavailable, using defaults");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Aircraft Fan Sizing Tool",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록. 기본 폰트 뒤에 붙여 한글 글리프만 보충한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

const SYSTEM_CJK_FONTS: [&str; 3] = [
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
];

const LANGUAGE_CHOICES: [(&str, &str); 3] = [
    ("auto", "Auto"),
    ("en-us", "English (US)"),
    ("ko-kr", "한국어"),
];

/// 한글을 표시할 폰트를 찾는다.
/// 1) assets/fonts 아래 프로젝트 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림)
/// 3) 리눅스/맥 CJK 폰트
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(SYSTEM_CJK_FONTS.iter().map(PathBuf::from));
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            info!(font = %p.display(), "korean font registered");
            return Ok(());
        }
    }
    Err("Korean font not found; Hangul labels may not render.".into())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    session: FormSession,
    catalog: FanCatalog,
    catalog_label: String,
    catalog_status: Option<String>,
    lang_input: String,
    lang_save_status: Option<String>,
    window_alpha: f32,
    show_settings_modal: bool,
    show_catalog_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let catalog_path = config.catalog_path.clone();
        let catalog = FanCatalog::load_or_builtin(catalog_path.as_deref().map(Path::new));
        let catalog_label = catalog_path.unwrap_or_else(|| tr.t(keys::CATALOG_BUILTIN));
        info!(language = %lang_code, fans = catalog.len(), "gui started");
        Self {
            session: FormSession::new(SessionDefaults::from(&config)),
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            catalog,
            catalog_label,
            catalog_status: None,
            lang_save_status: None,
            show_settings_modal: false,
            show_catalog_modal: false,
        }
    }

    fn load_catalog_from(&mut self, path: &Path) {
        match FanCatalog::load(path) {
            Ok(catalog) => {
                self.catalog = catalog;
                self.catalog_label = path.display().to_string();
                self.config.catalog_path = Some(self.catalog_label.clone());
                self.catalog_status = None;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "catalog load failed");
                let prefix = self.tr.t(keys::CATALOG_LOAD_FAILED);
                self.catalog_status = Some(format!("{prefix}: {err}"));
            }
        }
    }

    fn ui_selectors(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        egui::Grid::new("selector_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::LABEL_REGION));
                let mut region = self.session.region();
                egui::ComboBox::from_id_source("region")
                    .selected_text(region.name())
                    .show_ui(ui, |ui| {
                        for r in Region::ALL {
                            ui.selectable_value(&mut region, r, r.name());
                        }
                    });
                if region != self.session.region() {
                    self.session.set_region(region);
                }
                ui.end_row();

                ui.label(tr.t(keys::LABEL_FAN_TYPE));
                let mut fan_type = self.session.fan_type();
                egui::ComboBox::from_id_source("fan_type")
                    .selected_text(fan_type.name())
                    .show_ui(ui, |ui| {
                        for t in FanType::ALL {
                            ui.selectable_value(&mut fan_type, t, t.name());
                        }
                    });
                if fan_type != self.session.fan_type() {
                    self.session.set_fan_type(fan_type);
                }
                ui.end_row();
            });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        egui::CollapsingHeader::new(format!("✏️ {}", tr.t(keys::HEADING_INPUTS).trim()))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("input_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(tr.t(keys::LABEL_FLOW_RATE));
                        let mut flow = self.session.flow_rate().value();
                        if drag_field(ui, &mut flow, session::MIN_FLOW_RATE, 1.0e7) {
                            self.session.set_flow_rate(flow);
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::LABEL_PRESSURE_DROP));
                        let mut dp = self.session.pressure_drop().value();
                        if drag_field(ui, &mut dp, session::MIN_PRESSURE_DROP, 1.0e6) {
                            self.session.set_pressure_drop(dp);
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::LABEL_EFFICIENCY));
                        let mut eff = self.session.efficiency().value();
                        let range = session::MIN_EFFICIENCY..=session::MAX_EFFICIENCY;
                        let slider = egui::Slider::new(&mut eff, range).step_by(1.0);
                        if ui.add(slider).changed() {
                            self.session.set_efficiency(eff);
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::LABEL_NUM_FANS));
                        let mut fans = self.session.num_fans();
                        if drag_field(ui, &mut fans, session::MIN_FANS, 1000) {
                            self.session.set_num_fans(fans);
                        }
                        ui.end_row();
                    });

                ui.separator();
                ui.strong(format!("📏 {}", tr.t(keys::HEADING_PHYSICAL).trim()));
                egui::Grid::new("physical_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        let mut dims = self.session.dimensions();
                        let mut changed = false;
                        for (key, value) in [
                            (keys::LABEL_HEIGHT, &mut dims.height_mm),
                            (keys::LABEL_WIDTH, &mut dims.width_mm),
                            (keys::LABEL_DEPTH, &mut dims.depth_mm),
                        ] {
                            ui.label(tr.t(key));
                            changed |= drag_field(ui, value, session::MIN_DIMENSION_MM, 1.0e5);
                            ui.end_row();
                        }
                        if changed {
                            let (h, w, d) = (dims.height_mm, dims.width_mm, dims.depth_mm);
                            self.session.set_dimensions(h, w, d);
                        }

                        ui.label(tr.t(keys::LABEL_VOLTAGE));
                        let mut volts = self.session.voltage();
                        if ui.add(egui::DragValue::new(&mut volts)).changed() {
                            self.session.set_voltage(volts);
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::LABEL_RPM));
                        let mut rpm = self.session.rpm();
                        if ui.add(egui::DragValue::new(&mut rpm).speed(10.0)).changed() {
                            self.session.set_rpm(rpm);
                        }
                        ui.end_row();
                    });

                ui.separator();
                ui.strong(format!("💨 {}", tr.t(keys::HEADING_AIRFLOW).trim()));
                egui::Grid::new("airflow_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(tr.t(keys::LABEL_AIRFLOW_UNIT));
                        let mut unit = self.session.airflow_unit();
                        egui::ComboBox::from_id_source("airflow_unit")
                            .selected_text(unit.symbol())
                            .show_ui(ui, |ui| {
                                for u in AirflowUnit::ALL {
                                    ui.selectable_value(&mut unit, u, u.symbol());
                                }
                            });
                        if unit != self.session.airflow_unit() {
                            self.session.set_airflow_unit(unit);
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::LABEL_AIRFLOW_VALUE));
                        let mut value = self.session.airflow_value();
                        let widget = egui::DragValue::new(&mut value)
                            .clamp_range(session::MIN_AIRFLOW_VALUE..=1.0e7)
                            .speed(0.1)
                            .fixed_decimals(2);
                        if ui.add(widget).changed() {
                            self.session.set_airflow_value(value);
                        }
                        ui.end_row();
                    });
                let reading = self.session.snapshot().airflow();
                ui.strong(report::conversion_line(&tr, &reading));
            });
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        let input = self.session.snapshot();
        match sizing::size(&input, &self.catalog) {
            Err(err) => {
                ui.colored_label(egui::Color32::RED, report::error_message(tr, &err));
            }
            Ok(result) => {
                ui.heading(format!("🔍 {}", tr.t(keys::RESULTS_HEADING).trim()));
                for line in report::result_lines(tr, &input, &result) {
                    ui.label(line);
                }
                ui.add_space(8.0);
                ui.heading(format!("🔧 {}", tr.t(keys::SUGGESTED_HEADING).trim()));
                if result.has_match() {
                    for fan in &result.suggested {
                        let (title, detail) = report::fan_lines(tr, fan);
                        ui.strong(title);
                        ui.add(egui::Label::new(detail).wrap(true));
                        ui.separator();
                    }
                } else {
                    ui.colored_label(
                        egui::Color32::from_rgb(230, 160, 0),
                        format!("❌ {}", tr.t(keys::NO_MATCH)),
                    );
                }
            }
        }
    }

    fn ui_formulas(&self, ui: &mut egui::Ui) {
        ui.heading(format!("📘 {}", self.tr.t(keys::FORMULA_HEADING).trim()));
        ui.add(egui::Label::new(self.tr.t(keys::FORMULA_BODY)).wrap(true));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let alpha = self.window_alpha;
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("🛫 {}", tr.t(keys::APP_TITLE)));
                ui.separator();
                if ui.button(tr.t(keys::CATALOG_LOAD_BUTTON)).clicked() {
                    let dialog = FileDialog::new().add_filter("TOML", &["toml"]);
                    if let Some(path) = dialog.pick_file() {
                        self.load_catalog_from(&path);
                    }
                }
                let catalog_tip = tr.t(keys::CATALOG_HEADING);
                if ui.button("📋").on_hover_text(catalog_tip.trim()).clicked() {
                    self.show_catalog_modal = true;
                }
                let settings_tip = tr.t(keys::SETTINGS_HEADING);
                if ui.button("⚙").on_hover_text(settings_tip.trim()).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut open = true;
            egui::Window::new(tr.t(keys::SETTINGS_HEADING).trim())
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::SETTINGS_CURRENT_LANGUAGE));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            for (code, label) in LANGUAGE_CHOICES {
                                ui.selectable_value(&mut self.lang_input, code.to_string(), label);
                            }
                        });
                    ui.separator();
                    let slider = egui::Slider::new(&mut self.window_alpha, 0.3..=1.0);
                    ui.add(slider.text("alpha"));
                    ui.separator();
                    if ui.button("💾").clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        let pack_dir = self.config.language_pack_dir.as_deref();
                        self.tr = i18n::Translator::new_with_pack(&resolved, pack_dir);
                        self.lang_save_status = Some(match self.config.save() {
                            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
                            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                        });
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg.as_str());
                    }
                });
            self.show_settings_modal = open;
        }

        if self.show_catalog_modal {
            let mut open = true;
            egui::Window::new(tr.t(keys::CATALOG_HEADING).trim())
                .collapsible(true)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(report::render_catalog(&tr, &self.catalog));
                });
            self.show_catalog_modal = open;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::APP_SUBTITLE));
                    let catalog_heading = tr.t(keys::CATALOG_HEADING);
                    ui.small(format!("{}: {}", catalog_heading.trim(), self.catalog_label));
                    if let Some(msg) = &self.catalog_status {
                        ui.colored_label(egui::Color32::RED, msg.as_str());
                    }
                    ui.add_space(8.0);
                    self.ui_selectors(ui);
                    ui.add_space(8.0);
                    self.ui_inputs(ui);
                    ui.add_space(8.0);
                    self.ui_results(ui);
                    ui.add_space(8.0);
                    self.ui_formulas(ui);
                    ui.separator();
                    ui.small(format!("{} ✈️", tr.t(keys::APP_FOOTER)));
                });
        });
    }
}

/// 범위가 있는 숫자 입력칸. 값이 바뀌면 true.
fn drag_field<Num>(ui: &mut egui::Ui, value: &mut Num, min: Num, max: Num) -> bool
where
    Num: egui::emath::Numeric,
{
    let widget = egui::DragValue::new(value).clamp_range(min..=max);
    ui.add(widget).changed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(config::Config {
            language: "en-us".into(),
            ..config::Config::default()
        })
    }

    #[test]
    fn starts_with_builtin_catalog_and_cabin_defaults() {
        let app = app();
        assert_eq!(app.catalog, FanCatalog::builtin());
        assert_eq!(app.session.region(), Region::Cabin);
        assert_eq!(app.catalog_label, "Built-in catalog");
    }

    #[test]
    fn failed_catalog_load_keeps_previous_catalog() {
        let mut app = app();
        app.load_catalog_from(Path::new("/nonexistent/fans.toml"));
        assert_eq!(app.catalog, FanCatalog::builtin());
        assert!(app.catalog_status.is_some());
        assert!(app.config.catalog_path.is_none());
    }
}
