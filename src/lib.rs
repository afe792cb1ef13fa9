//! 항공기 구역 환기 팬 사이징 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 함께 쓴다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod presets;
pub mod report;
pub mod session;
pub mod sizing;
pub mod ui_cli;
pub mod units;
