//! 덕트 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면 계층에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod contact;
pub mod duct;
pub mod i18n;
pub mod preferences;
pub mod quantity;
pub mod ui_cli;
pub mod units;
