//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したカタログブラウザを提供する。

mod browser;

pub use browser::run;
