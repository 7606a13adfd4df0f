//! ビューア設定
//!
//! - `definition`: 設定項目とセクション（検索対象）
//! - `builtin`: 組み込みのセクションとキー
//! - `store`: settings.toml への永続化

mod builtin;
mod definition;
mod store;

pub use builtin::builtin_sections;
pub use definition::{Preference, PreferenceKind, PreferenceValue, PreferencesSection};
pub use store::{ButtonOutcome, PreferenceStore};

#[cfg(test)]
pub use builtin::keys;
#[cfg(test)]
pub use store::SETTINGS_FILE;
