use crate::error::{CatalogError, Result};
use std::path::PathBuf;

/// カタログのホームディレクトリを上書きする環境変数
pub const CATALOG_HOME: &str = "CATALOG_HOME";

/// 読み込むカタログファイルを指定する環境変数
pub const CATALOG_FILE: &str = "CATALOG_FILE";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// ホームディレクトリを解決
///
/// 優先順位: `CATALOG_HOME` > `$HOME/.catalog`
pub fn catalog_home() -> Result<PathBuf> {
    if let Some(dir) = EnvVar::get(CATALOG_HOME) {
        return Ok(PathBuf::from(dir));
    }
    let home = EnvVar::get("HOME").ok_or(CatalogError::HomeNotSet)?;
    Ok(PathBuf::from(home).join(".catalog"))
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
