//! 例のカタログ
//!
//! - `example`: 例とセクション（検索対象）
//! - `loader`: 組み込み / ファイルからの読み込み

mod example;
pub mod loader;

pub use example::{Example, ExampleLanguage, Section};

use crate::env::{EnvVar, CATALOG_FILE};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// セクションに分類された例の一覧
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub sections: Vec<Section>,
}

impl Catalog {
    /// カタログを解決して読み込む
    ///
    /// 優先順位: 明示的なパス > `CATALOG_FILE` > 組み込み
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::get(CATALOG_FILE).map(PathBuf::from));

        match path {
            Some(path) => loader::load_from(&path),
            None => loader::builtin(),
        }
    }

    /// 型名で例を探す（大文字小文字を区別しない、最初に見つかったもの）
    pub fn find_example(&self, name: &str) -> Option<(&Section, &Example)> {
        self.sections.iter().find_map(|section| {
            section
                .examples
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(name))
                .map(|e| (section, e))
        })
    }

    /// 例の総数（複数セクションに載る例はそれぞれ数える）
    pub fn example_count(&self) -> usize {
        self.sections.iter().map(|s| s.examples.len()).sum()
    }
}
