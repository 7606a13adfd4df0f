//! カタログ定義の読み込み
//!
//! 組み込みカタログ（TOML）またはユーザー指定のファイル（TOML / YAML）から
//! `Catalog` を構築する。

use super::example::{Example, ExampleLanguage, Section};
use super::Catalog;
use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// カタログファイルのルート構造
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
struct SectionEntry {
    name: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    examples: Vec<ExampleEntry>,
}

#[derive(Debug, Deserialize)]
struct ExampleEntry {
    name: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    language: ExampleLanguage,
}

/// ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Yaml,
}

impl CatalogFormat {
    /// 拡張子から形式を判定
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 組み込みカタログ
pub fn builtin() -> Result<Catalog> {
    parse(BUILTIN_CATALOG, CatalogFormat::Toml)
}

/// ファイルから読み込む
pub fn load_from(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let catalog = parse(&content, format)?;

    tracing::debug!(
        path = %path.display(),
        sections = catalog.sections.len(),
        examples = catalog.example_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// 文字列をパースして検証する
pub fn parse(content: &str, format: CatalogFormat) -> Result<Catalog> {
    let file: CatalogFile = match format {
        CatalogFormat::Toml => toml::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
    };

    validate(&file)?;

    let sections = file
        .sections
        .into_iter()
        .map(|section| {
            let examples = section
                .examples
                .into_iter()
                .map(|e| Example::new(e.title, e.description, e.name, e.language))
                .collect();
            Section::new(section.name, section.icon, examples)
        })
        .collect();

    Ok(Catalog { sections })
}

/// セクション名の一意性と、セクション内の例の名前の一意性を検証
///
/// 同じ例が複数のセクションに載ることは許可する。
fn validate(file: &CatalogFile) -> Result<()> {
    let mut section_names = HashSet::new();

    for section in &file.sections {
        if section.name.trim().is_empty() {
            return Err(CatalogError::InvalidCatalog(
                "section name cannot be empty".to_string(),
            ));
        }
        if !section_names.insert(section.name.as_str()) {
            return Err(CatalogError::InvalidCatalog(format!(
                "duplicate section '{}'",
                section.name
            )));
        }

        let mut example_names = HashSet::new();
        for example in &section.examples {
            if example.name.trim().is_empty() || example.title.trim().is_empty() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "example in section '{}' needs a name and a title",
                    section.name
                )));
            }
            if !example_names.insert(example.name.as_str()) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate example '{}' in section '{}'",
                    example.name, section.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
