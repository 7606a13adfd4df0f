//! 例とセクション
//!
//! 例（Example）はタイトル・説明・型名で、セクションは名前で検索される。

use crate::matching::{GroupMatchable, Matchable};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 例の実装言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExampleLanguage {
    Java,
    #[default]
    Kotlin,
}

impl ExampleLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleLanguage::Java => "Java",
            ExampleLanguage::Kotlin => "Kotlin",
        }
    }
}

/// カタログの1つの例
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub title: String,
    pub description: String,
    /// ソース上の型名（例: `DefaultExample`）
    pub name: String,
    pub language: ExampleLanguage,
    #[serde(skip)]
    search_strings: Vec<String>,
}

impl Example {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        name: impl Into<String>,
        language: ExampleLanguage,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        let name = name.into();
        let search_strings = vec![
            title.to_lowercase(),
            description.to_lowercase(),
            name.to_lowercase(),
        ];

        Self {
            title,
            description,
            name,
            language,
            search_strings,
        }
    }
}

impl Matchable for Example {
    fn strings_to_match(&self) -> &[String] {
        &self.search_strings
    }
}

/// 名前付きの例のグループ（例: "Annotations"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub icon: String,
    pub examples: Vec<Example>,
    #[serde(skip)]
    search_strings: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, examples: Vec<Example>) -> Self {
        let name = name.into();
        let search_strings = vec![name.to_lowercase()];

        Self {
            name,
            icon: icon.into(),
            examples,
            search_strings,
        }
    }

    /// 同じ名前・アイコンで例だけを差し替えたセクション（フィルタ結果用）
    pub fn with_examples(&self, examples: Vec<Example>) -> Self {
        Self {
            name: self.name.clone(),
            icon: self.icon.clone(),
            examples,
            search_strings: self.search_strings.clone(),
        }
    }
}

impl Matchable for Section {
    fn strings_to_match(&self) -> &[String] {
        &self.search_strings
    }
}

impl GroupMatchable for Section {
    type Child = Example;

    fn children(&self) -> &[Example] {
        &self.examples
    }
}
