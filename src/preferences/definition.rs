//! 設定項目の定義
//!
//! 設定項目（Preference）はタイトルと説明で、設定セクションはタイトルで検索される。

use crate::error::{CatalogError, Result};
use crate::matching::{GroupMatchable, Matchable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 設定値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceValue::Bool(b) => write!(f, "{}", b),
            PreferenceValue::Int(i) => write!(f, "{}", i),
            PreferenceValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 設定項目の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceKind {
    /// 選択肢から1つ選ぶ
    Radio { options: Vec<String> },
    /// オン/オフ
    Checkbox,
    /// 押すと動作する（値を持たない）
    Button,
    /// 整数値
    Integer,
}

impl PreferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceKind::Radio { .. } => "radio",
            PreferenceKind::Checkbox => "checkbox",
            PreferenceKind::Button => "button",
            PreferenceKind::Integer => "integer",
        }
    }
}

/// 設定項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub title: String,
    pub key: String,
    pub description: String,
    pub kind: PreferenceKind,
    /// 既定値（ボタンは None）
    pub default: Option<PreferenceValue>,
    search_strings: Vec<String>,
}

impl Preference {
    fn new(
        title: &str,
        key: &str,
        description: &str,
        kind: PreferenceKind,
        default: Option<PreferenceValue>,
    ) -> Self {
        Self {
            title: title.to_string(),
            key: key.to_string(),
            description: description.to_string(),
            kind,
            default,
            search_strings: vec![title.to_lowercase(), description.to_lowercase()],
        }
    }

    pub fn radio(title: &str, key: &str, options: &[&str], default: &str) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::new(
            title,
            key,
            "",
            PreferenceKind::Radio { options },
            Some(PreferenceValue::Text(default.to_string())),
        )
    }

    pub fn checkbox(title: &str, key: &str, default: bool) -> Self {
        Self::new(
            title,
            key,
            "",
            PreferenceKind::Checkbox,
            Some(PreferenceValue::Bool(default)),
        )
    }

    pub fn integer(title: &str, key: &str, description: &str, default: i64) -> Self {
        Self::new(
            title,
            key,
            description,
            PreferenceKind::Integer,
            Some(PreferenceValue::Int(default)),
        )
    }

    pub fn button(title: &str, key: &str, description: &str) -> Self {
        Self::new(title, key, description, PreferenceKind::Button, None)
    }

    /// この項目の値として妥当かどうか
    pub fn accepts(&self, value: &PreferenceValue) -> bool {
        match (&self.kind, value) {
            (PreferenceKind::Checkbox, PreferenceValue::Bool(_)) => true,
            (PreferenceKind::Integer, PreferenceValue::Int(_)) => true,
            (PreferenceKind::Radio { options }, PreferenceValue::Text(s)) => options.contains(s),
            _ => false,
        }
    }

    /// コマンドライン文字列を値に変換
    pub fn parse_value(&self, raw: &str) -> Result<PreferenceValue> {
        let raw = raw.trim();
        match &self.kind {
            PreferenceKind::Checkbox => match raw.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Ok(PreferenceValue::Bool(true)),
                "false" | "off" | "no" | "0" => Ok(PreferenceValue::Bool(false)),
                _ => Err(self.invalid("expected true or false")),
            },
            PreferenceKind::Integer => raw
                .parse::<i64>()
                .map(PreferenceValue::Int)
                .map_err(|_| self.invalid("expected an integer")),
            PreferenceKind::Radio { options } => options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(raw))
                .map(|o| PreferenceValue::Text(o.clone()))
                .ok_or_else(|| self.invalid(&format!("expected one of: {}", options.join(", ")))),
            PreferenceKind::Button => Err(self.invalid("buttons have no value")),
        }
    }

    fn invalid(&self, reason: &str) -> CatalogError {
        CatalogError::InvalidPreferenceValue {
            key: self.key.clone(),
            reason: reason.to_string(),
        }
    }
}

impl Matchable for Preference {
    fn strings_to_match(&self) -> &[String] {
        &self.search_strings
    }
}

/// タイトル付きの設定項目グループ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesSection {
    pub title: String,
    pub preferences: Vec<Preference>,
    search_strings: Vec<String>,
}

impl PreferencesSection {
    pub fn new(title: &str, preferences: Vec<Preference>) -> Self {
        Self {
            title: title.to_string(),
            preferences,
            search_strings: vec![title.to_lowercase()],
        }
    }

    /// 同じタイトルで項目だけを差し替えたセクション（フィルタ結果用）
    pub fn with_preferences(&self, preferences: Vec<Preference>) -> Self {
        Self {
            title: self.title.clone(),
            preferences,
            search_strings: self.search_strings.clone(),
        }
    }
}

impl Matchable for PreferencesSection {
    fn strings_to_match(&self) -> &[String] {
        &self.search_strings
    }
}

impl GroupMatchable for PreferencesSection {
    type Child = Preference;

    fn children(&self) -> &[Preference] {
        &self.preferences
    }
}

#[cfg(test)]
#[path = "definition_test.rs"]
mod tests;
