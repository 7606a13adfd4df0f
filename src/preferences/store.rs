//! 設定値の永続化（settings.toml）
//!
//! 既定値から変更された値だけをファイルに保存する。

use super::builtin::{builtin_sections, keys};
use super::definition::{Preference, PreferenceKind, PreferenceValue, PreferencesSection};
use crate::env::catalog_home;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 設定ファイル名
pub const SETTINGS_FILE: &str = "settings.toml";

/// settings.toml のルート構造（書き込み用）
#[derive(Debug, Default, Serialize)]
struct SettingsFile {
    values: BTreeMap<String, PreferenceValue>,
}

/// settings.toml のルート構造（読み込み用、値の型は項目ごとに検証する）
#[derive(Debug, Default, Deserialize)]
struct StoredSettings {
    #[serde(default)]
    values: BTreeMap<String, toml::Value>,
}

/// TOML の値を設定値に変換（対応しない型は None）
fn from_toml_value(value: &toml::Value) -> Option<PreferenceValue> {
    match value {
        toml::Value::Boolean(b) => Some(PreferenceValue::Bool(*b)),
        toml::Value::Integer(i) => Some(PreferenceValue::Int(*i)),
        toml::Value::String(s) => Some(PreferenceValue::Text(s.clone())),
        _ => None,
    }
}

/// ボタンを押した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonOutcome {
    /// キャッシュを消去した（ドキュメントエンジン外にキャッシュは無い）
    CacheCleared,
    /// 保存済み設定を削除し既定値に戻した
    AppDataCleared,
}

/// 設定ストア
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    sections: Vec<PreferencesSection>,
    overrides: BTreeMap<String, PreferenceValue>,
}

impl PreferenceStore {
    /// 既定パス（~/.catalog/settings.toml）から読み込む
    pub fn load() -> Result<Self> {
        let path = catalog_home()?.join(SETTINGS_FILE);
        Self::load_from(path)
    }

    pub fn load_from(path: PathBuf) -> Result<Self> {
        Self::load_with_sections(path, builtin_sections())
    }

    /// 任意のセクション定義で読み込む
    ///
    /// 未知のキーや型の合わない値は警告を出して読み飛ばす。
    pub fn load_with_sections(path: PathBuf, sections: Vec<PreferencesSection>) -> Result<Self> {
        let mut store = Self {
            path,
            sections,
            overrides: BTreeMap::new(),
        };

        if !store.path.exists() {
            return Ok(store);
        }

        let content = std::fs::read_to_string(&store.path)?;
        let file: StoredSettings = toml::from_str(&content)?;

        for (key, raw) in file.values {
            let Some(pref) = store.find(&key) else {
                tracing::warn!(%key, "ignoring unknown stored preference");
                continue;
            };
            match from_toml_value(&raw).filter(|value| pref.accepts(value)) {
                Some(value) => {
                    store.overrides.insert(key, value);
                }
                None => tracing::warn!(%key, value = %raw, "ignoring stored value of wrong type"),
            }
        }

        tracing::debug!(
            path = %store.path.display(),
            overrides = store.overrides.len(),
            "preferences loaded"
        );
        Ok(store)
    }

    pub fn save(&self) -> Result<()> {
        let file = SettingsFile {
            values: self.overrides.clone(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&file)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 設定セクション定義
    pub fn sections(&self) -> &[PreferencesSection] {
        &self.sections
    }

    /// キーで設定項目を探す
    pub fn find(&self, key: &str) -> Option<&Preference> {
        self.sections
            .iter()
            .flat_map(|s| s.preferences.iter())
            .find(|p| p.key == key)
    }

    fn require(&self, key: &str) -> Result<&Preference> {
        self.find(key)
            .ok_or_else(|| CatalogError::UnknownPreference(key.to_string()))
    }

    /// 現在値（変更がなければ既定値、ボタンは None）
    pub fn value(&self, key: &str) -> Option<PreferenceValue> {
        self.overrides
            .get(key)
            .cloned()
            .or_else(|| self.find(key).and_then(|p| p.default.clone()))
    }

    /// 現在値を取得（未知のキーやボタンはエラー）
    pub fn get(&self, key: &str) -> Result<PreferenceValue> {
        let pref = self.require(key)?;
        self.value(key).ok_or_else(|| CatalogError::InvalidPreferenceValue {
            key: pref.key.clone(),
            reason: "buttons have no value".to_string(),
        })
    }

    /// 既定値から変更されているか
    pub fn is_modified(&self, key: &str) -> bool {
        self.overrides.contains_key(key)
    }

    /// 値を設定（既定値と同じなら変更を取り消す）
    pub fn set(&mut self, key: &str, value: PreferenceValue) -> Result<()> {
        let pref = self.require(key)?;
        if !pref.accepts(&value) {
            return Err(CatalogError::InvalidPreferenceValue {
                key: key.to_string(),
                reason: format!("'{}' is not a valid {} value", value, pref.kind.label()),
            });
        }

        if pref.default.as_ref() == Some(&value) {
            self.overrides.remove(key);
        } else {
            self.overrides.insert(key.to_string(), value);
        }
        Ok(())
    }

    /// 文字列から値を設定
    pub fn set_from_str(&mut self, key: &str, raw: &str) -> Result<PreferenceValue> {
        let value = self.require(key)?.parse_value(raw)?;
        self.set(key, value.clone())?;
        Ok(value)
    }

    /// 1項目を既定値に戻す
    pub fn reset(&mut self, key: &str) -> Result<()> {
        self.require(key)?;
        self.overrides.remove(key);
        Ok(())
    }

    /// すべて既定値に戻す
    pub fn reset_all(&mut self) {
        self.overrides.clear();
    }

    /// ボタンを押す
    pub fn press(&mut self, key: &str) -> Result<ButtonOutcome> {
        let pref = self.require(key)?;
        if pref.kind != PreferenceKind::Button {
            return Err(CatalogError::InvalidPreferenceValue {
                key: key.to_string(),
                reason: format!("'{}' is not a button", key),
            });
        }

        match key {
            keys::CLEAR_APP_DATA => {
                self.overrides.clear();
                if self.path.exists() {
                    std::fs::remove_file(&self.path)?;
                }
                tracing::info!(path = %self.path.display(), "app data cleared");
                Ok(ButtonOutcome::AppDataCleared)
            }
            _ => {
                tracing::info!("cache cleared");
                Ok(ButtonOutcome::CacheCleared)
            }
        }
    }

    /// すべての設定項目と現在値（セクション順）
    pub fn entries(&self) -> Vec<(&PreferencesSection, &Preference, Option<PreferenceValue>)> {
        self.sections
            .iter()
            .flat_map(|section| {
                section
                    .preferences
                    .iter()
                    .map(move |pref| (section, pref, self.value(&pref.key)))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
