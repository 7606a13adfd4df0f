use thiserror::Error;

/// カタログ統一エラー型
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {0}. Expected .toml, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Example not found: {0}")]
    ExampleNotFound(String),

    #[error("Unknown preference: {0}")]
    UnknownPreference(String),

    #[error("Invalid value for preference '{key}': {reason}")]
    InvalidPreferenceValue { key: String, reason: String },

    #[error("HOME environment variable not set")]
    HomeNotSet,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// ユーザー入力の誤りかどうか（終了コードの決定に使う）
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CatalogError::ExampleNotFound(_)
                | CatalogError::UnknownPreference(_)
                | CatalogError::InvalidPreferenceValue { .. }
                | CatalogError::UnsupportedFormat(_)
        )
    }
}
