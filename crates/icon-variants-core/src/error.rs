use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconVariantsError {
    #[error("Icon collection not found: {path}")]
    CollectionNotFound { path: PathBuf },

    #[error("Invalid variant rule '{group}': {message}")]
    InvalidRule { group: String, message: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    ConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, IconVariantsError>;

impl IconVariantsError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CollectionNotFound { .. } => 2,
            Self::InvalidRule { .. } => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = IconVariantsError::CollectionNotFound {
            path: PathBuf::from("icons.json"),
        };
        assert_eq!(err.exit_code(), 2);

        let err = IconVariantsError::InvalidRule {
            group: "Bold".to_string(),
            message: "bad regex".to_string(),
        };
        assert_eq!(err.exit_code(), 3);

        let err = IconVariantsError::ConfigKeyNotFound {
            key: "nope".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_display_includes_context() {
        let err = IconVariantsError::InvalidRule {
            group: "Bold".to_string(),
            message: "bad regex".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid variant rule 'Bold': bad regex");
    }
}
