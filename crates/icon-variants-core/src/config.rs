use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconVariantsError, Result};
use crate::variant::{RuleStore, VariantClassifier, VariantsConfig};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# icon-variants configuration file
# Location: ~/.icon-variants/config.toml

[variants.fallback]
# Group icons of collections without an explicit table by common suffixes
# (-fill, -outline, -line, -bold, ...)
# Default: true
enabled = true

# Extra fallback rules, tried after the builtin ones
# Each rule sets exactly one of `suffix` (literal) or `regex`
# Example: rules = [{ group = "Sharp", regex = "-sharp$" }]
rules = []

# Explicit tables replace the fallback for a collection (first match wins)
# [variants.collections."@acme/icons"]
# rules = [
#   { group = "Color", suffix = "-color" },
#   { group = "Mono", suffix = "-mono" },
# ]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub variants: VariantsConfig,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| IconVariantsError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "variants.fallback.enabled" => Some(self.variants.fallback.enabled.to_string()),
            "variants.fallback.rules" => Some(self.variants.fallback.rules.len().to_string()),
            "variants.collections" => Some(format!(
                "{:?}",
                self.variants.collections.keys().collect::<Vec<_>>()
            )),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "variants.fallback.enabled" => {
                self.variants.fallback.enabled = parse_bool(key, value)?;
                Ok(())
            }
            _ => Err(IconVariantsError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "variants.fallback.enabled",
            "variants.fallback.rules",
            "variants.collections",
        ]
        .iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }

    /// Builtin rule tables with this config applied
    pub fn rule_store(&self) -> Result<RuleStore> {
        RuleStore::builtin().with_config(&self.variants)
    }

    pub fn classifier(&self) -> Result<VariantClassifier> {
        Ok(VariantClassifier::new(self.rule_store()?))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(IconVariantsError::ConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
