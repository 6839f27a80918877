//! Rule Store
//!
//! Runtime store for variant rule tables.
//! Holds the builtin tables merged with config overrides.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{IconVariantsError, Result};

use super::builtin::{EXPLICIT_RULE_SETS, FALLBACK_RULES};
use super::rule::VariantRule;

static BUILTIN_STORE: Lazy<RuleStore> =
    Lazy::new(|| RuleStore::compile_builtin().expect("builtin variant rules must compile"));

/// Runtime store for variant rule tables
#[derive(Debug, Clone)]
pub struct RuleStore {
    explicit: IndexMap<String, Vec<VariantRule>>,
    fallback: Vec<VariantRule>,
}

impl RuleStore {
    /// Store holding only the builtin tables
    pub fn builtin() -> Self {
        BUILTIN_STORE.clone()
    }

    fn compile_builtin() -> Result<Self> {
        let mut explicit = IndexMap::new();
        for set in EXPLICIT_RULE_SETS {
            explicit.insert(set.collection.to_string(), set.compile()?);
        }
        let fallback = FALLBACK_RULES
            .iter()
            .map(|r| r.compile())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { explicit, fallback })
    }

    /// Store with no rules at all
    pub fn empty() -> Self {
        Self {
            explicit: IndexMap::new(),
            fallback: Vec::new(),
        }
    }

    /// Apply config overrides
    ///
    /// - Collections with the same id replace the builtin table
    /// - New collections are added
    /// - Fallback rules are appended, or the fallback table is dropped when disabled
    pub fn with_config(mut self, config: &VariantsConfig) -> Result<Self> {
        for (collection, entry) in &config.collections {
            let rules = entry
                .rules
                .iter()
                .map(RuleEntry::compile)
                .collect::<Result<Vec<_>>>()?;
            self.explicit.insert(collection.clone(), rules);
        }

        if config.fallback.enabled {
            for entry in &config.fallback.rules {
                self.fallback.push(entry.compile()?);
            }
        } else {
            self.fallback.clear();
        }

        Ok(self)
    }

    /// Register an explicit table, replacing any existing one
    pub fn insert_explicit(&mut self, collection: impl Into<String>, rules: Vec<VariantRule>) {
        self.explicit.insert(collection.into(), rules);
    }

    /// Explicit table for a collection
    pub fn explicit(&self, collection: &str) -> Option<&[VariantRule]> {
        self.explicit.get(collection).map(Vec::as_slice)
    }

    /// Shared fallback table (unfiltered)
    pub fn fallback(&self) -> &[VariantRule] {
        &self.fallback
    }

    /// Collections with an explicit table
    pub fn collections(&self) -> Vec<&str> {
        self.explicit.keys().map(String::as_str).collect()
    }

    /// Effective rules for a collection
    ///
    /// The explicit table is used verbatim. Otherwise the fallback table is
    /// narrowed to rules matching at least one of `names`, so no empty
    /// group is ever advertised.
    pub fn resolve(&self, collection: &str, names: &[&str]) -> Vec<&VariantRule> {
        if let Some(rules) = self.explicit.get(collection) {
            return rules.iter().collect();
        }

        self.fallback
            .iter()
            .filter(|rule| names.iter().any(|name| rule.matches(name)))
            .collect()
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `[variants]` section of `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantsConfig {
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub collections: IndexMap<String, CollectionConfigEntry>,
}

/// Fallback table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Use the fallback table for collections without an explicit table
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extra rules appended after the builtin ones
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

fn default_enabled() -> bool {
    true
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            rules: Vec::new(),
        }
    }
}

/// Explicit table for one collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionConfigEntry {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// Rule as written in config; exactly one of `suffix` / `regex`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl RuleEntry {
    pub fn compile(&self) -> Result<VariantRule> {
        match (&self.suffix, &self.regex) {
            (Some(suffix), None) => Ok(VariantRule::suffix(&self.group, suffix)),
            (None, Some(regex)) => VariantRule::regex(&self.group, regex),
            (Some(_), Some(_)) => Err(IconVariantsError::InvalidRule {
                group: self.group.clone(),
                message: "set either `suffix` or `regex`, not both".to_string(),
            }),
            (None, None) => Err(IconVariantsError::InvalidRule {
                group: self.group.clone(),
                message: "missing `suffix` or `regex`".to_string(),
            }),
        }
    }
}
