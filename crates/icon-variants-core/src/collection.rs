//! Iconify JSON collections.
//!
//! Only the parts the classifier needs are read: `prefix`, `info.name`
//! and the keys of `icons`. Icon bodies are kept as opaque JSON.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{IconVariantsError, Result};
use crate::variant::{VariantClassifier, VariantMap};

/// Icon name -> opaque icon data, in document order
pub type IconMap = IndexMap<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconCollection {
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<CollectionInfo>,
    /// `None` when the document carries no icon data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconMap>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl IconCollection {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IconVariantsError::CollectionNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Human readable name, falling back to the prefix
    pub fn display_name(&self) -> &str {
        self.info
            .as_ref()
            .map(|i| i.name.as_str())
            .unwrap_or(self.prefix.as_str())
    }

    pub fn icon_names(&self) -> Vec<&str> {
        self.icons
            .as_ref()
            .map(|icons| icons.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Variant groups of this collection.
    ///
    /// `collection_id` selects the rule table; defaults to the prefix.
    pub fn variants(
        &self,
        classifier: &VariantClassifier,
        collection_id: Option<&str>,
    ) -> Option<VariantMap> {
        let id = collection_id.unwrap_or(self.prefix.as_str());
        classifier.classify(id, self.icons.as_ref())
    }
}
