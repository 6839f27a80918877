//! Variant Classifier
//!
//! Groups the icon names of a collection by the RuleStore tables.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;

use super::builtin::DEFAULT_GROUP;
use super::store::RuleStore;

/// Group name -> icon names, both in first-seen order
pub type VariantMap = IndexMap<String, Vec<String>>;

static BUILTIN_CLASSIFIER: Lazy<VariantClassifier> =
    Lazy::new(|| VariantClassifier::new(RuleStore::builtin()));

/// Classify icons against the builtin rule tables.
///
/// Icon metadata is never inspected; only the keys of `icons` matter.
pub fn build_variants<V>(
    collection_id: &str,
    icons: Option<&IndexMap<String, V>>,
) -> Option<VariantMap> {
    BUILTIN_CLASSIFIER.classify(collection_id, icons)
}

/// Variant classifier
#[derive(Debug, Clone, Default)]
pub struct VariantClassifier {
    store: RuleStore,
}

impl VariantClassifier {
    pub fn new(store: RuleStore) -> Self {
        Self { store }
    }

    /// Classifier over the builtin tables only
    pub fn builtin() -> Self {
        Self::new(RuleStore::builtin())
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Group the icons of a collection.
    ///
    /// Returns `None` when `icons` is absent, when no rule applies, or when
    /// every icon would land in the default group. A present but empty map
    /// also yields `None`, even for a collection with an explicit table,
    /// since a result with no groups carries no variants.
    pub fn classify<V>(
        &self,
        collection_id: &str,
        icons: Option<&IndexMap<String, V>>,
    ) -> Option<VariantMap> {
        let icons = icons?;
        self.classify_names(collection_id, icons.keys().map(String::as_str))
    }

    /// Group bare icon names.
    ///
    /// Repeated names are kept once, at their first position.
    pub fn classify_names<'a, I>(&self, collection_id: &str, names: I) -> Option<VariantMap>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = names
            .into_iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        let rules = self.store.resolve(collection_id, &names);

        if rules.is_empty() {
            log::debug!("{}: no variant rules apply", collection_id);
            return None;
        }
        log::debug!(
            "{}: {} rule(s) over {} icon(s)",
            collection_id,
            rules.len(),
            names.len()
        );

        let mut variants = VariantMap::new();
        for name in names {
            let group = rules
                .iter()
                .find(|rule| rule.matches(name))
                .map_or(DEFAULT_GROUP, |rule| rule.group.as_str());
            variants
                .entry(group.to_string())
                .or_default()
                .push(name.to_string());
        }

        let only_default = variants.len() == 1 && variants.contains_key(DEFAULT_GROUP);
        if variants.is_empty() || only_default {
            log::debug!("{}: no variant besides the default group", collection_id);
            return None;
        }

        Some(variants)
    }
}
