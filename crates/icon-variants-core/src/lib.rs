pub mod collection;
pub mod config;
pub mod error;
pub mod variant;

pub use collection::{CollectionInfo, IconCollection, IconMap};
pub use config::Config;
pub use error::{IconVariantsError, Result};

// Variant system
pub use variant::{
    build_variants, CollectionConfigEntry, FallbackConfig, RuleEntry, RuleStore,
    VariantClassifier, VariantMap, VariantPattern, VariantRule, VariantsConfig, DEFAULT_GROUP,
};
