//! # Variant Module
//!
//! Groups the icons of an icon collection into stylistic variants
//! (filled, outline, color, ...) inferred from their names, for icon pickers.
//!
//! ## Rule resolution
//!
//! - **Explicit tables**: per-collection rules, used verbatim.
//! - **Fallback table**: generic suffix rules, narrowed to the rules that
//!   match at least one icon of the collection.
//!
//! Each icon lands in the group of the first matching rule, or in
//! [`DEFAULT_GROUP`]. A result holding only the default group carries no
//! information and is reported as `None`.
//!
//! ## Module layout
//!
//! - `builtin`: builtin rule tables
//! - `rule`: rules and patterns
//! - `store`: runtime store of rule tables
//! - `classifier`: the classifier
//!
//! ## Example
//!
//! ```rust
//! use icon_variants_core::variant::VariantClassifier;
//!
//! let classifier = VariantClassifier::builtin();
//! let variants = classifier
//!     .classify_names("@proj-airi/lobe-icons", ["openai", "gemini-color"])
//!     .unwrap();
//!
//! assert_eq!(variants["Color"], vec!["gemini-color"]);
//! assert_eq!(variants["Default"], vec!["openai"]);
//! ```

mod builtin;
mod classifier;
mod rule;
mod store;

// Re-exports
pub use builtin::{
    BuiltinPattern, BuiltinRule, BuiltinRuleSet, DEFAULT_GROUP, EXPLICIT_RULE_SETS,
    FALLBACK_RULES,
};
pub use classifier::{build_variants, VariantClassifier, VariantMap};
pub use rule::{VariantPattern, VariantRule};
pub use store::{CollectionConfigEntry, FallbackConfig, RuleEntry, RuleStore, VariantsConfig};
