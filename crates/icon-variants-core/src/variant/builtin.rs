//! Builtin Variant Rules
//!
//! Rule tables compiled into the binary. Explicit tables cover the
//! collections we ship so their groups stay predictable; the fallback
//! table covers suffixes that commonly mark variants across Iconify sets.

use crate::error::Result;

use super::rule::VariantRule;

/// Group for icons that match no rule
pub const DEFAULT_GROUP: &str = "Default";

/// Static pattern definition
#[derive(Debug, Clone, Copy)]
pub enum BuiltinPattern {
    Suffix(&'static str),
    Regex(&'static str),
}

/// Static rule definition
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    pub group: &'static str,
    pub pattern: BuiltinPattern,
}

/// Static explicit table for one collection
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRuleSet {
    /// Collection identifier (exact match)
    pub collection: &'static str,
    /// Rules in priority order, first match wins
    pub rules: &'static [BuiltinRule],
}

const fn suffix(group: &'static str, suffix: &'static str) -> BuiltinRule {
    BuiltinRule {
        group,
        pattern: BuiltinPattern::Suffix(suffix),
    }
}

const fn regex(group: &'static str, regex: &'static str) -> BuiltinRule {
    BuiltinRule {
        group,
        pattern: BuiltinPattern::Regex(regex),
    }
}

pub const EXPLICIT_RULE_SETS: &[BuiltinRuleSet] = &[
    BuiltinRuleSet {
        collection: "@proj-airi/lobe-icons",
        rules: &[
            suffix("Color", "-color"),
            suffix("Text", "-text"),
            suffix("Brand", "-brand"),
        ],
    },
    BuiltinRuleSet {
        collection: "@proj-airi/iconify-meteocons",
        rules: &[suffix("Fill", "-fill"), suffix("Line", "-line")],
    },
];

pub const FALLBACK_RULES: &[BuiltinRule] = &[
    regex("Filled", "-fill(ed)?$"),
    regex("Outline", "-outline$"),
    regex("Line", "-line$"),
    regex("Duotone", "-duotone$"),
    regex("Bold", "-bold$"),
    regex("Light", "-light$"),
    regex("Thin", "-thin$"),
    regex("Regular", "-regular$"),
    regex("Solid", "-solid$"),
    regex("Round", "-round(ed)?$"),
    regex("Color", "-color$"),
    regex("Text", "-text$"),
];

impl BuiltinRule {
    pub fn compile(&self) -> Result<VariantRule> {
        match self.pattern {
            BuiltinPattern::Suffix(s) => Ok(VariantRule::suffix(self.group, s)),
            BuiltinPattern::Regex(re) => VariantRule::regex(self.group, re),
        }
    }
}

impl BuiltinRuleSet {
    pub fn compile(&self) -> Result<Vec<VariantRule>> {
        self.rules.iter().map(BuiltinRule::compile).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_compile() {
        for set in EXPLICIT_RULE_SETS {
            assert!(set.compile().is_ok(), "{} failed", set.collection);
        }
        for rule in FALLBACK_RULES {
            assert!(rule.compile().is_ok(), "{} failed", rule.group);
        }
    }

    #[test]
    fn test_explicit_collections_exist() {
        assert!(EXPLICIT_RULE_SETS
            .iter()
            .any(|s| s.collection == "@proj-airi/lobe-icons"));
        assert!(EXPLICIT_RULE_SETS
            .iter()
            .any(|s| s.collection == "@proj-airi/iconify-meteocons"));
    }

    #[test]
    fn test_fallback_order() {
        let groups: Vec<_> = FALLBACK_RULES.iter().map(|r| r.group).collect();
        assert_eq!(groups.first(), Some(&"Filled"));
        assert_eq!(groups.last(), Some(&"Text"));
        assert_eq!(groups.len(), 12);
    }
}
