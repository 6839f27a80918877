//! Variant Rule
//!
//! A rule pairs a group name with a pattern tested against icon names.

use std::fmt;

use regex::Regex;

use crate::error::{IconVariantsError, Result};

/// Pattern a rule tests icon names against
#[derive(Debug, Clone)]
pub enum VariantPattern {
    /// Matches names ending with the literal suffix
    Suffix(String),
    /// Matches names containing a match of the expression
    Regex(Regex),
}

impl VariantPattern {
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::Suffix(suffix.into())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Suffix(suffix) => name.ends_with(suffix.as_str()),
            Self::Regex(re) => re.is_match(name),
        }
    }

    /// Pattern kind as written in config files
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Suffix(_) => "suffix",
            Self::Regex(_) => "regex",
        }
    }

    /// Source text of the pattern
    pub fn as_str(&self) -> &str {
        match self {
            Self::Suffix(suffix) => suffix,
            Self::Regex(re) => re.as_str(),
        }
    }
}

impl fmt::Display for VariantPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suffix(suffix) => write!(f, "*{}", suffix),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// A single `(group, pattern)` rule
#[derive(Debug, Clone)]
pub struct VariantRule {
    pub group: String,
    pub pattern: VariantPattern,
}

impl VariantRule {
    pub fn new(group: impl Into<String>, pattern: VariantPattern) -> Self {
        Self {
            group: group.into(),
            pattern,
        }
    }

    pub fn suffix(group: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(group, VariantPattern::suffix(suffix))
    }

    /// Compile a regex rule, reporting the owning group on failure.
    pub fn regex(group: impl Into<String>, pattern: &str) -> Result<Self> {
        let group = group.into();
        match Regex::new(pattern) {
            Ok(re) => Ok(Self::new(group, VariantPattern::Regex(re))),
            Err(e) => Err(IconVariantsError::InvalidRule {
                group,
                message: e.to_string(),
            }),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.matches(name)
    }
}

impl fmt::Display for VariantRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.group, self.pattern)
    }
}
