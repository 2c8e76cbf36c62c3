//! Configuration for a mapping session

use serde::{Deserialize, Serialize};
use valmap_core::{MappingError, MappingResult};

/// When method parameter indices are checked against the method's arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexCheck {
    /// Fail at `parameter(index)`.
    #[default]
    Eager,
    /// Accept any index while navigating; `freeze()` rejects bad ones.
    Deferred,
}

/// Configuration for a mapping session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Parameter index policy
    pub index_check: IndexCheck,
    /// Reject attributes a constraint kind does not declare
    pub strict_attributes: bool,
    /// Compile regular expression attributes when a constraint is completed
    pub validate_patterns: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            index_check: IndexCheck::Eager,
            strict_attributes: true,
            validate_patterns: true,
        }
    }
}

impl MappingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_check(mut self, index_check: IndexCheck) -> Self {
        self.index_check = index_check;
        self
    }

    pub fn with_strict_attributes(mut self, strict: bool) -> Self {
        self.strict_attributes = strict;
        self
    }

    pub fn with_pattern_validation(mut self, validate: bool) -> Self {
        self.validate_patterns = validate;
        self
    }

    /// Every check on, every failure at the call site.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Defer index checks to `freeze()`, accept undeclared attributes and
    /// skip compiling regular expression attributes.
    pub fn lenient() -> Self {
        Self {
            index_check: IndexCheck::Deferred,
            strict_attributes: false,
            validate_patterns: false,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(source: &str) -> MappingResult<Self> {
        serde_json::from_str(source).map_err(|e| MappingError::Serialization(e.to_string()))
    }
}
