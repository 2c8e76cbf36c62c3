//! The constraint-kind catalog.
//!
//! The catalog lists every constraint kind a registry can represent together
//! with the attributes each kind accepts. Descriptors are checked against it
//! before they are appended.

use crate::{ConstraintDescriptor, MappingConfig};
use std::collections::HashMap;
use valmap_core::{MappingError, MappingResult, Value};

/// Value type accepted by a constraint attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Bool,
    Int,
    /// Int or Float.
    Number,
    String,
    /// A string holding a decimal number, e.g. "10.50".
    Decimal,
    /// A string holding a regular expression.
    Regex,
    /// A list of type tokens.
    Types,
}

impl AttrType {
    /// Check whether a value has this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            AttrType::Bool => value.as_bool().is_some(),
            AttrType::Int => value.as_int().is_some(),
            AttrType::Number => value.as_int().is_some() || value.as_float().is_some(),
            AttrType::String | AttrType::Regex => value.as_str().is_some(),
            AttrType::Decimal => value
                .as_str()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .map(f64::is_finite)
                .unwrap_or(false),
            AttrType::Types => value
                .as_list()
                .map(|items| items.iter().all(|v| v.as_type().is_some()))
                .unwrap_or(false),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttrType::Bool => "Bool",
            AttrType::Int => "Int",
            AttrType::Number => "Number",
            AttrType::String => "String",
            AttrType::Decimal => "Decimal",
            AttrType::Regex => "Regex",
            AttrType::Types => "Types",
        }
    }
}

/// Attribute declared by a constraint kind.
#[derive(Debug, Clone)]
pub struct AttrSpec {
    pub name: String,
    pub value_type: AttrType,
    pub required: bool,
}

/// A constraint kind and its attributes.
#[derive(Debug, Clone)]
pub struct KindDef {
    /// Kind name, matched exactly.
    pub name: String,
    /// Declared attributes.
    pub attributes: Vec<AttrSpec>,
}

impl KindDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Declare an optional attribute.
    pub fn attr(mut self, name: impl Into<String>, value_type: AttrType) -> Self {
        self.attributes.push(AttrSpec {
            name: name.into(),
            value_type,
            required: false,
        });
        self
    }

    /// Declare a required attribute.
    pub fn required(mut self, name: impl Into<String>, value_type: AttrType) -> Self {
        self.attributes.push(AttrSpec {
            name: name.into(),
            value_type,
            required: true,
        });
        self
    }

    /// Get an attribute spec by name.
    pub fn get_attr(&self, name: &str) -> Option<&AttrSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Set of constraint kinds known to a registry.
#[derive(Debug, Clone, Default)]
pub struct ConstraintCatalog {
    kinds: HashMap<String, KindDef>,
}

impl ConstraintCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in constraint kinds.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for name in [
            "AssertFalse",
            "AssertTrue",
            "Future",
            "NotBlank",
            "NotEmpty",
            "NotNull",
            "Null",
            "Past",
        ] {
            catalog.register(KindDef::new(name));
        }
        catalog.register(KindDef::new("Email").attr("regexp", AttrType::Regex));
        for name in ["DecimalMax", "DecimalMin"] {
            catalog.register(
                KindDef::new(name)
                    .required("value", AttrType::Decimal)
                    .attr("inclusive", AttrType::Bool),
            );
        }
        catalog.register(
            KindDef::new("Digits")
                .required("integer", AttrType::Int)
                .required("fraction", AttrType::Int),
        );
        for name in ["Length", "Range", "Size"] {
            catalog.register(
                KindDef::new(name)
                    .attr("min", AttrType::Int)
                    .attr("max", AttrType::Int),
            );
        }
        for name in ["Max", "Min"] {
            catalog.register(KindDef::new(name).required("value", AttrType::Int));
        }
        catalog.register(KindDef::new("Pattern").required("regexp", AttrType::Regex));
        catalog
    }

    /// Register a kind, replacing any kind with the same name.
    pub fn register(&mut self, kind: KindDef) {
        self.kinds.insert(kind.name.clone(), kind);
    }

    /// Get a kind by name.
    pub fn get(&self, name: &str) -> Option<&KindDef> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// All kind names, sorted.
    pub fn kind_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get a kind by name, failing if the catalog cannot represent it.
    pub fn resolve(&self, name: &str) -> MappingResult<&KindDef> {
        self.kinds
            .get(name)
            .ok_or_else(|| MappingError::UnsupportedConstraintKind {
                kind: name.to_string(),
            })
    }

    /// Check a completed descriptor against its kind.
    pub fn check(
        &self,
        descriptor: &ConstraintDescriptor,
        config: &MappingConfig,
    ) -> MappingResult<()> {
        let kind = self.resolve(&descriptor.kind)?;

        for (name, value) in &descriptor.attributes {
            let Some(spec) = kind.get_attr(name) else {
                if config.strict_attributes {
                    return Err(MappingError::UnknownAttribute {
                        kind: kind.name.clone(),
                        attribute: name.clone(),
                    });
                }
                continue;
            };

            if !spec.value_type.accepts(value) {
                return Err(MappingError::InvalidAttribute {
                    kind: kind.name.clone(),
                    attribute: name.clone(),
                    expected: spec.value_type.name().to_string(),
                    actual: value.type_name().to_string(),
                });
            }

            if spec.value_type == AttrType::Regex && config.validate_patterns {
                if let Some(pattern) = value.as_str() {
                    regex_lite::Regex::new(pattern).map_err(|e| MappingError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })?;
                }
            }
        }

        if let Some(missing) = kind
            .attributes
            .iter()
            .find(|spec| spec.required && !descriptor.attributes.contains_key(&spec.name))
        {
            return Err(MappingError::MissingAttribute {
                kind: kind.name.clone(),
                attribute: missing.name.clone(),
            });
        }

        Ok(())
    }
}
