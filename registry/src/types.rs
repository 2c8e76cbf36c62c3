//! Declaration types.

use serde::Serialize;
use valmap_core::{Attributes, Location, TypeToken, Value};

/// A constraint with its attribute values, as produced by a per-constraint builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintDescriptor {
    /// Constraint kind name (e.g. "Min", "Pattern").
    pub kind: String,
    /// Attribute values by name.
    pub attributes: Attributes,
    /// Message template overriding the kind's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Groups this constraint belongs to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<TypeToken>,
    /// Payload types attached to this constraint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<TypeToken>,
}

impl ConstraintDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Attributes::new(),
            message: None,
            groups: Vec::new(),
            payload: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_groups(mut self, groups: Vec<TypeToken>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_payload(mut self, payload: Vec<TypeToken>) -> Self {
        self.payload = payload;
        self
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// A constraint declared at a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintDeclaration {
    pub location: Location,
    pub descriptor: ConstraintDescriptor,
}

/// Marks a location's value for recursive validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeDeclaration {
    pub location: Location,
}

/// One entry of the registry, kept in submission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "declaration", rename_all = "snake_case")]
pub enum Declaration {
    Constraint(ConstraintDeclaration),
    Cascade(CascadeDeclaration),
}

impl Declaration {
    /// The location this declaration applies to.
    pub fn location(&self) -> &Location {
        match self {
            Declaration::Constraint(c) => &c.location,
            Declaration::Cascade(c) => &c.location,
        }
    }

    pub fn as_constraint(&self) -> Option<&ConstraintDeclaration> {
        match self {
            Declaration::Constraint(c) => Some(c),
            Declaration::Cascade(_) => None,
        }
    }

    pub fn as_cascade(&self) -> Option<&CascadeDeclaration> {
        match self {
            Declaration::Cascade(c) => Some(c),
            Declaration::Constraint(_) => None,
        }
    }

    pub fn is_cascade(&self) -> bool {
        matches!(self, Declaration::Cascade(_))
    }
}
