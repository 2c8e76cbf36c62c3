//! Locations inside a bean's validation target graph.
//!
//! A location is where a constraint or cascade applies: the bean itself,
//! one of its properties, or a method's return value or parameter.

use crate::{BeanType, MethodSignature};
use serde::Serialize;
use std::fmt;

/// How a property value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    /// Direct field access.
    Field,
    /// Access through the property's getter.
    Accessor,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Field => write!(f, "field"),
            AccessKind::Accessor => write!(f, "accessor"),
        }
    }
}

/// The part of a method a method cursor currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MethodTarget {
    #[default]
    ReturnValue,
    Parameter(usize),
}

impl MethodTarget {
    /// Get the parameter index if this targets a parameter.
    pub fn parameter_index(&self) -> Option<usize> {
        match self {
            MethodTarget::ReturnValue => None,
            MethodTarget::Parameter(index) => Some(*index),
        }
    }
}

/// A position within a bean's structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// The bean type as a whole (class-level constraints).
    Type { bean: BeanType },
    /// A named property read through a field or an accessor.
    Property {
        bean: BeanType,
        name: String,
        access: AccessKind,
    },
    /// A method's return value.
    MethodReturn { signature: MethodSignature },
    /// A method parameter by position.
    MethodParameter {
        signature: MethodSignature,
        index: usize,
    },
}

impl Location {
    /// Build the location for a method sub-location.
    pub fn for_method(signature: MethodSignature, target: MethodTarget) -> Self {
        match target {
            MethodTarget::ReturnValue => Location::MethodReturn { signature },
            MethodTarget::Parameter(index) => Location::MethodParameter { signature, index },
        }
    }

    /// The bean this location belongs to.
    pub fn bean(&self) -> BeanType {
        match self {
            Location::Type { bean } | Location::Property { bean, .. } => *bean,
            Location::MethodReturn { signature } | Location::MethodParameter { signature, .. } => {
                signature.bean()
            }
        }
    }

    /// Get the method signature for method locations.
    pub fn signature(&self) -> Option<&MethodSignature> {
        match self {
            Location::MethodReturn { signature } | Location::MethodParameter { signature, .. } => {
                Some(signature)
            }
            _ => None,
        }
    }

    /// Get the method sub-location for method locations.
    pub fn method_target(&self) -> Option<MethodTarget> {
        match self {
            Location::MethodReturn { .. } => Some(MethodTarget::ReturnValue),
            Location::MethodParameter { index, .. } => Some(MethodTarget::Parameter(*index)),
            _ => None,
        }
    }

    /// Returns true if this is a method return value or parameter.
    pub fn is_method(&self) -> bool {
        self.signature().is_some()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Type { bean } => write!(f, "{}", bean),
            Location::Property { bean, name, access } => {
                write!(f, "{}#{} ({})", bean, name, access)
            }
            Location::MethodReturn { signature } => write!(f, "{} return value", signature),
            Location::MethodParameter { signature, index } => {
                write!(f, "{} parameter {}", signature, index)
            }
        }
    }
}
