//! Method signatures.

use crate::{BeanType, MappingError, MappingResult, TypeToken};
use serde::Serialize;
use std::fmt;

/// A method on a bean: declaring type, name and ordered parameter types.
///
/// Two signatures are equal iff all three parts match. This is the key under
/// which return value and parameter declarations of one method are grouped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodSignature {
    bean: BeanType,
    name: String,
    parameter_types: Vec<TypeToken>,
}

impl MethodSignature {
    /// Create a signature, rejecting names that are not identifiers.
    pub fn new(
        bean: BeanType,
        name: impl Into<String>,
        parameter_types: impl Into<Vec<TypeToken>>,
    ) -> MappingResult<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(MappingError::MalformedMethodName { bean, name });
        }
        Ok(Self {
            bean,
            name,
            parameter_types: parameter_types.into(),
        })
    }

    pub fn bean(&self) -> BeanType {
        self.bean
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_types(&self) -> &[TypeToken] {
        &self.parameter_types
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    /// Get the parameter type at a position.
    pub fn parameter_type(&self, index: usize) -> Option<TypeToken> {
        self.parameter_types.get(index).copied()
    }

    /// Fail unless `index` addresses a declared parameter.
    pub fn check_index(&self, index: usize) -> MappingResult<()> {
        if index < self.arity() {
            Ok(())
        } else {
            Err(MappingError::ParameterIndexOutOfRange {
                signature: self.to_string(),
                index,
                arity: self.arity(),
            })
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.bean, self.name)?;
        for (i, ty) in self.parameter_types.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ty)?;
        }
        write!(f, ")")
    }
}

/// ASCII identifier: a letter or underscore, then letters, digits or underscores.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
