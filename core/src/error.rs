//! Error types for constraint mapping.

use crate::BeanType;
use thiserror::Error;

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors raised while declaring a constraint mapping.
///
/// Every error surfaces at the call that caused it; nothing is retried.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Empty property name on bean {bean}")]
    EmptyPropertyName { bean: BeanType },

    #[error("Malformed method name {name:?} on bean {bean}")]
    MalformedMethodName { bean: BeanType, name: String },

    #[error("Parameter index {index} out of range for {signature} (arity {arity})")]
    ParameterIndexOutOfRange {
        signature: String,
        index: usize,
        arity: usize,
    },

    #[error("Unsupported constraint kind: {kind:?}")]
    UnsupportedConstraintKind { kind: String },

    #[error("Unknown attribute {attribute} for constraint {kind}")]
    UnknownAttribute { kind: String, attribute: String },

    #[error("Missing required attribute {attribute} for constraint {kind}")]
    MissingAttribute { kind: String, attribute: String },

    #[error("Invalid attribute type for {kind}.{attribute}: expected {expected}, got {actual}")]
    InvalidAttribute {
        kind: String,
        attribute: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid default group sequence for {bean}: {reason}")]
    InvalidGroupSequence { bean: BeanType, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}
