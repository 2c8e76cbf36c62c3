//! valmap Core Types
//!
//! This crate provides the foundational types shared by the mapping layers:
//! - Type tokens (TypeToken, BeanType)
//! - Method signatures (MethodSignature)
//! - Locations inside a bean (Location, AccessKind, MethodTarget)
//! - Attribute values (the Value enum and the attrs! macro)
//! - The mapping error taxonomy

mod error;
mod location;
mod signature;
mod token;
mod value;

pub use error::*;
pub use location::*;
pub use signature::*;
pub use token::*;
pub use value::*;
