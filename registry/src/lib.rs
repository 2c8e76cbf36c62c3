//! valmap Registry
//!
//! Shared accumulator for one mapping session, the catalog of constraint
//! kinds it can represent, and the frozen mapping handed to the validation
//! engine once the session ends.

mod catalog;
mod config;
mod mapping;
mod registry;
mod types;

pub use catalog::{AttrSpec, AttrType, ConstraintCatalog, KindDef};
pub use config::{IndexCheck, MappingConfig};
pub use mapping::ConstraintMapping;
pub use registry::ConstraintRegistry;
pub use types::*;
