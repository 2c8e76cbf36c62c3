//! valmap Fluent
//!
//! Cursors for declaring constraints on bean types, their properties and
//! their methods. A session starts from a [`ConstraintRegistry`]:
//!
//! ```
//! use valmap_fluent::prelude::*;
//!
//! struct Person;
//!
//! # fn main() -> MappingResult<()> {
//! let registry = ConstraintRegistry::new();
//! let person = registry.type_of::<Person>();
//! person.property("name", AccessKind::Field)?.constraint(NotNull)?.done()?;
//! person
//!     .method("setAge", tokens![i32])?
//!     .parameter(0)?
//!     .constraint(Min)?
//!     .value(0)
//!     .done()?;
//!
//! let mapping = registry.freeze()?;
//! assert_eq!(mapping.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Navigation returns new cursors; only `done()`, `valid()` and
//! `default_group_sequence()` write to the registry.

mod def;
mod kinds;
mod method;
mod property;
mod type_cursor;

pub use def::{ConstraintDef, ConstraintKind, Generic, GenericConstraintDef};
pub use kinds::*;
pub use method::MethodCursor;
pub use property::PropertyCursor;
pub use type_cursor::TypeCursor;

use valmap_core::BeanType;
use valmap_registry::ConstraintRegistry;

/// Root cursors for a registry.
pub trait FluentRegistry {
    /// Start declaring constraints on `bean`.
    fn bean(&self, bean: BeanType) -> TypeCursor<'_>;

    /// Start declaring constraints on bean type `T`.
    fn type_of<T: 'static>(&self) -> TypeCursor<'_> {
        self.bean(BeanType::of::<T>())
    }
}

impl FluentRegistry for ConstraintRegistry {
    fn bean(&self, bean: BeanType) -> TypeCursor<'_> {
        TypeCursor::new(bean, self)
    }
}

pub mod prelude {
    pub use crate::kinds::*;
    pub use crate::{
        ConstraintDef, ConstraintKind, FluentRegistry, GenericConstraintDef, MethodCursor,
        PropertyCursor, TypeCursor,
    };
    pub use valmap_core::{
        tokens, AccessKind, BeanType, Location, MappingError, MappingResult, MethodSignature,
        MethodTarget, TypeToken, Value,
    };
    pub use valmap_registry::{
        AttrType, ConstraintMapping, ConstraintRegistry, Declaration, IndexCheck, KindDef,
        MappingConfig,
    };
}
