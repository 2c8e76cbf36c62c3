//! Cursor scoped to one property of a bean.

use crate::{ConstraintDef, ConstraintKind, GenericConstraintDef, MethodCursor, TypeCursor};
use std::fmt;
use valmap_core::{AccessKind, BeanType, Location, MappingResult, TypeToken};
use valmap_registry::ConstraintRegistry;

/// Declares constraints on a property read through a field or an accessor.
#[derive(Clone)]
pub struct PropertyCursor<'r> {
    registry: &'r ConstraintRegistry,
    bean: BeanType,
    name: String,
    access: AccessKind,
}

impl<'r> PropertyCursor<'r> {
    pub(crate) fn new(
        bean: BeanType,
        name: String,
        access: AccessKind,
        registry: &'r ConstraintRegistry,
    ) -> Self {
        Self {
            registry,
            bean,
            name,
            access,
        }
    }

    pub fn bean_type(&self) -> BeanType {
        self.bean
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn access(&self) -> AccessKind {
        self.access
    }

    pub fn registry(&self) -> &'r ConstraintRegistry {
        self.registry
    }

    pub fn location(&self) -> Location {
        Location::Property {
            bean: self.bean,
            name: self.name.clone(),
            access: self.access,
        }
    }

    /// Start a constraint on this property.
    pub fn constraint<K: ConstraintKind>(&self, _kind: K) -> MappingResult<ConstraintDef<'r, K>> {
        ConstraintDef::new(self.registry, self.location(), K::NAME)
    }

    /// Start a constraint on this property by kind name.
    pub fn generic_constraint(&self, kind: &str) -> MappingResult<GenericConstraintDef<'r>> {
        ConstraintDef::new(self.registry, self.location(), kind)
    }

    /// Mark this property for cascaded validation.
    pub fn valid(&self) -> &Self {
        self.registry.add_cascade(self.location());
        self
    }

    pub fn property(
        &self,
        name: impl Into<String>,
        access: AccessKind,
    ) -> MappingResult<PropertyCursor<'r>> {
        self.owner().property(name, access)
    }

    pub fn method(
        &self,
        name: impl Into<String>,
        parameter_types: impl Into<Vec<TypeToken>>,
    ) -> MappingResult<MethodCursor<'r>> {
        self.owner().method(name, parameter_types)
    }

    pub fn bean(&self, other: BeanType) -> TypeCursor<'r> {
        self.owner().bean(other)
    }

    pub fn type_of<T: 'static>(&self) -> TypeCursor<'r> {
        self.owner().type_of::<T>()
    }

    fn owner(&self) -> TypeCursor<'r> {
        TypeCursor::new(self.bean, self.registry)
    }
}

impl fmt::Debug for PropertyCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyCursor")
            .field("bean", &self.bean)
            .field("name", &self.name)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}
