//! Cursor scoped to one bean type.

use crate::{ConstraintDef, ConstraintKind, GenericConstraintDef, MethodCursor, PropertyCursor};
use std::fmt;
use tracing::trace;
use valmap_core::{
    AccessKind, BeanType, Location, MappingError, MappingResult, MethodSignature, TypeToken,
};
use valmap_registry::ConstraintRegistry;

/// Entry point for declaring constraints on one bean type.
///
/// Navigation never mutates a cursor; each call returns a new one sharing
/// the same registry.
#[derive(Clone, Copy)]
pub struct TypeCursor<'r> {
    registry: &'r ConstraintRegistry,
    bean: BeanType,
}

impl<'r> TypeCursor<'r> {
    pub fn new(bean: BeanType, registry: &'r ConstraintRegistry) -> Self {
        Self { registry, bean }
    }

    pub fn bean_type(&self) -> BeanType {
        self.bean
    }

    pub fn registry(&self) -> &'r ConstraintRegistry {
        self.registry
    }

    pub fn location(&self) -> Location {
        Location::Type { bean: self.bean }
    }

    /// Move to a property of this bean.
    pub fn property(
        &self,
        name: impl Into<String>,
        access: AccessKind,
    ) -> MappingResult<PropertyCursor<'r>> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MappingError::EmptyPropertyName { bean: self.bean });
        }
        trace!("navigating to property {}#{} ({})", self.bean, name, access);
        Ok(PropertyCursor::new(self.bean, name, access, self.registry))
    }

    /// Move to a method of this bean, pointing at its return value.
    ///
    /// An empty parameter list denotes a method without arguments.
    pub fn method(
        &self,
        name: impl Into<String>,
        parameter_types: impl Into<Vec<TypeToken>>,
    ) -> MappingResult<MethodCursor<'r>> {
        let signature = MethodSignature::new(self.bean, name, parameter_types)?;
        trace!("navigating to method {}", signature);
        Ok(MethodCursor::new(signature, self.registry))
    }

    /// Start declaring constraints on another bean type.
    pub fn bean(&self, other: BeanType) -> TypeCursor<'r> {
        trace!("navigating to bean {}", other);
        TypeCursor::new(other, self.registry)
    }

    /// Start declaring constraints on bean type `T`.
    pub fn type_of<T: 'static>(&self) -> TypeCursor<'r> {
        self.bean(BeanType::of::<T>())
    }

    /// Declare a class-level constraint.
    pub fn constraint<K: ConstraintKind>(&self, _kind: K) -> MappingResult<ConstraintDef<'r, K>> {
        ConstraintDef::new(self.registry, self.location(), K::NAME)
    }

    /// Declare a class-level constraint by kind name.
    pub fn generic_constraint(&self, kind: &str) -> MappingResult<GenericConstraintDef<'r>> {
        ConstraintDef::new(self.registry, self.location(), kind)
    }

    /// Record the groups validated, in order, in place of the default group.
    pub fn default_group_sequence(
        &self,
        groups: impl Into<Vec<TypeToken>>,
    ) -> MappingResult<&Self> {
        self.registry.set_default_group_sequence(self.bean, groups.into())?;
        Ok(self)
    }
}

impl fmt::Debug for TypeCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCursor")
            .field("bean", &self.bean)
            .finish_non_exhaustive()
    }
}
