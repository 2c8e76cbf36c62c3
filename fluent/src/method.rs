//! Cursor scoped to one method of a bean.
//!
//! A method cursor points either at the method's return value or at one of
//! its parameters. `parameter(i)` and `return_value()` hand out new cursors
//! for the same signature, which all of them share and none of them mutate.

use crate::{ConstraintDef, ConstraintKind, GenericConstraintDef, PropertyCursor, TypeCursor};
use std::fmt;
use std::rc::Rc;
use tracing::trace;
use valmap_core::{
    AccessKind, BeanType, Location, MappingResult, MethodSignature, MethodTarget, TypeToken,
};
use valmap_registry::{ConstraintRegistry, IndexCheck};

/// Declares constraints on a method's return value or parameters.
#[derive(Clone)]
pub struct MethodCursor<'r> {
    registry: &'r ConstraintRegistry,
    signature: Rc<MethodSignature>,
    target: MethodTarget,
}

impl<'r> MethodCursor<'r> {
    /// Create a cursor pointing at the return value of `signature`.
    pub(crate) fn new(signature: MethodSignature, registry: &'r ConstraintRegistry) -> Self {
        Self {
            registry,
            signature: Rc::new(signature),
            target: MethodTarget::ReturnValue,
        }
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    pub fn bean_type(&self) -> BeanType {
        self.signature.bean()
    }

    /// What the cursor currently points at.
    pub fn target(&self) -> MethodTarget {
        self.target
    }

    pub fn registry(&self) -> &'r ConstraintRegistry {
        self.registry
    }

    pub fn location(&self) -> Location {
        Location::for_method(self.signature.as_ref().clone(), self.target)
    }

    // ==================== Declarations ====================

    /// Start a constraint on the current return value or parameter.
    pub fn constraint<K: ConstraintKind>(&self, _kind: K) -> MappingResult<ConstraintDef<'r, K>> {
        ConstraintDef::new(self.registry, self.location(), K::NAME)
    }

    /// Start a constraint on the current return value or parameter by kind name.
    pub fn generic_constraint(&self, kind: &str) -> MappingResult<GenericConstraintDef<'r>> {
        ConstraintDef::new(self.registry, self.location(), kind)
    }

    /// Mark the current return value or parameter for cascaded validation.
    pub fn valid(&self) -> &Self {
        self.registry.add_cascade(self.location());
        self
    }

    // ==================== Navigation ====================

    /// Point at the parameter at `index`.
    ///
    /// With [`IndexCheck::Eager`] an index outside the method's arity fails
    /// here; with [`IndexCheck::Deferred`] it fails when the registry is frozen.
    pub fn parameter(&self, index: usize) -> MappingResult<MethodCursor<'r>> {
        if self.registry.config().index_check == IndexCheck::Eager {
            self.signature.check_index(index)?;
        }
        trace!("navigating to {} parameter {}", self.signature, index);
        Ok(self.at(MethodTarget::Parameter(index)))
    }

    /// Point at the return value.
    pub fn return_value(&self) -> MethodCursor<'r> {
        trace!("navigating to {} return value", self.signature);
        self.at(MethodTarget::ReturnValue)
    }

    /// Move to another method of the same bean, pointing at its return value.
    pub fn method(
        &self,
        name: impl Into<String>,
        parameter_types: impl Into<Vec<TypeToken>>,
    ) -> MappingResult<MethodCursor<'r>> {
        self.owner().method(name, parameter_types)
    }

    pub fn property(
        &self,
        name: impl Into<String>,
        access: AccessKind,
    ) -> MappingResult<PropertyCursor<'r>> {
        self.owner().property(name, access)
    }

    pub fn bean(&self, other: BeanType) -> TypeCursor<'r> {
        self.owner().bean(other)
    }

    pub fn type_of<T: 'static>(&self) -> TypeCursor<'r> {
        self.owner().type_of::<T>()
    }

    fn at(&self, target: MethodTarget) -> Self {
        Self {
            registry: self.registry,
            signature: Rc::clone(&self.signature),
            target,
        }
    }

    fn owner(&self) -> TypeCursor<'r> {
        TypeCursor::new(self.signature.bean(), self.registry)
    }
}

impl fmt::Debug for MethodCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodCursor")
            .field("signature", &self.signature)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
