//! Per-constraint builders.

use std::fmt;
use std::marker::PhantomData;
use valmap_core::{Location, MappingResult, TypeToken, Value};
use valmap_registry::{ConstraintDescriptor, ConstraintRegistry};

/// A constraint kind usable with `constraint(kind)`.
///
/// The name must match a kind in the registry's catalog. Custom kinds
/// implement this for a marker type and register a `KindDef` of the same name.
pub trait ConstraintKind {
    const NAME: &'static str;
}

/// Marker for constraints addressed by kind name, see [`GenericConstraintDef`].
#[derive(Debug, Clone, Copy)]
pub struct Generic;

/// Builder for a constraint whose kind is only known by name.
pub type GenericConstraintDef<'r> = ConstraintDef<'r, Generic>;

/// Builder for one constraint bound to the location it was requested at.
///
/// Nothing is recorded until [`done`](ConstraintDef::done) is called.
#[must_use = "a constraint is only recorded once done() is called"]
pub struct ConstraintDef<'r, K> {
    registry: &'r ConstraintRegistry,
    location: Location,
    descriptor: ConstraintDescriptor,
    _kind: PhantomData<K>,
}

impl<'r, K> ConstraintDef<'r, K> {
    /// Fails if the registry's catalog cannot represent `kind`.
    pub(crate) fn new(
        registry: &'r ConstraintRegistry,
        location: Location,
        kind: &str,
    ) -> MappingResult<Self> {
        registry.catalog().resolve(kind)?;
        Ok(Self {
            registry,
            location,
            descriptor: ConstraintDescriptor::new(kind),
            _kind: PhantomData,
        })
    }

    /// Override the message template.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.descriptor.message = Some(message.into());
        self
    }

    /// Set the groups the constraint belongs to.
    pub fn groups(mut self, groups: impl Into<Vec<TypeToken>>) -> Self {
        self.descriptor.groups = groups.into();
        self
    }

    /// Set the payload types.
    pub fn payload(mut self, payload: impl Into<Vec<TypeToken>>) -> Self {
        self.descriptor.payload = payload.into();
        self
    }

    /// Set an attribute by name. Checked against the catalog on `done()`.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.descriptor.attributes.insert(name.into(), value.into());
        self
    }

    /// The location the constraint will be declared at.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The descriptor built so far.
    pub fn descriptor(&self) -> &ConstraintDescriptor {
        &self.descriptor
    }

    /// Complete the constraint and append it to the registry.
    pub fn done(self) -> MappingResult<()> {
        self.registry.add_constraint(self.location, self.descriptor)
    }
}

impl<K> fmt::Debug for ConstraintDef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintDef")
            .field("location", &self.location)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
