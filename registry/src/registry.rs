//! The ConstraintRegistry - shared accumulator of one mapping session.

use crate::{
    CascadeDeclaration, ConstraintCatalog, ConstraintDeclaration, ConstraintDescriptor,
    ConstraintMapping, Declaration, KindDef, MappingConfig,
};
use std::cell::RefCell;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use valmap_core::{BeanType, Location, MappingError, MappingResult, TypeToken};

/// Accumulates declarations submitted by the cursors of one mapping session.
///
/// Cursors borrow the registry; appends go through `&self`. Once every cursor
/// is dropped, `freeze()` consumes the registry into a read-only
/// [`ConstraintMapping`] for the validation engine.
///
/// The registry is `!Sync`: a session is built on one thread.
#[derive(Debug)]
pub struct ConstraintRegistry {
    /// Session configuration.
    config: MappingConfig,
    /// Constraint kinds this registry can represent.
    catalog: ConstraintCatalog,

    /// Declarations in submission order.
    declarations: RefCell<Vec<Declaration>>,
    /// Default group sequences in first-declared order; redeclaring replaces.
    group_sequences: RefCell<Vec<(BeanType, Vec<TypeToken>)>>,
}

impl ConstraintRegistry {
    /// Create a registry with the default configuration and built-in kinds.
    pub fn new() -> Self {
        Self::with_config(MappingConfig::default())
    }

    /// Create a registry with the given configuration and built-in kinds.
    pub fn with_config(config: MappingConfig) -> Self {
        Self {
            config,
            catalog: ConstraintCatalog::builtin(),
            declarations: RefCell::new(Vec::new()),
            group_sequences: RefCell::new(Vec::new()),
        }
    }

    /// Register a custom constraint kind. Must happen before any cursor borrows the registry.
    pub fn register_kind(&mut self, kind: KindDef) {
        debug!("registered constraint kind {}", kind.name);
        self.catalog.register(kind);
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ConstraintCatalog {
        &self.catalog
    }

    // ==================== Appends ====================

    /// Check a descriptor against the catalog and append it at `location`.
    pub fn add_constraint(
        &self,
        location: Location,
        descriptor: ConstraintDescriptor,
    ) -> MappingResult<()> {
        self.catalog.check(&descriptor, &self.config)?;
        debug!("constraint {} declared at {}", descriptor.kind, location);
        self.declarations
            .borrow_mut()
            .push(Declaration::Constraint(ConstraintDeclaration {
                location,
                descriptor,
            }));
        Ok(())
    }

    /// Append a cascade marker at `location`.
    pub fn add_cascade(&self, location: Location) {
        debug!("cascade declared at {}", location);
        self.declarations
            .borrow_mut()
            .push(Declaration::Cascade(CascadeDeclaration { location }));
    }

    /// Record the default group sequence of a bean, replacing any earlier one.
    pub fn set_default_group_sequence(
        &self,
        bean: BeanType,
        groups: Vec<TypeToken>,
    ) -> MappingResult<()> {
        if groups.is_empty() {
            return Err(MappingError::InvalidGroupSequence {
                bean,
                reason: "sequence is empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = groups.iter().find(|g| !seen.insert(**g)) {
            return Err(MappingError::InvalidGroupSequence {
                bean,
                reason: format!("group {} appears more than once", dup),
            });
        }

        debug!("default group sequence of {} set to {} groups", bean, groups.len());
        let mut sequences = self.group_sequences.borrow_mut();
        match sequences.iter_mut().find(|(b, _)| *b == bean) {
            Some((_, existing)) => *existing = groups,
            None => sequences.push((bean, groups)),
        }
        Ok(())
    }

    // ==================== Inspection ====================

    /// Number of declarations so far.
    pub fn len(&self) -> usize {
        self.declarations.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.borrow().is_empty()
    }

    /// Number of constraint declarations so far.
    pub fn constraint_count(&self) -> usize {
        self.declarations
            .borrow()
            .iter()
            .filter(|d| !d.is_cascade())
            .count()
    }

    /// Number of cascade declarations so far.
    pub fn cascade_count(&self) -> usize {
        self.declarations
            .borrow()
            .iter()
            .filter(|d| d.is_cascade())
            .count()
    }

    /// Copy of the declarations so far, in submission order.
    pub fn snapshot(&self) -> Vec<Declaration> {
        self.declarations.borrow().clone()
    }

    /// Get the default group sequence declared for a bean.
    pub fn default_group_sequence(&self, bean: BeanType) -> Option<Vec<TypeToken>> {
        self.group_sequences
            .borrow()
            .iter()
            .find(|(b, _)| *b == bean)
            .map(|(_, groups)| groups.clone())
    }

    // ==================== Freeze ====================

    /// End the session and hand the declarations over as a read-only mapping.
    ///
    /// Parameter indices are checked here in every index mode, so a mapping
    /// never carries a parameter location outside its method's arity.
    pub fn freeze(self) -> MappingResult<ConstraintMapping> {
        let declarations = self.declarations.into_inner();
        let group_sequences = self.group_sequences.into_inner();

        for declaration in &declarations {
            if let Location::MethodParameter { signature, index } = declaration.location() {
                if let Err(e) = signature.check_index(*index) {
                    warn!("rejecting mapping: {}", e);
                    return Err(e);
                }
            }
        }

        let mapping = ConstraintMapping::new(declarations, group_sequences);
        info!(
            "froze constraint mapping: {} declarations over {} beans",
            mapping.len(),
            mapping.configured_beans().count()
        );
        Ok(mapping)
    }
}

impl Default for ConstraintRegistry {
    fn default() -> Self {
        Self::new()
    }
}
