//! The ConstraintMapping - frozen, read-only result of a mapping session.

use crate::{CascadeDeclaration, ConstraintDeclaration, ConstraintDescriptor, Declaration};
use serde::Serialize;
use std::collections::HashMap;
use valmap_core::{BeanType, Location, MappingError, MappingResult, MethodSignature, TypeToken};

/// The declarations of a finished session, indexed for the validation engine.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct ConstraintMapping {
    /// All declarations in submission order.
    declarations: Vec<Declaration>,
    /// Declarations indexed by bean.
    by_bean: HashMap<BeanType, Vec<usize>>,
    /// Beans with declarations in order of first declaration, then beans
    /// that only have a default group sequence.
    beans: Vec<BeanType>,

    /// Default group sequences by bean.
    group_sequences: Vec<(BeanType, Vec<TypeToken>)>,
}

impl ConstraintMapping {
    pub(crate) fn new(
        declarations: Vec<Declaration>,
        group_sequences: Vec<(BeanType, Vec<TypeToken>)>,
    ) -> Self {
        let mut by_bean: HashMap<BeanType, Vec<usize>> = HashMap::new();
        let mut beans = Vec::new();

        for (i, declaration) in declarations.iter().enumerate() {
            let bean = declaration.location().bean();
            let indices = by_bean.entry(bean).or_default();
            if indices.is_empty() {
                beans.push(bean);
            }
            indices.push(i);
        }
        for (bean, _) in &group_sequences {
            if !beans.contains(bean) {
                beans.push(*bean);
            }
        }

        Self {
            declarations,
            by_bean,
            beans,
            group_sequences,
        }
    }

    /// All declarations in submission order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Beans with at least one declaration, in order of first declaration,
    /// followed by beans that only have a default group sequence.
    pub fn configured_beans(&self) -> impl Iterator<Item = BeanType> + '_ {
        self.beans.iter().copied()
    }

    // ==================== Per-bean Lookups ====================

    /// All declarations on a bean, in submission order.
    pub fn declarations_for(&self, bean: BeanType) -> Vec<&Declaration> {
        self.by_bean
            .get(&bean)
            .map(|indices| indices.iter().map(|&i| &self.declarations[i]).collect())
            .unwrap_or_default()
    }

    /// All constraint declarations on a bean.
    pub fn constraints_for(&self, bean: BeanType) -> Vec<&ConstraintDeclaration> {
        self.declarations_for(bean)
            .into_iter()
            .filter_map(Declaration::as_constraint)
            .collect()
    }

    /// All cascade declarations on a bean.
    pub fn cascades_for(&self, bean: BeanType) -> Vec<&CascadeDeclaration> {
        self.declarations_for(bean)
            .into_iter()
            .filter_map(Declaration::as_cascade)
            .collect()
    }

    /// Get the default group sequence of a bean.
    pub fn default_group_sequence(&self, bean: BeanType) -> Option<&[TypeToken]> {
        self.group_sequences
            .iter()
            .find(|(b, _)| *b == bean)
            .map(|(_, groups)| groups.as_slice())
    }

    // ==================== Per-location Lookups ====================

    /// Descriptors declared exactly at `location`.
    pub fn constraints_at(&self, location: &Location) -> Vec<&ConstraintDescriptor> {
        self.declarations_for(location.bean())
            .into_iter()
            .filter_map(Declaration::as_constraint)
            .filter(|c| &c.location == location)
            .map(|c| &c.descriptor)
            .collect()
    }

    /// Check if `location` is marked for cascaded validation.
    pub fn is_cascaded(&self, location: &Location) -> bool {
        self.declarations_for(location.bean())
            .into_iter()
            .filter_map(Declaration::as_cascade)
            .any(|c| &c.location == location)
    }

    /// Return value and parameter declarations of one method.
    pub fn method_declarations(&self, signature: &MethodSignature) -> Vec<&Declaration> {
        self.declarations_for(signature.bean())
            .into_iter()
            .filter(|d| d.location().signature() == Some(signature))
            .collect()
    }

    // ==================== Export ====================

    /// Serialize the mapping as JSON for an engine living outside this process.
    pub fn to_json(&self) -> MappingResult<String> {
        let export = MappingExport {
            declarations: &self.declarations,
            group_sequences: self
                .group_sequences
                .iter()
                .map(|(bean, groups)| GroupSequenceExport {
                    bean: *bean,
                    groups,
                })
                .collect(),
        };
        serde_json::to_string_pretty(&export)
            .map_err(|e| MappingError::Serialization(e.to_string()))
    }
}

#[derive(Serialize)]
struct MappingExport<'a> {
    declarations: &'a [Declaration],
    group_sequences: Vec<GroupSequenceExport<'a>>,
}

#[derive(Serialize)]
struct GroupSequenceExport<'a> {
    bean: BeanType,
    groups: &'a [TypeToken],
}
