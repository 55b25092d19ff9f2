//! Attribute-position lookups and reconciliation of two table schemas.

use std::collections::HashMap;

use crate::{error::Error, table::Table};

/// Mapping from attribute name to its zero-based position within one
/// table's rows.
///
/// Built once per table after loading; read-only thereafter.
#[derive(Debug, Clone)]
pub struct AttributeIndex {
    positions: HashMap<String, usize>,
}

impl AttributeIndex {
    /// Build the position index for the given attribute names.
    ///
    /// Fails if a name occurs more than once, since the lookup would be
    /// ambiguous.
    pub fn new(attributes: &[String]) -> Result<Self, Error> {
        let mut positions = HashMap::with_capacity(attributes.len());

        for (position, name) in attributes.iter().enumerate() {
            if positions.insert(name.clone(), position).is_some() {
                return Err(Error::DuplicateAttribute { name: name.clone() });
            }
        }

        Ok(Self { positions })
    }

    /// Position of `name` within the indexed table's rows, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Whether `name` is an attribute of the indexed table.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of indexed attributes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the index contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// An attribute present in both tables, with its position in each.
#[derive(Debug, Clone)]
pub struct SharedAttribute {
    /// Attribute name.
    pub name: String,
    /// Position within left-table rows.
    pub left: usize,
    /// Position within right-table rows.
    pub right: usize,
}

/// A right-table attribute that the left table does not have.
#[derive(Debug, Clone)]
pub struct AppendedAttribute {
    /// Attribute name.
    pub name: String,
    /// Position within right-table rows.
    pub right: usize,
}

/// Join-relevant metadata derived once from two table schemas: the
/// attributes shared by both tables (the match key set) and the
/// attributes only the right table has (appended to join output).
///
/// Shared attributes are listed in left-header order and appended
/// attributes in right-header order, so the derived output layout is
/// deterministic across runs.
#[derive(Debug, Clone)]
pub struct JoinSchema {
    shared: Vec<SharedAttribute>,
    appended: Vec<AppendedAttribute>,
}

impl JoinSchema {
    /// Reconcile the schemas of `left` and `right`.
    pub fn reconcile(left: &Table, right: &Table) -> Self {
        let right_index = right.attribute_index();
        let shared = left
            .attributes()
            .iter()
            .enumerate()
            .filter_map(|(left_position, name)| {
                right_index.position(name).map(|right_position| SharedAttribute {
                    name: name.clone(),
                    left: left_position,
                    right: right_position,
                })
            })
            .collect();

        let left_index = left.attribute_index();
        let appended = right
            .attributes()
            .iter()
            .enumerate()
            .filter(|(_, name)| !left_index.contains(name))
            .map(|(right_position, name)| AppendedAttribute {
                name: name.clone(),
                right: right_position,
            })
            .collect();

        Self { shared, appended }
    }

    /// Attributes shared by both tables, in left-header order.
    pub fn shared(&self) -> &[SharedAttribute] {
        &self.shared
    }

    /// Right-only attributes, in right-header order.
    pub fn appended(&self) -> &[AppendedAttribute] {
        &self.appended
    }

    /// Header of a natural or left outer join result: the left table's
    /// attributes followed by the appended attribute names.
    pub fn output_attributes(&self, left: &Table) -> Vec<String> {
        left.attributes()
            .iter()
            .cloned()
            .chain(self.appended.iter().map(|attribute| attribute.name.clone()))
            .collect()
    }
}
