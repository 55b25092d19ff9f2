//! Tables as an ordered attribute list plus an ordered sequence of rows.

use crate::{error::Error, schema::AttributeIndex};

/// One data record, positionally aligned to the owning table's attributes.
pub type Row = Vec<String>;

/// A loaded table: attribute names in header order, data rows, and the
/// attribute position index built once at construction.
///
/// Tables are read-only after construction; every row is guaranteed to
/// have exactly as many fields as the table has attributes.
#[derive(Debug, Clone)]
pub struct Table {
    attributes: Vec<String>,
    rows: Vec<Row>,
    index: AttributeIndex,
}

impl Table {
    /// Create a table from a header and its data rows.
    ///
    /// Fails if the header is empty, if an attribute name occurs twice,
    /// or if any row's field count differs from the header's.
    pub fn new(attributes: Vec<String>, rows: Vec<Row>) -> Result<Self, Error> {
        if attributes.is_empty() || attributes.iter().all(String::is_empty) {
            return Err(Error::EmptyHeader);
        }

        for (number, row) in rows.iter().enumerate() {
            if row.len() != attributes.len() {
                return Err(Error::RowWidth {
                    row: number + 1,
                    expected: attributes.len(),
                    found: row.len(),
                });
            }
        }

        let index = AttributeIndex::new(&attributes)?;

        Ok(Self {
            attributes,
            rows,
            index,
        })
    }

    /// Attribute names in header order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Data rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of attributes, i.e. the field count of every row.
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// Position lookup for this table's attributes.
    pub fn attribute_index(&self) -> &AttributeIndex {
        &self.index
    }
}
