//! Cartesian product of two tables.

use itertools::Itertools;

use crate::table::{Row, Table};

/// Header of a cartesian product result: all of the left table's
/// attributes followed by all of the right table's.
pub fn cartesian_attributes(left: &Table, right: &Table) -> Vec<String> {
    left.attributes()
        .iter()
        .chain(right.attributes().iter())
        .cloned()
        .collect()
}

/// Emit one concatenated row per pair of input rows.
///
/// The result has `|left| * |right|` rows of width
/// `arity(left) + arity(right)`, ordered row-major over the left table
/// (the left row varies slowest). An empty input yields an empty result.
pub fn cartesian_product(left: &Table, right: &Table) -> Vec<Row> {
    let result: Vec<Row> = left
        .rows()
        .iter()
        .cartesian_product(right.rows().iter())
        .map(|(left_row, right_row)| {
            left_row.iter().chain(right_row.iter()).cloned().collect()
        })
        .collect();

    log::debug!("cartesian product yielded {} rows", result.len());

    result
}
