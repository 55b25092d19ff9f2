//! The relational operations evaluated over two loaded tables.

pub mod cartesian;
pub mod join;

pub use cartesian::{cartesian_attributes, cartesian_product};
pub use join::{left_outer_join, natural_join};

/// Token appended in place of right-table values for a left row without
/// a join partner, unless the caller picks another one.
pub const DANGLING_PLACEHOLDER: &str = "NONE";
