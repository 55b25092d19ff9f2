//! Relational-algebra operations over tables read from
//! delimiter-separated value files: cartesian product, natural join,
//! and left outer join of two tables.
//!
//! Tables are loaded once and read-only afterwards; the operations are
//! pure functions producing new row sequences. All fields are opaque
//! strings and comparisons are lexical equality.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod display;
pub mod error;
pub mod io;
pub mod operations;
pub mod schema;
pub mod table;

pub use error::Error;
pub use table::{Row, Table};
