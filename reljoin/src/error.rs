//! This module defines all the errors that can occur while loading
//! tables and evaluating operations over them.

use std::path::PathBuf;

use thiserror::Error;

/// Error-collection for all the possible errors occurring in this crate
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum Error {
    /// Error while opening or reading an input file
    #[error("failed to read \"{filename}\": {error}")]
    IoReading {
        /// Contains the wrapped I/O error
        error: std::io::Error,
        /// File that could not be read
        filename: PathBuf,
    },
    /// Error if the input contains no records at all
    #[error("input contains no records; the first record must be a header")]
    EmptyTable,
    /// Error if the header record contains no attributes
    #[error("header contains no attributes; at least one is required")]
    EmptyHeader,
    /// Error if a data row's field count disagrees with the header
    #[error("row {row} has {found} fields, but the header has {expected}")]
    RowWidth {
        /// Offending data row, starting at 1 for the first row after the header
        row: usize,
        /// Field count of the header
        expected: usize,
        /// Field count of the offending row
        found: usize,
    },
    /// Error if the same attribute name appears twice in one header
    #[error("duplicate attribute \"{name}\"; attribute positions would be ambiguous")]
    DuplicateAttribute {
        /// Name occurring more than once
        name: String,
    },
    /// Error if the export target exists and should not be overwritten
    #[error("file \"{filename}\" exists and would be overwritten!\nConsider using the `--overwrite-export` option or choosing a different path.")]
    ExportExists {
        /// Filename which caused the error
        filename: PathBuf,
    },
    /// Error at the csv reading or writing layer
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// IO Error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
