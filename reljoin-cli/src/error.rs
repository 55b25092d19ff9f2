//! This module defines all the errors that can occur while executing the CLI.

use thiserror::Error;

/// Error that can occur during execution of the CLI app
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Error if the delimiter does not fit in a single byte
    #[error("delimiter '{delimiter}' is not a single-byte character")]
    InvalidDelimiter {
        /// Offending delimiter
        delimiter: char,
    },
    /// Error resulting from io operations
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Error originating from the library
    #[error(transparent)]
    JoinError(#[from] reljoin::Error),
}
