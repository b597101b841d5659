//! Error types raised while loading the ratings dataset.

use camino::Utf8PathBuf;
use kindred_core::{ItemError, RatingError};
use thiserror::Error;

/// Errors raised while loading and parsing dataset resources.
///
/// Every variant is fatal: the loader never yields a partial table.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required resource is missing or unreadable.
    #[error("required dataset resource {path} is missing or unreadable")]
    MissingResource {
        /// Path of the resource that could not be read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A record carried the wrong number of delimited fields.
    #[error("{path}:{line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// Path of the offending resource.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// Field count the format requires.
        expected: usize,
        /// Field count actually present.
        found: usize,
    },
    /// A numeric field could not be parsed.
    #[error("{path}:{line}: {field} value '{value}' is not numeric")]
    InvalidNumber {
        /// Path of the offending resource.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// Name of the field being parsed.
        field: &'static str,
        /// Raw text found in the record.
        value: String,
        /// Source error from integer parsing.
        #[source]
        source: std::num::ParseIntError,
    },
    /// A genre flag column held something other than `0` or `1`.
    #[error("{path}:{line}: genre flag column {column} holds '{value}', expected 0 or 1")]
    InvalidGenreFlag {
        /// Path of the offending resource.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// Zero-based flag column index.
        column: usize,
        /// Raw text found in the column.
        value: String,
    },
    /// A rating record failed domain validation.
    #[error("{path}:{line}: invalid rating record")]
    InvalidRating {
        /// Path of the offending resource.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// Source error from the domain constructor.
        #[source]
        source: RatingError,
    },
    /// An item record failed domain validation.
    #[error("{path}:{line}: invalid item record")]
    InvalidItem {
        /// Path of the offending resource.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// Source error from the domain constructor.
        #[source]
        source: ItemError,
    },
}
