//! Error types for the people table.

use std::path::PathBuf;
use thiserror::Error;

/// A `sort` value that does not name a sortable column
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort column: {0:?} (expected one of name, sex, born, died)")]
pub struct UnknownSortKey(pub String);

/// Errors from decoding or encoding query strings
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query string could not be decoded
    #[error("failed to decode query string: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),

    /// The query parameters could not be encoded
    #[error("failed to encode query string: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Errors from loading people data
#[derive(Debug, Error)]
pub enum PeopleError {
    /// The people file could not be read
    #[error("failed to read people file {}: {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The people data is not a valid JSON array of people
    #[error("failed to parse people data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has an unusable value
    #[error("invalid configuration for {key}: {reason}")]
    Invalid {
        /// Environment variable name
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
