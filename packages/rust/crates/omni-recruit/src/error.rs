//! Error types for recruitment queries.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Result type with recruit-specific error
pub type RecruitResult<T> = Result<T, RecruitError>;

/// Error types for catalog construction and combination queries.
///
/// Empty pools, inverted level intervals and undefined averages are not
/// errors; they are returned as ordinary data.
#[derive(Error, Debug)]
pub enum RecruitError {
    /// Catalog contains a structurally invalid or identity-ambiguous record.
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    /// More tags were selected than can be evaluated at once.
    #[error("Too many tags: {selected} selected (limit: {limit})")]
    TooManyTags {
        /// Number of distinct tags in the selection.
        selected: usize,
        /// Maximum number of simultaneously selectable tags.
        limit: usize,
    },

    /// Query selected no tags at all.
    #[error("Empty tag selection")]
    EmptySelection,

    /// Catalog document could not be deserialized.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration document could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
