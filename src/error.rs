//! Error types for pattern compilation and predicate parsing

/// Errors reported by this crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Escape string was neither empty nor a single character
    #[error("Escape must be empty or a single character: '{0}'")]
    InvalidEscape(String),

    /// Predicate text is not a supported LIKE predicate
    #[error("Query error: {0}")]
    QueryError(String),

    /// SQL text could not be parsed
    #[error("SQL parse error: {0}")]
    SqlParse(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
