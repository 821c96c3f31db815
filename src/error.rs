//! Error types for the Strand service.

use thiserror::Error;

/// Main error type for Strand operations.
#[derive(Error, Debug)]
pub enum StrandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Natural language query interpretation failures.
///
/// All variants are deterministic validation outcomes: the same input text
/// always produces the same failure, so retrying is never meaningful.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Input was empty or all-whitespace after normalization.
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// No phrase rule matched; zero filter fields were produced.
    #[error("Unable to parse natural language query")]
    Unparseable,

    /// Rules produced fields, but min_length exceeds max_length.
    #[error("Conflicting filters: min_length > max_length")]
    ConflictingFilters,
}

/// Storage-related errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("String already exists in the system")]
    AlreadyExists(String),

    #[error("String does not exist in the system")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Strand operations.
pub type Result<T> = std::result::Result<T, StrandError>;
