//! Strand: String Analysis & Query Service
//!
//! An HTTP service that stores strings with precomputed analysis properties
//! (length, palindrome flag, word count, character frequencies, content hash)
//! and answers filter queries over them, including queries phrased in a
//! restricted natural language.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod store;

pub use analysis::StringProperties;
pub use api::{create_rest_router, ApiState};
pub use config::{ApiConfig, Config, ServerConfig, StorageConfig};
pub use error::{ConfigError, QueryError, Result, StoreError, StrandError};
pub use query::{
    record_matches, InterpretedQuery, NaturalLanguageResult, PhraseRule, QueryExecutor,
    QueryInterpreter, StringFilters, RULES,
};
pub use store::{create_store, EmbeddedStore, StoreStats, StringRecord, StringStore};
