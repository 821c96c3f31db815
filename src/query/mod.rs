//! Natural Language Filter Queries.
//!
//! This module provides:
//! - The filter predicate model shared by the structured and natural
//!   language filter endpoints
//! - The ordered phrase rule set and the interpreter that folds it
//! - The executor that applies an interpreted filter set to the store

pub mod executor;
pub mod interpreter;
pub mod rules;
pub mod types;

pub use executor::*;
pub use interpreter::*;
pub use rules::*;
pub use types::*;
