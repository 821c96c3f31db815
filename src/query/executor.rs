//! Filter Executor.
//!
//! Applies an interpreted filter set against the record store: every
//! populated filter field must hold for a record to be returned (logical
//! AND). Record properties are precomputed at ingestion, so matching is a
//! field-by-field comparison.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{StringRecord, StringStore};

use super::interpreter::QueryInterpreter;
use super::types::{InterpretedQuery, StringFilters};

/// Whether a record satisfies every populated filter field.
pub fn record_matches(record: &StringRecord, filters: &StringFilters) -> bool {
    if let Some(want) = filters.is_palindrome {
        if record.is_palindrome != want {
            return false;
        }
    }
    if let Some(min) = filters.min_length {
        if (record.length as i64) < min {
            return false;
        }
    }
    if let Some(max) = filters.max_length {
        if (record.length as i64) > max {
            return false;
        }
    }
    if let Some(count) = filters.word_count {
        if record.word_count as i64 != count {
            return false;
        }
    }
    if let Some(ch) = filters.contains_character {
        let needle = ch.to_lowercase().to_string();
        if !record.value.to_lowercase().contains(&needle) {
            return false;
        }
    }
    true
}

/// Result of executing a natural language query against the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalLanguageResult {
    /// The interpretation, echoed back for the caller.
    pub interpreted_query: InterpretedQuery,
    /// Records satisfying the filter set.
    pub records: Vec<StringRecord>,
}

/// Executes natural language queries: interpret, then fetch matching records.
pub struct QueryExecutor {
    interpreter: QueryInterpreter,
    store: Arc<dyn StringStore>,
}

impl QueryExecutor {
    /// Create a new executor over a store.
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self {
            interpreter: QueryInterpreter::new(),
            store,
        }
    }

    /// Interpret a raw query and return the matching records.
    ///
    /// Interpretation failures propagate as `StrandError::Query`; no records
    /// are fetched for a query that does not interpret.
    pub async fn execute(&self, query: &str) -> Result<NaturalLanguageResult> {
        let filters = self.interpreter.interpret(query)?;
        let records = self.store.list(&filters).await?;
        Ok(NaturalLanguageResult {
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters: filters,
            },
            records,
        })
    }
}
