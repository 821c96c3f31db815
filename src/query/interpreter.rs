//! Natural Language Query Interpreter.
//!
//! Maps a free-text query to a [`StringFilters`] predicate by folding the
//! fixed phrase rule set over the normalized input. Interpretation is a pure
//! function of the input text: no I/O, no shared state, safe to call from any
//! number of concurrent requests.

use crate::error::QueryError;

use super::rules::RULES;
use super::types::StringFilters;

/// Interprets natural language queries into structured filters.
///
/// The interpreter is stateless and freely instantiable; every call builds a
/// fresh filter set.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryInterpreter;

impl QueryInterpreter {
    /// Create a new interpreter.
    pub fn new() -> Self {
        Self
    }

    /// Interpret a raw query into a filter set.
    ///
    /// Steps, in order:
    /// 1. Trim and lowercase; an empty result fails with [`QueryError::EmptyQuery`].
    /// 2. Fold every phrase rule over the normalized text in declared order;
    ///    a later rule's field assignment overwrites an earlier one's.
    /// 3. Zero populated fields fails with [`QueryError::Unparseable`].
    /// 4. `min_length > max_length` fails with [`QueryError::ConflictingFilters`].
    pub fn interpret(&self, query: &str) -> Result<StringFilters, QueryError> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let mut filters = StringFilters::new();
        for rule in RULES {
            (rule.apply)(&normalized, &mut filters);
        }

        if filters.is_unconstrained() {
            return Err(QueryError::Unparseable);
        }

        if filters.has_conflicting_bounds() {
            return Err(QueryError::ConflictingFilters);
        }

        Ok(filters)
    }
}
