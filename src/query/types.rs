//! Types for the natural language filter query system.

use serde::{Deserialize, Serialize};

// ============================================================================
// Filter Predicate
// ============================================================================

/// Structured filter set produced by query interpretation.
///
/// An absent field means "no constraint from this source", which is distinct
/// from a constraint that is explicitly false. All populated fields conjoin
/// when applied to stored records.
///
/// Length bounds are signed: the phrase "shorter than 0" legitimately
/// produces `max_length = -1`, an unsatisfiable bound that flows through
/// unchanged and yields an empty result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringFilters {
    /// Record's palindrome flag must equal this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on record length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Inclusive upper bound on record length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    /// Exact whitespace-delimited word count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    /// Record's value must contain this character, case-insensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is populated.
    pub fn is_unconstrained(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// True when both length bounds are present and mutually inconsistent.
    pub fn has_conflicting_bounds(&self) -> bool {
        matches!(
            (self.min_length, self.max_length),
            (Some(min), Some(max)) if min > max
        )
    }

    pub fn with_palindrome(mut self, value: bool) -> Self {
        self.is_palindrome = Some(value);
        self
    }

    pub fn with_min_length(mut self, value: i64) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn with_max_length(mut self, value: i64) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn with_word_count(mut self, value: i64) -> Self {
        self.word_count = Some(value);
        self
    }

    pub fn with_contains_character(mut self, value: char) -> Self {
        self.contains_character = Some(value);
        self
    }
}

// ============================================================================
// Interpreted Query
// ============================================================================

/// The interpretation echoed back to the caller alongside results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretedQuery {
    /// The raw query text as supplied.
    pub original: String,
    /// The filter set derived from it.
    pub parsed_filters: StringFilters,
}
