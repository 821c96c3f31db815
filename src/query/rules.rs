//! Phrase rule set for natural language filter queries.
//!
//! Each rule is an independent recognizer: a trigger pattern over the
//! normalized (trimmed, lowercased) query text and the filter fragment it
//! contributes when triggered. Rules are stateless and not mutually
//! exclusive; they are folded over the query in the declared order of
//! [`RULES`], and a later rule's assignment overwrites an earlier rule's
//! assignment to the same field.

use std::sync::LazyLock;

use regex::Regex;

use super::types::StringFilters;

/// One independent pattern-to-fragment rule.
pub struct PhraseRule {
    /// Stable identifier, used in logs and tests.
    pub name: &'static str,
    /// Applies the rule's fragment to the filter set if the trigger matches.
    pub apply: fn(&str, &mut StringFilters),
}

/// The fixed rule set, in declared order. Later rules win field collisions.
pub static RULES: &[PhraseRule] = &[
    PhraseRule {
        name: "palindrome",
        apply: apply_palindrome,
    },
    PhraseRule {
        name: "word_count",
        apply: apply_word_count,
    },
    PhraseRule {
        name: "longer_than",
        apply: apply_longer_than,
    },
    PhraseRule {
        name: "shorter_than",
        apply: apply_shorter_than,
    },
    PhraseRule {
        name: "exactly",
        apply: apply_exactly,
    },
    PhraseRule {
        name: "contains_character",
        apply: apply_contains_character,
    },
    PhraseRule {
        name: "first_vowel",
        apply: apply_first_vowel,
    },
];

// ============================================================================
// Rule Evaluators
// ============================================================================

/// "palindrome" / "palindromic" anywhere, word-bounded.
fn apply_palindrome(query: &str, filters: &mut StringFilters) {
    if PALINDROME_PATTERN.is_match(query) {
        filters.is_palindrome = Some(true);
    }
}

/// A count token ("single", "two", "three", or digits) followed by "word".
fn apply_word_count(query: &str, filters: &mut StringFilters) {
    if let Some(caps) = WORD_COUNT_PATTERN.captures(query) {
        let token = &caps[1];
        let count = match token {
            "single" | "one" => Some(1),
            "two" => Some(2),
            "three" => Some(3),
            _ => token.parse::<i64>().ok(),
        };
        if let Some(count) = count {
            filters.word_count = Some(count);
        }
    }
}

/// "longer than N": strictly greater, expressed as an inclusive lower bound.
fn apply_longer_than(query: &str, filters: &mut StringFilters) {
    if let Some(caps) = LONGER_THAN_PATTERN.captures(query) {
        if let Ok(n) = caps[1].parse::<i64>() {
            filters.min_length = Some(n.saturating_add(1));
        }
    }
}

/// "shorter than N": strictly less, expressed as an inclusive upper bound.
/// N = 0 yields -1, an unsatisfiable bound that is deliberately not rejected
/// here.
fn apply_shorter_than(query: &str, filters: &mut StringFilters) {
    if let Some(caps) = SHORTER_THAN_PATTERN.captures(query) {
        if let Ok(n) = caps[1].parse::<i64>() {
            filters.max_length = Some(n.saturating_sub(1));
        }
    }
}

/// "exactly N": a degenerate range setting both bounds.
fn apply_exactly(query: &str, filters: &mut StringFilters) {
    if let Some(caps) = EXACTLY_PATTERN.captures(query) {
        if let Ok(n) = caps[1].parse::<i64>() {
            filters.min_length = Some(n);
            filters.max_length = Some(n);
        }
    }
}

/// "contain"/"contains"/"containing", optionally "the letter", then a single
/// alphabetic character.
fn apply_contains_character(query: &str, filters: &mut StringFilters) {
    if let Some(caps) = CONTAINS_PATTERN.captures(query) {
        if let Some(ch) = caps[1].chars().next() {
            filters.contains_character = Some(ch.to_ascii_lowercase());
        }
    }
}

/// The literal "first vowel" anywhere always resolves to 'a'.
fn apply_first_vowel(query: &str, filters: &mut StringFilters) {
    if query.contains("first vowel") {
        filters.contains_character = Some('a');
    }
}

// ============================================================================
// Trigger Patterns (using LazyLock for static initialization)
// ============================================================================

static PALINDROME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpalindrom(?:ic|e)\b").expect("Invalid regex"));
static WORD_COUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\b\d+\b|\bsingle\b|\btwo\b|\bthree\b)\s+word").expect("Invalid regex")
});
static LONGER_THAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"longer than (\d+)").expect("Invalid regex"));
static SHORTER_THAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"shorter than (\d+)").expect("Invalid regex"));
static EXACTLY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"exactly (\d+)").expect("Invalid regex"));
static CONTAINS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"contain(?:s|ing)?(?: the letter)? ([a-zA-Z])").expect("Invalid regex")
});

// ============================================================================
// Tests
// ============================================================================
