//! String property computations.
//!
//! Every function here is a pure function of the input string. Properties are
//! computed once at ingestion time and stored alongside the value, so filter
//! queries never recompute them.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of characters (Unicode scalar values) in the string.
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Whether the string reads the same backwards as forwards, ignoring case.
pub fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value.to_lowercase().chars().collect();
    let reversed: Vec<char> = normalized.iter().rev().copied().collect();
    normalized == reversed
}

/// Number of distinct characters in the string.
pub fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

/// Number of whitespace-delimited words.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Lowercase hex SHA-256 digest of the string's UTF-8 bytes.
///
/// Doubles as the record's identity: two equal values always hash to the
/// same id, which is how duplicates are detected.
pub fn sha256_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Per-character occurrence counts.
pub fn character_frequency_map(value: &str) -> BTreeMap<String, u64> {
    let mut map = BTreeMap::new();
    for ch in value.chars() {
        *map.entry(ch.to_string()).or_insert(0) += 1;
    }
    map
}

/// The full set of precomputed properties for a stored string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: BTreeMap<String, u64>,
}

impl StringProperties {
    /// Compute all properties for a value.
    pub fn compute(value: &str) -> Self {
        Self {
            length: length(value),
            is_palindrome: is_palindrome(value),
            unique_characters: unique_characters(value),
            word_count: word_count(value),
            sha256_hash: sha256_hash(value),
            character_frequency_map: character_frequency_map(value),
        }
    }
}
