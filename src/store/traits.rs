//! Record store trait definitions.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::StringProperties;
use crate::query::StringFilters;

/// A stored string with its precomputed analysis properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRecord {
    /// SHA-256 hex digest of the value, also the primary key.
    pub id: String,
    /// The stored string, trimmed.
    pub value: String,
    /// Character count.
    pub length: usize,
    /// Case-insensitive palindrome flag.
    pub is_palindrome: bool,
    /// Distinct character count.
    pub unique_characters: usize,
    /// Whitespace-delimited word count.
    pub word_count: usize,
    /// Same digest as `id`.
    pub sha256_hash: String,
    /// Per-character occurrence counts.
    pub character_frequency_map: BTreeMap<String, u64>,
    /// Ingestion time.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record from a value, computing all properties now.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = StringProperties::compute(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            length: properties.length,
            is_palindrome: properties.is_palindrome,
            unique_characters: properties.unique_characters,
            word_count: properties.word_count,
            sha256_hash: properties.sha256_hash,
            character_frequency_map: properties.character_frequency_map,
            created_at: Utc::now(),
        }
    }

    /// The record's property bundle, as computed at ingestion.
    pub fn properties(&self) -> StringProperties {
        StringProperties {
            length: self.length,
            is_palindrome: self.is_palindrome,
            unique_characters: self.unique_characters,
            word_count: self.word_count,
            sha256_hash: self.sha256_hash.clone(),
            character_frequency_map: self.character_frequency_map.clone(),
        }
    }
}

/// Store statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of stored strings.
    pub string_count: usize,
    /// Number of stored strings flagged as palindromes.
    pub palindrome_count: usize,
}

/// Trait for string record stores.
#[async_trait]
pub trait StringStore: Send + Sync {
    /// Insert a record. Fails with `StoreError::AlreadyExists` if a record
    /// with the same hash is present.
    async fn insert(&self, record: StringRecord) -> crate::error::Result<()>;

    /// Get a record by its hash.
    async fn get(&self, hash: &str) -> crate::error::Result<Option<StringRecord>>;

    /// List records matching all populated filter fields.
    async fn list(&self, filters: &StringFilters) -> crate::error::Result<Vec<StringRecord>>;

    /// Remove a record by its hash, returning it if it was present.
    async fn remove(&self, hash: &str) -> crate::error::Result<Option<StringRecord>>;

    /// Get store statistics.
    async fn stats(&self) -> crate::error::Result<StoreStats>;
}
