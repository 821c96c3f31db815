//! Embedded record store backed by a JSON file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::query::{record_matches, StringFilters};
use crate::store::{StoreStats, StringRecord, StringStore};

/// Embedded store keeping records in memory, persisted to a single JSON file
/// under the data directory. The file is loaded once at startup and rewritten
/// after every mutation.
pub struct EmbeddedStore {
    records: RwLock<HashMap<String, StringRecord>>,
    path: Option<PathBuf>,
}

impl EmbeddedStore {
    const FILE_NAME: &'static str = "strings.json";

    /// Open (or create) a store persisted under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir).map_err(StoreError::Io)?;
        let path = data_dir.join(Self::FILE_NAME);

        let records = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(StoreError::Io)?;
            let loaded: Vec<StringRecord> = serde_json::from_str(&content)
                .map_err(|e| StoreError::Persistence(e.to_string()))?;
            tracing::info!("Loaded {} strings from {}", loaded.len(), path.display());
            loaded.into_iter().map(|r| (r.id.clone(), r)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            records: RwLock::new(records),
            path: Some(path),
        })
    }

    /// Create a store with no file persistence.
    pub fn in_memory() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            path: None,
        }
    }

    /// Rewrite the persistence file from the given snapshot.
    fn persist(&self, records: &HashMap<String, StringRecord>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut snapshot: Vec<&StringRecord> = records.values().collect();
        snapshot.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let content =
            serde_json::to_string(&snapshot).map_err(|e| StoreError::Persistence(e.to_string()))?;
        std::fs::write(path, content).map_err(StoreError::Io)?;
        Ok(())
    }
}

#[async_trait]
impl StringStore for EmbeddedStore {
    async fn insert(&self, record: StringRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id).into());
        }
        records.insert(record.id.clone(), record);
        self.persist(&records)
    }

    async fn get(&self, hash: &str) -> Result<Option<StringRecord>> {
        let records = self.records.read().await;
        Ok(records.get(hash).cloned())
    }

    async fn list(&self, filters: &StringFilters) -> Result<Vec<StringRecord>> {
        let records = self.records.read().await;
        let mut matching: Vec<StringRecord> = records
            .values()
            .filter(|record| record_matches(record, filters))
            .cloned()
            .collect();
        // Stable listing order: ingestion time, then id.
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(matching)
    }

    async fn remove(&self, hash: &str) -> Result<Option<StringRecord>> {
        let mut records = self.records.write().await;
        let removed = records.remove(hash);
        if removed.is_some() {
            self.persist(&records)?;
        }
        Ok(removed)
    }

    async fn stats(&self) -> Result<StoreStats> {
        let records = self.records.read().await;
        Ok(StoreStats {
            string_count: records.len(),
            palindrome_count: records.values().filter(|r| r.is_palindrome).count(),
        })
    }
}
