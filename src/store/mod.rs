//! Record store for strings and their precomputed properties.
//!
//! The store is addressed by the string's SHA-256 hash and exposed behind the
//! [`StringStore`] trait; the embedded backend keeps records in memory and
//! persists them as a JSON file under the configured data directory.

mod embedded;
mod traits;

pub use embedded::EmbeddedStore;
pub use traits::*;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;

/// Create a store backend from configuration.
pub fn create_store(config: &Config) -> Result<Arc<dyn StringStore>> {
    let data_dir = config.data_dir();
    let store = EmbeddedStore::open(&data_dir)?;
    Ok(Arc::new(store))
}
