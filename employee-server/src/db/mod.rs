//! Database Module
//!
//! Opens the configured employee store backend.

pub mod repository;

pub use repository::{EmployeeStore, MemoryStore, StoreError, StoreResult, SurrealStore};

use std::sync::Arc;

use crate::core::{Config, StoreBackend};

/// Open the store selected by `STORE_BACKEND`
pub async fn connect(config: &Config) -> StoreResult<Arc<dyn EmployeeStore>> {
    let store: Arc<dyn EmployeeStore> = match config.store_backend {
        StoreBackend::RocksDb => Arc::new(
            SurrealStore::open(&config.db_path, &config.db_namespace, &config.db_name).await?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, records are lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    store.ping().await?;
    tracing::info!(backend = store.backend(), "Employee store ready");
    Ok(store)
}
