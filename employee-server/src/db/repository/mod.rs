//! Repository Module
//!
//! Employee persistence behind the [`EmployeeStore`] trait. Two backends:
//! embedded SurrealDB ([`SurrealStore`]) and an in-process map ([`MemoryStore`]).

pub mod memory;
pub mod surreal;

pub use memory::MemoryStore;
pub use surreal::SurrealStore;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeFields, EmployeeId};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt record {id}: {reason}")]
    Corrupt { id: String, reason: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Employee persistence
///
/// Every call is one round trip to the backend. Identity is assigned by the
/// store on `create`; `update` overwrites all fields of an existing record.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, ordered by name then id
    async fn find_all(&self) -> StoreResult<Vec<Employee>>;

    async fn find_by_id(&self, id: &EmployeeId) -> StoreResult<Option<Employee>>;

    /// Persist a new record under a freshly generated id
    async fn create(&self, fields: EmployeeFields) -> StoreResult<Employee>;

    /// Overwrite an existing record. `Ok(None)` when the id is unknown.
    async fn update(&self, id: &EmployeeId, fields: EmployeeFields)
    -> StoreResult<Option<Employee>>;

    /// Remove a record. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: &EmployeeId) -> StoreResult<bool>;

    /// Backend reachability check
    async fn ping(&self) -> StoreResult<()>;

    /// Backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Release backend resources; called once at shutdown
    async fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Stable listing order shared by all backends
pub(crate) fn sort_employees(employees: &mut [Employee]) {
    employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}
