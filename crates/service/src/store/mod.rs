//! Persistence gateway for record types.
//!
//! One `RecordStore` instance serves one record type. `insert` and `save`
//! together cover insert-or-replace: the CRUD layer calls `insert` for new
//! records and `save` for records it has already seen.

pub mod memory;
pub mod seaorm;

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::resource::Resource;

pub use memory::MemoryStore;
pub use seaorm::SeaOrmStore;

#[async_trait]
pub trait RecordStore<R: Resource>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError>;
    async fn find_by_key(&self, key: &R::Key) -> Result<Option<R>, ServiceError>;
    /// Persist a new record, assigning its key when the store generates keys.
    async fn insert(&self, record: R) -> Result<R, ServiceError>;
    /// Overwrite every field of the record stored under `record.key()`.
    /// Fails with a store error when nothing is stored under that key.
    async fn save(&self, record: R) -> Result<R, ServiceError>;
    async fn delete(&self, key: &R::Key) -> Result<(), ServiceError>;
}
