use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::resource::{RecordKey, Resource};

use super::RecordStore;

struct Rows<R: Resource> {
    map: BTreeMap<R::Key, R>,
    seq: i64,
}

/// Process-local store keyed in ascending key order.
///
/// Generated keys start at 1 and are never reused, even after a delete.
pub struct MemoryStore<R: Resource> {
    rows: RwLock<Rows<R>>,
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self { rows: RwLock::new(Rows { map: BTreeMap::new(), seq: 0 }) }
    }
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<R: Resource> RecordStore<R> for MemoryStore<R> {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.map.values().cloned().collect())
    }

    async fn find_by_key(&self, key: &R::Key) -> Result<Option<R>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.map.get(key).cloned())
    }

    async fn insert(&self, mut record: R) -> Result<R, ServiceError> {
        let mut rows = self.rows.write().await;
        if let Some(key) = R::Key::generate(rows.seq + 1) {
            rows.seq += 1;
            record.set_key(key);
        }
        let key = record.key();
        if rows.map.contains_key(&key) {
            return Err(ServiceError::Store(format!("duplicate key {key} for {}", R::NAME)));
        }
        rows.map.insert(key, record.clone());
        Ok(record)
    }

    async fn save(&self, record: R) -> Result<R, ServiceError> {
        let mut rows = self.rows.write().await;
        match rows.map.get_mut(&record.key()) {
            Some(stored) => {
                *stored = record.clone();
                Ok(record)
            }
            None => Err(ServiceError::Store(format!("no {} stored under key {}", R::NAME, record.key()))),
        }
    }

    async fn delete(&self, key: &R::Key) -> Result<(), ServiceError> {
        let mut rows = self.rows.write().await;
        rows.map.remove(key);
        Ok(())
    }
}
