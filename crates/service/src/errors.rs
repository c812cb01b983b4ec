use thiserror::Error;

use crate::resource::Resource;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {key} not found")]
    NotFound { entity: &'static str, key: String },
    #[error("forbidden")]
    Forbidden,
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found<R: Resource>(key: &R::Key) -> Self {
        Self::NotFound { entity: R::NAME, key: key.to_string() }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Store(e.to_string())
    }
}
