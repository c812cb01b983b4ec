//! Service layer: the uniform CRUD contract shared by every record type.
//! - `resource` describes a record (name, path, key type, create parameters).
//! - `store` is the persistence gateway, with SeaORM and in-memory backends.
//! - `crud` applies the not-found policy on top of a store.
//! - `auth` carries the caller's capabilities and the bearer-token codec.

pub mod errors;
pub mod resource;
pub mod resources;
pub mod store;
pub mod crud;
pub mod auth;

pub use crud::CrudService;
pub use errors::ServiceError;
pub use resource::{RecordKey, Resource};
