//! One generic handler set, instantiated per record type by `resource_routes`.

use std::collections::HashMap;

use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use service::auth::Capability;
use service::{CrudService, Resource, ServiceError};

use super::auth::Caller;
use crate::errors::ApiError;

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// `<base>/all`, `<base>/post` and `<base>` for one record type.
pub fn resource_routes<R: Resource>(svc: CrudService<R>) -> Router {
    Router::new()
        .route(&format!("{}/all", R::PATH), get(list::<R>))
        .route(&format!("{}/post", R::PATH), post(create::<R>))
        .route(R::PATH, get(get_one::<R>).put(update::<R>).delete(remove::<R>))
        .with_state(svc)
}

fn key_param<R: Resource>(
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    name: &str,
) -> Result<R::Key, ServiceError> {
    let Query(params) = query.map_err(|e| ServiceError::Malformed(e.body_text()))?;
    let raw = params
        .get(name)
        .ok_or_else(|| ServiceError::Malformed(format!("missing query parameter '{name}'")))?;
    raw.parse::<R::Key>()
        .map_err(|_| ServiceError::Malformed(format!("invalid value '{raw}' for query parameter '{name}'")))
}

/// List every record.
pub async fn list<R: Resource>(
    Caller(caller): Caller,
    State(svc): State<CrudService<R>>,
) -> Result<Json<Vec<R>>, ApiError> {
    caller.require(Capability::User)?;
    Ok(Json(svc.list().await?))
}

/// Get one record by the key in `R::GET_PARAM`.
pub async fn get_one<R: Resource>(
    Caller(caller): Caller,
    State(svc): State<CrudService<R>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<R>, ApiError> {
    caller.require(Capability::User)?;
    let key = key_param::<R>(query, R::GET_PARAM)?;
    Ok(Json(svc.get(&key).await?))
}

/// Create a record from query parameters.
pub async fn create<R: Resource>(
    Caller(caller): Caller,
    State(svc): State<CrudService<R>>,
    params: Result<Query<R::Params>, QueryRejection>,
) -> Result<Json<R>, ApiError> {
    caller.require(Capability::Admin)?;
    let Query(params) = params.map_err(|e| ServiceError::Malformed(e.body_text()))?;
    Ok(Json(svc.create(params).await?))
}

/// Overwrite the record at `?id=` with the JSON body.
pub async fn update<R: Resource>(
    Caller(caller): Caller,
    State(svc): State<CrudService<R>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, ApiError> {
    caller.require(Capability::Admin)?;
    let key = key_param::<R>(query, "id")?;
    let Json(incoming) = body.map_err(|e| ServiceError::Malformed(e.body_text()))?;
    Ok(Json(svc.update(&key, incoming).await?))
}

/// Delete the record at `?id=`.
pub async fn remove<R: Resource>(
    Caller(caller): Caller,
    State(svc): State<CrudService<R>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    caller.require(Capability::Admin)?;
    let key = key_param::<R>(query, "id")?;
    let message = svc.delete(&key).await?;
    Ok(Json(Message { message }))
}
