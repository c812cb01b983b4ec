use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod auth;
pub mod crud;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health plus the CRUD surface of every record type.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new().route("/health", get(health));

    let records = Router::new()
        .merge(crud::resource_routes(state.articles))
        .merge(crud::resource_routes(state.menu_item_reviews))
        .merge(crud::resource_routes(state.recommendation_requests))
        .merge(crud::resource_routes(state.organizations));

    public
        .merge(records)
        .layer(middleware::from_fn_with_state(state.tokens, auth::resolve_principal))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
