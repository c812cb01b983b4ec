use std::sync::Arc;

use models::{articles, menu_item_review, recommendation_request, ucsb_organization};
use sea_orm::DatabaseConnection;
use service::auth::TokenCodec;
use service::store::SeaOrmStore;
use service::CrudService;

/// Everything the router needs: one CRUD service per record type plus the token codec.
#[derive(Clone)]
pub struct AppState {
    pub articles: CrudService<articles::Model>,
    pub menu_item_reviews: CrudService<menu_item_review::Model>,
    pub recommendation_requests: CrudService<recommendation_request::Model>,
    pub organizations: CrudService<ucsb_organization::Model>,
    pub tokens: TokenCodec,
}

impl AppState {
    pub fn seaorm(db: DatabaseConnection, tokens: TokenCodec) -> Self {
        Self {
            articles: CrudService::new(Arc::new(SeaOrmStore::<articles::Entity>::new(db.clone()))),
            menu_item_reviews: CrudService::new(Arc::new(SeaOrmStore::<menu_item_review::Entity>::new(db.clone()))),
            recommendation_requests: CrudService::new(Arc::new(SeaOrmStore::<recommendation_request::Entity>::new(
                db.clone(),
            ))),
            organizations: CrudService::new(Arc::new(SeaOrmStore::<ucsb_organization::Entity>::new(db))),
            tokens,
        }
    }

    pub fn in_memory(tokens: TokenCodec) -> Self {
        Self {
            articles: CrudService::in_memory(),
            menu_item_reviews: CrudService::in_memory(),
            recommendation_requests: CrudService::in_memory(),
            organizations: CrudService::in_memory(),
            tokens,
        }
    }
}
