use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::resource::Resource;
use crate::store::{MemoryStore, RecordStore};

/// List/get/create/update/delete for one record type, independent of the web framework.
///
/// Get, update and delete on a key that is not stored fail with
/// [`ServiceError::NotFound`].
pub struct CrudService<R: Resource> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Resource> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<R: Resource> CrudService<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    /// Service over a fresh process-local [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::<R>::new()))
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        self.store.find_all().await
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn get(&self, key: &R::Key) -> Result<R, ServiceError> {
        self.store
            .find_by_key(key)
            .await?
            .ok_or_else(|| ServiceError::not_found::<R>(key))
    }

    /// Build a record from create parameters and persist it.
    ///
    /// # Examples
    /// ```
    /// use service::{CrudService, resources::MenuItemReviewParams};
    /// use models::menu_item_review;
    ///
    /// let svc = CrudService::<menu_item_review::Model>::in_memory();
    /// let params = MenuItemReviewParams {
    ///     item_id: 27,
    ///     reviewer_email: "cgaucho@ucsb.edu".into(),
    ///     stars: 3,
    ///     comments: "bland af".into(),
    ///     date_reviewed: "2022-01-03T00:00:00".parse().unwrap(),
    /// };
    /// let created = tokio_test::block_on(svc.create(params)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(tokio_test::block_on(svc.get(&1)).unwrap(), created);
    /// ```
    #[instrument(skip(self, params), fields(entity = R::NAME))]
    pub async fn create(&self, params: R::Params) -> Result<R, ServiceError> {
        let record = self.store.insert(R::from_params(params)).await?;
        info!(key = %record.key(), "record_created");
        Ok(record)
    }

    /// Overwrite every non-key field of the record stored under `key`.
    ///
    /// The key carried by `incoming` is ignored; records are never re-keyed.
    #[instrument(skip(self, incoming), fields(entity = R::NAME))]
    pub async fn update(&self, key: &R::Key, mut incoming: R) -> Result<R, ServiceError> {
        self.get(key).await?;
        incoming.set_key(key.clone());
        let saved = self.store.save(incoming).await?;
        info!(key = %key, "record_updated");
        Ok(saved)
    }

    /// Remove the record stored under `key`, returning the confirmation message.
    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn delete(&self, key: &R::Key) -> Result<String, ServiceError> {
        self.get(key).await?;
        self.store.delete(key).await?;
        info!(key = %key, "record_deleted");
        Ok(format!("{} with id {} deleted", R::NAME, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{ArticleParams, MenuItemReviewParams, OrganizationParams};
    use chrono::NaiveDateTime;
    use models::{articles, menu_item_review, ucsb_organization};

    type MenuItemReview = menu_item_review::Model;

    fn ts(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn reviews() -> CrudService<menu_item_review::Model> {
        CrudService::in_memory()
    }

    fn review_params(stars: i32) -> MenuItemReviewParams {
        MenuItemReviewParams {
            item_id: 27,
            reviewer_email: "cgaucho@ucsb.edu".into(),
            stars,
            comments: "bland af".into(),
            date_reviewed: ts("2022-01-03T00:00:00"),
        }
    }

    #[tokio::test]
    async fn missing_key_is_not_found_everywhere() {
        let svc = reviews();
        let msg = "MenuItemReview with id 7 not found";

        assert_eq!(svc.get(&7).await.unwrap_err().to_string(), msg);
        let incoming = MenuItemReview::from_params(review_params(1));
        assert_eq!(svc.update(&7, incoming).await.unwrap_err().to_string(), msg);
        assert_eq!(svc.delete(&7).await.unwrap_err().to_string(), msg);
    }

    #[tokio::test]
    async fn create_then_get() -> anyhow::Result<()> {
        let svc = reviews();
        let created = svc.create(review_params(3)).await?;
        assert_eq!(svc.get(&created.id).await?, created);
        assert_eq!(svc.list().await?, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn update_pins_query_key() -> anyhow::Result<()> {
        let svc = reviews();
        let created = svc.create(review_params(3)).await?;

        let mut incoming = MenuItemReview::from_params(review_params(5));
        incoming.id = 99;
        incoming.comments = "actually great".into();
        let saved = svc.update(&created.id, incoming).await?;

        assert_eq!(saved.id, created.id);
        assert_eq!(svc.get(&created.id).await?, saved);
        assert!(matches!(svc.get(&99).await, Err(ServiceError::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> anyhow::Result<()> {
        let svc = CrudService::<articles::Model>::in_memory();
        let a = svc
            .create(ArticleParams {
                title: "Rust".into(),
                url: "https://rust-lang.org".into(),
                explanation: "language".into(),
                email: "a@ucsb.edu".into(),
                date_added: ts("2022-04-20T12:00:00"),
            })
            .await?;
        assert_eq!(svc.delete(&a.id).await?, format!("Article with id {} deleted", a.id));
        assert_eq!(svc.get(&a.id).await.unwrap_err().to_string(), format!("Article with id {} not found", a.id));
        Ok(())
    }

    #[tokio::test]
    async fn organization_code_never_changes() -> anyhow::Result<()> {
        let svc = CrudService::<ucsb_organization::Model>::in_memory();
        svc.create(OrganizationParams {
            org_code: "ZPR".into(),
            org_translation_short: "ZETA PHI RHO".into(),
            org_translation: "ZETA PHI RHO".into(),
            inactive: false,
        })
        .await?;

        let incoming = ucsb_organization::Model {
            org_code: "SKY".into(),
            org_translation_short: "SKYDIVING CLUB".into(),
            org_translation: "SKYDIVING CLUB AT UCSB".into(),
            inactive: true,
        };
        let saved = svc.update(&"ZPR".to_string(), incoming).await?;
        assert_eq!(saved.org_code, "ZPR");
        assert!(saved.inactive);
        assert_eq!(svc.list().await?.len(), 1);
        assert_eq!(
            svc.get(&"SKY".to_string()).await.unwrap_err().to_string(),
            "UCSBOrganization with id SKY not found"
        );
        Ok(())
    }
}
