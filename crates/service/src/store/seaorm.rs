use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use crate::errors::ServiceError;
use crate::resource::Resource;

use super::RecordStore;

/// Store backed by one SeaORM entity.
pub struct SeaOrmStore<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmStore<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait]
impl<E> RecordStore<E::Model> for SeaOrmStore<E>
where
    E: EntityTrait,
    E::Model: Resource + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    <E::Model as Resource>::Key: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        let mut query = E::find();
        for pk in E::PrimaryKey::iter() {
            query = query.order_by_asc(pk.into_column());
        }
        Ok(query.all(&self.db).await?)
    }

    async fn find_by_key(&self, key: &<E::Model as Resource>::Key) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(key.clone()).one(&self.db).await?)
    }

    async fn insert(&self, record: E::Model) -> Result<E::Model, ServiceError> {
        let mut am = record.into_active_model().reset_all();
        if <E::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
            for pk in E::PrimaryKey::iter() {
                am.not_set(pk.into_column());
            }
        }
        let saved = am.insert(&self.db).await?;
        tracing::debug!(entity = <E::Model as Resource>::NAME, key = %saved.key(), "row inserted");
        Ok(saved)
    }

    async fn save(&self, record: E::Model) -> Result<E::Model, ServiceError> {
        Ok(record.into_active_model().reset_all().update(&self.db).await?)
    }

    async fn delete(&self, key: &<E::Model as Resource>::Key) -> Result<(), ServiceError> {
        let res = E::delete_by_id(key.clone()).exec(&self.db).await?;
        tracing::debug!(entity = <E::Model as Resource>::NAME, key = %key, rows = res.rows_affected, "row deleted");
        Ok(())
    }
}
