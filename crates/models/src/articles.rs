use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A submitted article link.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub url: String,
    #[sea_orm(column_type = "Text")]
    pub explanation: String,
    /// Submitter email.
    pub email: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_added: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
