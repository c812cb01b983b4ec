use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recommendationrequest")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    #[sea_orm(column_type = "Text")]
    pub explanation: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_requested: DateTime,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_needed: DateTime,
    pub done: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
