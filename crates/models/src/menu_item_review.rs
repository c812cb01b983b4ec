use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A star review of a dining-commons menu item.
///
/// `item_id` is a plain number; nothing checks that the item exists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menuitemreviews")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_reviewed: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
