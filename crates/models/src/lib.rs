//! SeaORM entities for the four record tables, plus connection helpers.
//!
//! Each model doubles as the JSON shape of its record: field names are
//! serialized in camelCase and timestamps as ISO-8601 local date-times.
//! Seconds are optional on input, see [`timestamp`].

pub mod db;
pub mod timestamp;
pub mod articles;
pub mod menu_item_review;
pub mod recommendation_request;
pub mod ucsb_organization;

#[cfg(test)]
mod tests;
