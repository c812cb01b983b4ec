//! Migrator registering one table per record type.
//! The tables are independent; order only matters for readability.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_articles;
mod m20240101_000002_create_menuitemreviews;
mod m20240101_000003_create_recommendationrequest;
mod m20240101_000004_create_ucsborganizations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_articles::Migration),
            Box::new(m20240101_000002_create_menuitemreviews::Migration),
            Box::new(m20240101_000003_create_recommendationrequest::Migration),
            Box::new(m20240101_000004_create_ucsborganizations::Migration),
        ]
    }
}
