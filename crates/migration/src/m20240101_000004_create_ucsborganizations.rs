//! Create `ucsborganizations` table.
//!
//! The only table with a natural key: `org_code` is supplied by the caller.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UcsbOrganizations::Table)
                    .if_not_exists()
                    .col(string_len(UcsbOrganizations::OrgCode, 64).primary_key())
                    .col(string(UcsbOrganizations::OrgTranslationShort).not_null())
                    .col(string(UcsbOrganizations::OrgTranslation).not_null())
                    .col(boolean(UcsbOrganizations::Inactive).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UcsbOrganizations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UcsbOrganizations {
    #[sea_orm(iden = "ucsborganizations")]
    Table,
    OrgCode,
    OrgTranslationShort,
    OrgTranslation,
    Inactive,
}
