//! Create `recommendationrequest` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecommendationRequest::Table)
                    .if_not_exists()
                    .col(big_integer(RecommendationRequest::Id).auto_increment().primary_key())
                    .col(string(RecommendationRequest::RequesterEmail).not_null())
                    .col(string(RecommendationRequest::ProfessorEmail).not_null())
                    .col(text(RecommendationRequest::Explanation).not_null())
                    .col(timestamp(RecommendationRequest::DateRequested).not_null())
                    .col(timestamp(RecommendationRequest::DateNeeded).not_null())
                    .col(boolean(RecommendationRequest::Done).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RecommendationRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RecommendationRequest {
    #[sea_orm(iden = "recommendationrequest")]
    Table,
    Id,
    RequesterEmail,
    ProfessorEmail,
    Explanation,
    DateRequested,
    DateNeeded,
    Done,
}
