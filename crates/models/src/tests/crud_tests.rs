use anyhow::Result;
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet, Set};
use uuid::Uuid;

use crate::db::connect;
use crate::{menu_item_review, ucsb_organization};

/// Connect and migrate, or `None` when no database is configured for tests.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_menu_item_review_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()); };

    let am = menu_item_review::ActiveModel {
        id: NotSet,
        item_id: Set(47),
        reviewer_email: Set("cgaucho@ucsb.edu".into()),
        stars: Set(5),
        comments: Set("I love the apple pie".into()),
        date_reviewed: Set(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap().and_hms_opt(0, 0, 0).unwrap()),
    };
    let created = am.insert(&db).await?;
    assert!(created.id > 0);

    let found = menu_item_review::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut edited = created.clone();
    edited.stars = 2;
    edited.comments = "too sweet".into();
    let updated = edited.clone().into_active_model().reset_all().update(&db).await?;
    assert_eq!(updated, edited);

    menu_item_review::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = menu_item_review::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn test_organization_duplicate_code_rejected() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()); };

    let code = format!("org_{}", &Uuid::new_v4().simple().to_string()[..12]);
    let org = ucsb_organization::Model {
        org_code: code.clone(),
        org_translation_short: "Short".into(),
        org_translation: "Long Name".into(),
        inactive: false,
    };
    org.clone().into_active_model().reset_all().insert(&db).await?;
    let dup = org.clone().into_active_model().reset_all().insert(&db).await;
    assert!(dup.is_err());

    ucsb_organization::Entity::delete_by_id(code).exec(&db).await?;
    Ok(())
}
