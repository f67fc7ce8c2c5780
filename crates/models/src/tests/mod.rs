use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::db::connect;
use crate::{banner_package, holland_question, job, job_package, site_setting};

/// Connect and migrate, or `None` when the database tests are disabled or unreachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = connect().await.ok()?;
    migration::Migrator::up(&db, None).await.ok()?;
    Some(db)
}

#[tokio::test]
async fn job_arrays_round_trip() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let now = Utc::now();
    let id = Uuid::new_v4();
    let slug = format!("rust-dev-{id}");
    job::ActiveModel {
        id: Set(id),
        title: Set("Rust dev".into()),
        slug: Set(slug.clone()),
        description: Set(None),
        requirements: Set(None),
        benefits: Set(None),
        quantity: Set(Some(2)),
        salary_min: Set(Some(1000)),
        salary_max: Set(Some(2000)),
        salary_type: Set(None),
        salary_negotiable: Set(false),
        career: Set(None),
        category_id: Set(None),
        level: Set(None),
        job_type: Set(Some("full-time".into())),
        location: Set(None),
        address: Set(None),
        deadline: Set(None),
        is_active: Set(true),
        status: Set("active".into()),
        reason_reject: Set(None),
        views: Set(0),
        skills: Set(vec!["rust".into(), "sql".into()]),
        tags: Set(vec![]),
        images: Set(vec![]),
        recruiter_id: Set(None),
        deleted: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let found = job::Entity::find().filter(job::Column::Slug.eq(slug)).one(&db).await?;
    let found = found.expect("job inserted");
    assert_eq!(found.skills, vec!["rust", "sql"]);
    job::Entity::delete_by_id(id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn json_columns_round_trip() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let now = Utc::now();
    let features = job_package::Features { job_post_limit: 3, highlight: true, ..Default::default() };
    let pkg = job_package::ActiveModel {
        id: Set(Uuid::new_v4()),
        package_name: Set("Basic".into()),
        price: Set(100_000),
        duration_days: Set(30),
        features: Set(features.clone()),
        priority_level: Set(1),
        is_active: Set(true),
        deleted: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;
    assert_eq!(pkg.features, features);

    let q = holland_question::ActiveModel {
        id: Set(Uuid::new_v4()),
        order: Set(1),
        content: Set("Sửa chữa máy móc".into()),
        category: Set(holland_question::HollandCategory::R),
        options: Set(holland_question::Options::default()),
        deleted: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;
    let back = holland_question::Entity::find_by_id(q.id).one(&db).await?.expect("question inserted");
    assert_eq!(back.options.0.len(), 5);
    assert_eq!(back.category, holland_question::HollandCategory::R);

    job_package::Entity::delete_by_id(pkg.id).exec(&db).await?;
    holland_question::Entity::delete_by_id(q.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn banner_position_is_stored_as_text() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let now = Utc::now();
    let pkg = banner_package::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Top".into()),
        description: Set(None),
        position: Set(banner_package::BannerPosition::BelowSearchBar),
        preview_image: Set(None),
        duration_days: Set(7),
        price: Set(500),
        max_banner_slots: Set(3),
        priority: Set(0),
        is_active: Set(true),
        deleted: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;
    let found = banner_package::Entity::find()
        .filter(banner_package::Column::Position.eq(banner_package::BannerPosition::BelowSearchBar))
        .filter(banner_package::Column::Id.eq(pkg.id))
        .one(&db)
        .await?;
    assert!(found.is_some());
    banner_package::Entity::delete_by_id(pkg.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn site_setting_singleton_defaults() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let row = site_setting::Entity::find_by_id(site_setting::SINGLETON_ID).one(&db).await?;
    let settings = row.unwrap_or_default();
    assert_eq!(settings.id, site_setting::SINGLETON_ID);
    Ok(())
}
