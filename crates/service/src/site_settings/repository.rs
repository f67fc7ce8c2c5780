use async_trait::async_trait;
use models::site_setting::{self, SINGLETON_ID};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;

#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    async fn load(&self) -> Result<Option<site_setting::Model>, ServiceError>;
    /// Insert or overwrite the singleton row.
    async fn save(&self, model: site_setting::Model) -> Result<site_setting::Model, ServiceError>;
}

pub struct SeaOrmSiteSettingsRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SiteSettingsRepository for SeaOrmSiteSettingsRepository {
    async fn load(&self) -> Result<Option<site_setting::Model>, ServiceError> {
        Ok(site_setting::Entity::find_by_id(SINGLETON_ID).one(&self.db).await?)
    }

    async fn save(&self, mut model: site_setting::Model) -> Result<site_setting::Model, ServiceError> {
        use site_setting::Column::*;
        model.id = SINGLETON_ID;
        site_setting::Entity::insert(site_setting::ActiveModel::from(model.clone()).reset_all())
            .on_conflict(
                OnConflict::column(Id)
                    .update_columns([
                        LogoUrl,
                        FaviconUrl,
                        ClientTitle,
                        RecruiterTitle,
                        NoticeEnabled,
                        NoticeMessage,
                        NoticeColor,
                        UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;
        Ok(model)
    }
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockSiteSettingsRepository {
        row: Mutex<Option<site_setting::Model>>,
    }

    #[async_trait]
    impl SiteSettingsRepository for MockSiteSettingsRepository {
        async fn load(&self) -> Result<Option<site_setting::Model>, ServiceError> { Ok(self.row.lock().unwrap().clone()) }

        async fn save(&self, model: site_setting::Model) -> Result<site_setting::Model, ServiceError> {
            *self.row.lock().unwrap() = Some(model.clone());
            Ok(model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn save_upserts_the_singleton() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmSiteSettingsRepository { db };
        let first = site_setting::Model { client_title: Some("A".into()), ..Default::default() };
        repo.save(first).await?;
        let second = site_setting::Model { client_title: Some("B".into()), notice_enabled: true, ..Default::default() };
        repo.save(second).await?;
        let stored = repo.load().await?.expect("row stored");
        assert_eq!(stored.client_title.as_deref(), Some("B"));
        assert!(stored.notice_enabled);
        Ok(())
    }
}
