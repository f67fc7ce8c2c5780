use async_trait::async_trait;
use models::cv_sample;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::CvSampleFilter;
use crate::errors::ServiceError;
use crate::pagination::{fetch_page, Page, Pagination};

#[async_trait]
pub trait CvSampleRepository: Send + Sync {
    async fn list(&self, filter: &CvSampleFilter) -> Result<Page<cv_sample::Model>, ServiceError>;
    /// Active and not deleted, newest first.
    async fn list_active(&self) -> Result<Vec<cv_sample::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<cv_sample::Model>, ServiceError>;
    async fn insert(&self, model: cv_sample::Model) -> Result<cv_sample::Model, ServiceError>;
    async fn update(&self, model: cv_sample::Model) -> Result<cv_sample::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn hard_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCvSampleRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CvSampleRepository for SeaOrmCvSampleRepository {
    async fn list(&self, filter: &CvSampleFilter) -> Result<Page<cv_sample::Model>, ServiceError> {
        let mut q = cv_sample::Entity::find().filter(cv_sample::Column::IsDeleted.eq(false));
        if let Some(active) = filter.is_active {
            q = q.filter(cv_sample::Column::IsActive.eq(active));
        }
        let q = q.order_by_desc(cv_sample::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn list_active(&self) -> Result<Vec<cv_sample::Model>, ServiceError> {
        Ok(cv_sample::Entity::find()
            .filter(cv_sample::Column::IsDeleted.eq(false))
            .filter(cv_sample::Column::IsActive.eq(true))
            .order_by_desc(cv_sample::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<cv_sample::Model>, ServiceError> {
        Ok(cv_sample::Entity::find_by_id(id).filter(cv_sample::Column::IsDeleted.eq(false)).one(&self.db).await?)
    }

    async fn insert(&self, model: cv_sample::Model) -> Result<cv_sample::Model, ServiceError> {
        Ok(cv_sample::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: cv_sample::Model) -> Result<cv_sample::Model, ServiceError> {
        Ok(cv_sample::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = cv_sample::Entity::update_many()
            .col_expr(cv_sample::Column::IsDeleted, Expr::value(true))
            .filter(cv_sample::Column::Id.eq(id))
            .filter(cv_sample::Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn hard_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(cv_sample::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCvSampleRepository {
        rows: Mutex<Vec<cv_sample::Model>>,
    }

    #[async_trait]
    impl CvSampleRepository for MockCvSampleRepository {
        async fn list(&self, filter: &CvSampleFilter) -> Result<Page<cv_sample::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|c| !c.is_deleted)
                .filter(|c| filter.is_active.map_or(true, |a| c.is_active == a))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn list_active(&self) -> Result<Vec<cv_sample::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().rev().filter(|c| c.is_active && !c.is_deleted).cloned().collect())
        }

        async fn find(&self, id: Uuid) -> Result<Option<cv_sample::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id && !c.is_deleted).cloned())
        }

        async fn insert(&self, model: cv_sample::Model) -> Result<cv_sample::Model, ServiceError> {
            self.rows.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: cv_sample::Model) -> Result<cv_sample::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|c| c.id == model.id).ok_or_else(|| ServiceError::not_found("cv sample"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|c| c.id == id && !c.is_deleted) {
                Some(c) => {
                    c.is_deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn hard_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.id != id);
            Ok(rows.len() != before)
        }
    }
}
