use async_trait::async_trait;
use models::recruiter;
use models::status::status_filter;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::RecruiterFilter;
use crate::errors::ServiceError;
use crate::filters::{ilike, search_term};
use crate::pagination::{fetch_page, Page, Pagination};

#[async_trait]
pub trait RecruiterRepository: Send + Sync {
    async fn list(&self, filter: &RecruiterFilter) -> Result<Page<recruiter::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<recruiter::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<recruiter::Model>, ServiceError>;
    async fn insert(&self, model: recruiter::Model) -> Result<recruiter::Model, ServiceError>;
    async fn update(&self, model: recruiter::Model) -> Result<recruiter::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRecruiterRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RecruiterRepository for SeaOrmRecruiterRepository {
    async fn list(&self, filter: &RecruiterFilter) -> Result<Page<recruiter::Model>, ServiceError> {
        let mut q = recruiter::Entity::find().filter(recruiter::Column::Deleted.eq(false));
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(recruiter::Column::FullName, &term));
        }
        if let Some(s) = status_filter(filter.status.as_deref()) {
            q = q.filter(recruiter::Column::Status.eq(s.as_str()));
        }
        let q = q.order_by_desc(recruiter::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<recruiter::Model>, ServiceError> {
        Ok(recruiter::Entity::find_by_id(id).filter(recruiter::Column::Deleted.eq(false)).one(&self.db).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<recruiter::Model>, ServiceError> {
        Ok(recruiter::Entity::find().filter(recruiter::Column::Email.eq(email)).one(&self.db).await?)
    }

    async fn insert(&self, model: recruiter::Model) -> Result<recruiter::Model, ServiceError> {
        Ok(recruiter::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: recruiter::Model) -> Result<recruiter::Model, ServiceError> {
        Ok(recruiter::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = recruiter::Entity::update_many()
            .col_expr(recruiter::Column::Deleted, Expr::value(true))
            .filter(recruiter::Column::Id.eq(id))
            .filter(recruiter::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use crate::filters::{contains_ci, status_matches};
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockRecruiterRepository {
        rows: Mutex<Vec<recruiter::Model>>,
    }

    #[async_trait]
    impl RecruiterRepository for MockRecruiterRepository {
        async fn list(&self, filter: &RecruiterFilter) -> Result<Page<recruiter::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let status = status_filter(filter.status.as_deref());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|r| !r.deleted)
                .filter(|r| term.as_deref().map_or(true, |t| contains_ci(&r.full_name, t)))
                .filter(|r| status_matches(&r.status, status))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn find(&self, id: Uuid) -> Result<Option<recruiter::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id && !r.deleted).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<recruiter::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.email == email).cloned())
        }

        async fn insert(&self, model: recruiter::Model) -> Result<recruiter::Model, ServiceError> {
            self.rows.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: recruiter::Model) -> Result<recruiter::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|r| r.id == model.id).ok_or_else(|| ServiceError::not_found("recruiter"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|r| r.id == id && !r.deleted) {
                Some(r) => {
                    r.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
