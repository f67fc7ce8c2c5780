use async_trait::async_trait;
use models::job;
use models::status::{status_filter, RecordStatus};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use super::domain::{JobFilter, PublicJobFilter};
use crate::errors::ServiceError;
use crate::filters::{ilike, search_term};
use crate::pagination::{fetch_page, Page, Pagination};
use crate::slug::SlugProbe;

#[async_trait]
pub trait JobRepository: SlugProbe {
    async fn list(&self, filter: &JobFilter) -> Result<Page<job::Model>, ServiceError>;
    /// Active, non-deleted jobs only.
    async fn list_public(&self, filter: &PublicJobFilter) -> Result<Page<job::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<job::Model>, ServiceError>;
    async fn find_public_by_slug(&self, slug: &str) -> Result<Option<job::Model>, ServiceError>;
    async fn insert(&self, model: job::Model) -> Result<job::Model, ServiceError>;
    async fn update(&self, model: job::Model) -> Result<job::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn increment_views(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmJobRepository {
    pub db: DatabaseConnection,
}

fn public_jobs() -> Select<job::Entity> {
    job::Entity::find()
        .filter(job::Column::Deleted.eq(false))
        .filter(job::Column::Status.eq(RecordStatus::Active.as_str()))
}

#[async_trait]
impl SlugProbe for SeaOrmJobRepository {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
        let mut q = job::Entity::find().filter(job::Column::Slug.eq(slug));
        if let Some(id) = exclude {
            q = q.filter(job::Column::Id.ne(id));
        }
        Ok(q.count(&self.db).await? > 0)
    }
}

#[async_trait]
impl JobRepository for SeaOrmJobRepository {
    async fn list(&self, filter: &JobFilter) -> Result<Page<job::Model>, ServiceError> {
        let mut q = job::Entity::find().filter(job::Column::Deleted.eq(false));
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(job::Column::Title, &term));
        }
        if let Some(s) = status_filter(filter.status.as_deref()) {
            q = q.filter(job::Column::Status.eq(s.as_str()));
        }
        if let Some(t) = search_term(filter.job_type.as_deref()) {
            q = q.filter(job::Column::JobType.eq(t));
        }
        if let Some(c) = filter.category_id {
            q = q.filter(job::Column::CategoryId.eq(c));
        }
        if let Some(r) = filter.recruiter_id {
            q = q.filter(job::Column::RecruiterId.eq(r));
        }
        let q = q.order_by_desc(job::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn list_public(&self, filter: &PublicJobFilter) -> Result<Page<job::Model>, ServiceError> {
        let mut q = public_jobs();
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(job::Column::Title, &term));
        }
        if let Some(c) = filter.category_id {
            q = q.filter(job::Column::CategoryId.eq(c));
        }
        let q = q.order_by_desc(job::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<job::Model>, ServiceError> {
        Ok(job::Entity::find_by_id(id).filter(job::Column::Deleted.eq(false)).one(&self.db).await?)
    }

    async fn find_public_by_slug(&self, slug: &str) -> Result<Option<job::Model>, ServiceError> {
        Ok(public_jobs().filter(job::Column::Slug.eq(slug)).one(&self.db).await?)
    }

    async fn insert(&self, model: job::Model) -> Result<job::Model, ServiceError> {
        Ok(job::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: job::Model) -> Result<job::Model, ServiceError> {
        Ok(job::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = job::Entity::update_many()
            .col_expr(job::Column::Deleted, Expr::value(true))
            .filter(job::Column::Id.eq(id))
            .filter(job::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), ServiceError> {
        job::Entity::update_many()
            .col_expr(job::Column::Views, Expr::col(job::Column::Views).add(1))
            .filter(job::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use crate::filters::{contains_ci, status_matches};
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockJobRepository {
        rows: Mutex<Vec<job::Model>>,
    }

    fn is_public(j: &job::Model) -> bool { !j.deleted && j.status == RecordStatus::Active.as_str() }

    #[async_trait]
    impl SlugProbe for MockJobRepository {
        async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().any(|j| j.slug == slug && Some(j.id) != exclude))
        }
    }

    #[async_trait]
    impl JobRepository for MockJobRepository {
        async fn list(&self, filter: &JobFilter) -> Result<Page<job::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let status = status_filter(filter.status.as_deref());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|j| !j.deleted)
                .filter(|j| term.as_deref().map_or(true, |t| contains_ci(&j.title, t)))
                .filter(|j| status_matches(&j.status, status))
                .filter(|j| filter.job_type.as_ref().map_or(true, |t| j.job_type.as_ref() == Some(t)))
                .filter(|j| filter.category_id.map_or(true, |c| j.category_id == Some(c)))
                .filter(|j| filter.recruiter_id.map_or(true, |r| j.recruiter_id == Some(r)))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn list_public(&self, filter: &PublicJobFilter) -> Result<Page<job::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|j| is_public(j))
                .filter(|j| term.as_deref().map_or(true, |t| contains_ci(&j.title, t)))
                .filter(|j| filter.category_id.map_or(true, |c| j.category_id == Some(c)))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn find(&self, id: Uuid) -> Result<Option<job::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|j| j.id == id && !j.deleted).cloned())
        }

        async fn find_public_by_slug(&self, slug: &str) -> Result<Option<job::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|j| j.slug == slug && is_public(j)).cloned())
        }

        async fn insert(&self, model: job::Model) -> Result<job::Model, ServiceError> {
            self.rows.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: job::Model) -> Result<job::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|j| j.id == model.id).ok_or_else(|| ServiceError::not_found("job"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|j| j.id == id && !j.deleted) {
                Some(j) => {
                    j.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn increment_views(&self, id: Uuid) -> Result<(), ServiceError> {
            if let Some(j) = self.rows.lock().unwrap().iter_mut().find(|j| j.id == id) {
                j.views += 1;
            }
            Ok(())
        }
    }
}
