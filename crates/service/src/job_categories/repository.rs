use async_trait::async_trait;
use models::job_category;
use models::status::{status_filter, RecordStatus};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::CategoryFilter;
use crate::errors::ServiceError;
use crate::filters::{ilike, search_term};
use crate::pagination::{fetch_page, Page, Pagination};
use crate::slug::SlugProbe;

#[async_trait]
pub trait JobCategoryRepository: SlugProbe {
    async fn list(&self, filter: &CategoryFilter) -> Result<Page<job_category::Model>, ServiceError>;
    /// Active, non-deleted categories ordered by title.
    async fn list_public(&self) -> Result<Vec<job_category::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<job_category::Model>, ServiceError>;
    async fn insert(&self, model: job_category::Model) -> Result<job_category::Model, ServiceError>;
    async fn update(&self, model: job_category::Model) -> Result<job_category::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmJobCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SlugProbe for SeaOrmJobCategoryRepository {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
        let mut q = job_category::Entity::find().filter(job_category::Column::Slug.eq(slug));
        if let Some(id) = exclude {
            q = q.filter(job_category::Column::Id.ne(id));
        }
        Ok(q.count(&self.db).await? > 0)
    }
}

#[async_trait]
impl JobCategoryRepository for SeaOrmJobCategoryRepository {
    async fn list(&self, filter: &CategoryFilter) -> Result<Page<job_category::Model>, ServiceError> {
        let mut q = job_category::Entity::find().filter(job_category::Column::Deleted.eq(false));
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(job_category::Column::Title, &term));
        }
        if let Some(s) = status_filter(filter.status.as_deref()) {
            q = q.filter(job_category::Column::Status.eq(s.as_str()));
        }
        let q = q.order_by_desc(job_category::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn list_public(&self) -> Result<Vec<job_category::Model>, ServiceError> {
        Ok(job_category::Entity::find()
            .filter(job_category::Column::Deleted.eq(false))
            .filter(job_category::Column::Status.eq(RecordStatus::Active.as_str()))
            .order_by_asc(job_category::Column::Title)
            .all(&self.db)
            .await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<job_category::Model>, ServiceError> {
        Ok(job_category::Entity::find_by_id(id)
            .filter(job_category::Column::Deleted.eq(false))
            .one(&self.db)
            .await?)
    }

    async fn insert(&self, model: job_category::Model) -> Result<job_category::Model, ServiceError> {
        Ok(job_category::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: job_category::Model) -> Result<job_category::Model, ServiceError> {
        Ok(job_category::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = job_category::Entity::update_many()
            .col_expr(job_category::Column::Deleted, Expr::value(true))
            .filter(job_category::Column::Id.eq(id))
            .filter(job_category::Column::Deleted.eq(false))
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
    pub struct MockJobCategoryRepository {
        rows: Mutex<Vec<job_category::Model>>,
    }

    #[async_trait]
    impl SlugProbe for MockJobCategoryRepository {
        async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().any(|c| c.slug == slug && Some(c.id) != exclude))
        }
    }

    #[async_trait]
    impl JobCategoryRepository for MockJobCategoryRepository {
        async fn list(&self, filter: &CategoryFilter) -> Result<Page<job_category::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let status = status_filter(filter.status.as_deref());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|c| !c.deleted)
                .filter(|c| term.as_deref().map_or(true, |t| contains_ci(&c.title, t)))
                .filter(|c| status_matches(&c.status, status))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn list_public(&self) -> Result<Vec<job_category::Model>, ServiceError> {
            let mut out: Vec<_> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|c| !c.deleted && c.status == RecordStatus::Active.as_str())
                .cloned()
                .collect();
            out.sort_by(|a, b| a.title.cmp(&b.title));
            Ok(out)
        }

        async fn find(&self, id: Uuid) -> Result<Option<job_category::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id && !c.deleted).cloned())
        }

        async fn insert(&self, model: job_category::Model) -> Result<job_category::Model, ServiceError> {
            self.rows.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: job_category::Model) -> Result<job_category::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|c| c.id == model.id).ok_or_else(|| ServiceError::not_found("job category"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|c| c.id == id && !c.deleted) {
                Some(c) => {
                    c.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_categories::domain::CreateCategory;
    use crate::job_categories::JobCategoryService;
    use crate::test_support::get_db;
    use std::sync::Arc;

    #[tokio::test]
    async fn slugs_stay_unique_in_postgres() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = JobCategoryService::new(Arc::new(SeaOrmJobCategoryRepository { db }));
        let title = format!("Kế toán {}", Uuid::new_v4().simple());
        let input = || CreateCategory { title: title.clone(), description: None, status: None };
        let a = svc.create(input()).await?;
        let b = svc.create(input()).await?;
        assert_eq!(b.slug, format!("{}-1", a.slug));

        svc.delete(a.id).await?;
        assert!(svc.get(a.id).await.is_err());
        // the soft-deleted row still holds its slug
        let c = svc.create(input()).await?;
        assert_eq!(c.slug, format!("{}-2", a.slug));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_slug_insert_is_a_conflict() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmJobCategoryRepository { db };
        let svc = JobCategoryService::new(Arc::new(SeaOrmJobCategoryRepository { db: repo.db.clone() }));
        let first = svc
            .create(CreateCategory { title: format!("Race {}", Uuid::new_v4().simple()), description: None, status: None })
            .await?;
        // a second writer that observed the slug as free
        let loser = job_category::Model { id: Uuid::new_v4(), ..first.clone() };
        assert!(matches!(repo.insert(loser).await, Err(ServiceError::Conflict(_))));
        Ok(())
    }
}
