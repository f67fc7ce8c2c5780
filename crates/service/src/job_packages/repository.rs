use async_trait::async_trait;
use models::job_package;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::JobPackageFilter;
use crate::errors::ServiceError;
use crate::filters::{ilike, search_term};
use crate::pagination::{fetch_page, Page, Pagination};

#[async_trait]
pub trait JobPackageRepository: Send + Sync {
    async fn list(&self, filter: &JobPackageFilter) -> Result<Page<job_package::Model>, ServiceError>;
    /// Active packages, highest `priority_level` first.
    async fn list_active(&self) -> Result<Vec<job_package::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<job_package::Model>, ServiceError>;
    async fn insert(&self, model: job_package::Model) -> Result<job_package::Model, ServiceError>;
    async fn update(&self, model: job_package::Model) -> Result<job_package::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

pub struct SeaOrmJobPackageRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl JobPackageRepository for SeaOrmJobPackageRepository {
    async fn list(&self, filter: &JobPackageFilter) -> Result<Page<job_package::Model>, ServiceError> {
        let mut q = job_package::Entity::find().filter(job_package::Column::Deleted.eq(false));
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(job_package::Column::PackageName, &term));
        }
        if let Some(active) = filter.is_active {
            q = q.filter(job_package::Column::IsActive.eq(active));
        }
        let q = q.order_by_desc(job_package::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn list_active(&self) -> Result<Vec<job_package::Model>, ServiceError> {
        Ok(job_package::Entity::find()
            .filter(job_package::Column::Deleted.eq(false))
            .filter(job_package::Column::IsActive.eq(true))
            .order_by_desc(job_package::Column::PriorityLevel)
            .order_by_asc(job_package::Column::Price)
            .all(&self.db)
            .await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<job_package::Model>, ServiceError> {
        Ok(job_package::Entity::find_by_id(id).filter(job_package::Column::Deleted.eq(false)).one(&self.db).await?)
    }

    async fn insert(&self, model: job_package::Model) -> Result<job_package::Model, ServiceError> {
        Ok(job_package::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: job_package::Model) -> Result<job_package::Model, ServiceError> {
        Ok(job_package::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = job_package::Entity::update_many()
            .col_expr(job_package::Column::Deleted, Expr::value(true))
            .filter(job_package::Column::Id.eq(id))
            .filter(job_package::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}

pub mod mock {
    use super::*;
    use crate::filters::contains_ci;
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockJobPackageRepository {
        rows: Mutex<Vec<job_package::Model>>,
    }

    #[async_trait]
    impl JobPackageRepository for MockJobPackageRepository {
        async fn list(&self, filter: &JobPackageFilter) -> Result<Page<job_package::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|p| !p.deleted)
                .filter(|p| term.as_deref().map_or(true, |t| contains_ci(&p.package_name, t)))
                .filter(|p| filter.is_active.map_or(true, |a| p.is_active == a))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn list_active(&self) -> Result<Vec<job_package::Model>, ServiceError> {
            let mut out: Vec<_> = self.rows.lock().unwrap().iter().filter(|p| p.is_active && !p.deleted).cloned().collect();
            out.sort_by(|a, b| b.priority_level.cmp(&a.priority_level).then(a.price.cmp(&b.price)));
            Ok(out)
        }

        async fn find(&self, id: Uuid) -> Result<Option<job_package::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id && !p.deleted).cloned())
        }

        async fn insert(&self, model: job_package::Model) -> Result<job_package::Model, ServiceError> {
            self.rows.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: job_package::Model) -> Result<job_package::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|p| p.id == model.id).ok_or_else(|| ServiceError::not_found("job package"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|p| p.id == id && !p.deleted).map(|p| p.deleted = true).is_some())
        }
    }
}
