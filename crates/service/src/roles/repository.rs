use async_trait::async_trait;
use models::role;
use models::status::status_filter;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::RoleFilter;
use crate::errors::ServiceError;
use crate::filters::{ilike, search_term};
use crate::pagination::{fetch_page, Page, Pagination};

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn list(&self, filter: &RoleFilter) -> Result<Page<role::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<role::Model>, ServiceError>;
    /// Non-deleted roles among `ids`.
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<role::Model>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, ServiceError>;
    async fn insert(&self, model: role::Model) -> Result<role::Model, ServiceError>;
    async fn update(&self, model: role::Model) -> Result<role::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRoleRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RoleRepository for SeaOrmRoleRepository {
    async fn list(&self, filter: &RoleFilter) -> Result<Page<role::Model>, ServiceError> {
        let mut q = role::Entity::find().filter(role::Column::Deleted.eq(false));
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(role::Column::Name, &term));
        }
        if let Some(s) = status_filter(filter.status.as_deref()) {
            q = q.filter(role::Column::IsActive.eq(s.as_str()));
        }
        let q = q.order_by_desc(role::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<role::Model>, ServiceError> {
        Ok(role::Entity::find_by_id(id).filter(role::Column::Deleted.eq(false)).one(&self.db).await?)
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<role::Model>, ServiceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(role::Entity::find()
            .filter(role::Column::Id.is_in(ids.iter().copied()))
            .filter(role::Column::Deleted.eq(false))
            .all(&self.db)
            .await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, ServiceError> {
        Ok(role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .filter(role::Column::Deleted.eq(false))
            .one(&self.db)
            .await?)
    }

    async fn insert(&self, model: role::Model) -> Result<role::Model, ServiceError> {
        Ok(role::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: role::Model) -> Result<role::Model, ServiceError> {
        Ok(role::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = role::Entity::update_many()
            .col_expr(role::Column::Deleted, Expr::value(true))
            .filter(role::Column::Id.eq(id))
            .filter(role::Column::Deleted.eq(false))
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
    pub struct MockRoleRepository {
        rows: Mutex<Vec<role::Model>>,
    }

    #[async_trait]
    impl RoleRepository for MockRoleRepository {
        async fn list(&self, filter: &RoleFilter) -> Result<Page<role::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let status = status_filter(filter.status.as_deref());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|r| !r.deleted)
                .filter(|r| term.as_deref().map_or(true, |t| contains_ci(&r.name, t)))
                .filter(|r| status_matches(&r.is_active, status))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn find(&self, id: Uuid) -> Result<Option<role::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id && !r.deleted).cloned())
        }

        async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<role::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().filter(|r| ids.contains(&r.id) && !r.deleted).cloned().collect())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.name == name && !r.deleted).cloned())
        }

        async fn insert(&self, model: role::Model) -> Result<role::Model, ServiceError> {
            self.rows.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: role::Model) -> Result<role::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|r| r.id == model.id).ok_or_else(|| ServiceError::not_found("role"))?;
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
