use async_trait::async_trait;
use models::account;
use models::status::status_filter;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::AccountFilter;
use crate::errors::ServiceError;
use crate::filters::{ilike, search_term};
use crate::pagination::{fetch_page, Page, Pagination};

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn list(&self, filter: &AccountFilter) -> Result<Page<account::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<account::Model>, ServiceError>;
    /// Lookup including soft-deleted rows; emails stay reserved after deletion.
    async fn find_by_email(&self, email: &str) -> Result<Option<account::Model>, ServiceError>;
    async fn insert(&self, model: account::Model) -> Result<account::Model, ServiceError>;
    async fn update(&self, model: account::Model) -> Result<account::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn list(&self, filter: &AccountFilter) -> Result<Page<account::Model>, ServiceError> {
        let mut q = account::Entity::find().filter(account::Column::Deleted.eq(false));
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(account::Column::Email, &term));
        }
        if let Some(s) = status_filter(filter.status.as_deref()) {
            q = q.filter(account::Column::Status.eq(s.as_str()));
        }
        if let Some(role_id) = filter.role {
            q = q.filter(Expr::cust_with_values("$1 = ANY(\"role_ids\")", [role_id]));
        }
        let q = q.order_by_desc(account::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<account::Model>, ServiceError> {
        Ok(account::Entity::find_by_id(id).filter(account::Column::Deleted.eq(false)).one(&self.db).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<account::Model>, ServiceError> {
        Ok(account::Entity::find().filter(account::Column::Email.eq(email)).one(&self.db).await?)
    }

    async fn insert(&self, model: account::Model) -> Result<account::Model, ServiceError> {
        Ok(account::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: account::Model) -> Result<account::Model, ServiceError> {
        Ok(account::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = account::Entity::update_many()
            .col_expr(account::Column::Deleted, Expr::value(true))
            .filter(account::Column::Id.eq(id))
            .filter(account::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::filters::{contains_ci, status_matches};
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAccountRepository {
        rows: Mutex<Vec<account::Model>>,
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn list(&self, filter: &AccountFilter) -> Result<Page<account::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let status = status_filter(filter.status.as_deref());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|a| !a.deleted)
                .filter(|a| term.as_deref().map_or(true, |t| contains_ci(&a.email, t)))
                .filter(|a| status_matches(&a.status, status))
                .filter(|a| filter.role.map_or(true, |r| a.role_ids.contains(&r)))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn find(&self, id: Uuid) -> Result<Option<account::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id && !a.deleted).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<account::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|a| a.email == email).cloned())
        }

        async fn insert(&self, model: account::Model) -> Result<account::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|a| a.email == model.email) {
                return Err(ServiceError::Db("duplicate key value violates unique constraint".into()));
            }
            rows.push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: account::Model) -> Result<account::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|a| a.id == model.id).ok_or_else(|| ServiceError::not_found("account"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|a| a.id == id && !a.deleted) {
                Some(a) => {
                    a.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
