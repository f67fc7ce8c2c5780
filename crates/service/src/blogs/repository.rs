use async_trait::async_trait;
use models::blog;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::PublicBlogFilter;
use crate::errors::ServiceError;
use crate::filters::search_term;
use crate::pagination::{fetch_page, Page, Pagination};
use crate::slug::SlugProbe;

#[async_trait]
pub trait BlogRepository: SlugProbe {
    /// Every non-deleted post, newest first.
    async fn list_all(&self) -> Result<Vec<blog::Model>, ServiceError>;
    async fn list_published(&self, filter: &PublicBlogFilter) -> Result<Page<blog::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<blog::Model>, ServiceError>;
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<blog::Model>, ServiceError>;
    async fn insert(&self, model: blog::Model) -> Result<blog::Model, ServiceError>;
    async fn update(&self, model: blog::Model) -> Result<blog::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBlogRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SlugProbe for SeaOrmBlogRepository {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
        let mut q = blog::Entity::find().filter(blog::Column::Slug.eq(slug));
        if let Some(id) = exclude {
            q = q.filter(blog::Column::Id.ne(id));
        }
        Ok(q.count(&self.db).await? > 0)
    }
}

#[async_trait]
impl BlogRepository for SeaOrmBlogRepository {
    async fn list_all(&self) -> Result<Vec<blog::Model>, ServiceError> {
        Ok(blog::Entity::find()
            .filter(blog::Column::Deleted.eq(false))
            .order_by_desc(blog::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    async fn list_published(&self, filter: &PublicBlogFilter) -> Result<Page<blog::Model>, ServiceError> {
        let mut q = blog::Entity::find()
            .filter(blog::Column::Deleted.eq(false))
            .filter(blog::Column::Published.eq(true));
        if let Some(tag) = search_term(filter.tag.as_deref()) {
            q = q.filter(Expr::cust_with_values("$1 = ANY(\"tags\")", [tag.to_lowercase()]));
        }
        let q = q.order_by_desc(blog::Column::PublishedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<blog::Model>, ServiceError> {
        Ok(blog::Entity::find_by_id(id).filter(blog::Column::Deleted.eq(false)).one(&self.db).await?)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<blog::Model>, ServiceError> {
        Ok(blog::Entity::find()
            .filter(blog::Column::Slug.eq(slug))
            .filter(blog::Column::Deleted.eq(false))
            .filter(blog::Column::Published.eq(true))
            .one(&self.db)
            .await?)
    }

    async fn insert(&self, model: blog::Model) -> Result<blog::Model, ServiceError> {
        Ok(blog::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: blog::Model) -> Result<blog::Model, ServiceError> {
        Ok(blog::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = blog::Entity::update_many()
            .col_expr(blog::Column::Deleted, Expr::value(true))
            .filter(blog::Column::Id.eq(id))
            .filter(blog::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBlogRepository {
        rows: Mutex<Vec<blog::Model>>,
    }

    #[async_trait]
    impl SlugProbe for MockBlogRepository {
        async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().any(|b| b.slug == slug && Some(b.id) != exclude))
        }
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepository {
        async fn list_all(&self) -> Result<Vec<blog::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().rev().filter(|b| !b.deleted).cloned().collect())
        }

        async fn list_published(&self, filter: &PublicBlogFilter) -> Result<Page<blog::Model>, ServiceError> {
            let tag = search_term(filter.tag.as_deref()).map(|t| t.to_lowercase());
            let rows = self.rows.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|b| !b.deleted && b.published)
                .filter(|b| tag.as_ref().map_or(true, |t| b.tags.contains(t)))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn find(&self, id: Uuid) -> Result<Option<blog::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id && !b.deleted).cloned())
        }

        async fn find_published_by_slug(&self, slug: &str) -> Result<Option<blog::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|b| b.slug == slug && !b.deleted && b.published).cloned())
        }

        async fn insert(&self, model: blog::Model) -> Result<blog::Model, ServiceError> {
            self.rows.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: blog::Model) -> Result<blog::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.iter_mut().find(|b| b.id == model.id).ok_or_else(|| ServiceError::not_found("blog"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|b| b.id == id && !b.deleted) {
                Some(b) => {
                    b.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
