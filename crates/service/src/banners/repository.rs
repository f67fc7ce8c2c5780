use async_trait::async_trait;
use models::banner_package::BannerPosition;
use models::{banner, banner_order, banner_package};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::{BannerFilter, OrderFilter, PackageFilter};
use crate::errors::ServiceError;
use crate::filters::{ilike, search_term};
use crate::pagination::{fetch_page, Page, Pagination};

/// Which counter a public banner event bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerCounter {
    Click,
    View,
}

#[async_trait]
pub trait BannerPackageRepository: Send + Sync {
    async fn list(&self, filter: &PackageFilter, position: Option<BannerPosition>) -> Result<Page<banner_package::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<banner_package::Model>, ServiceError>;
    async fn insert(&self, model: banner_package::Model) -> Result<banner_package::Model, ServiceError>;
    async fn update(&self, model: banner_package::Model) -> Result<banner_package::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait BannerRepository: Send + Sync {
    async fn list(&self, filter: &BannerFilter, position: Option<BannerPosition>) -> Result<Page<banner::Model>, ServiceError>;
    /// Approved, active, non-deleted banners whose window contains `now`, priciest first.
    async fn list_live(&self, position: Option<BannerPosition>, now: DateTimeWithTimeZone) -> Result<Vec<banner::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<banner::Model>, ServiceError>;
    async fn insert(&self, model: banner::Model) -> Result<banner::Model, ServiceError>;
    async fn update(&self, model: banner::Model) -> Result<banner::Model, ServiceError>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    /// False when no such non-deleted banner exists.
    async fn bump(&self, id: Uuid, counter: BannerCounter) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait BannerOrderRepository: Send + Sync {
    async fn list(&self, filter: &OrderFilter, status: Option<banner_order::OrderStatus>) -> Result<Page<banner_order::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<banner_order::Model>, ServiceError>;
    async fn insert(&self, model: banner_order::Model) -> Result<banner_order::Model, ServiceError>;
    async fn update(&self, model: banner_order::Model) -> Result<banner_order::Model, ServiceError>;
}

/// SeaORM-backed implementation of all three banner repositories.
pub struct SeaOrmBannerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BannerPackageRepository for SeaOrmBannerRepository {
    async fn list(&self, filter: &PackageFilter, position: Option<BannerPosition>) -> Result<Page<banner_package::Model>, ServiceError> {
        let mut q = banner_package::Entity::find().filter(banner_package::Column::Deleted.eq(false));
        if let Some(term) = search_term(filter.search.as_deref()) {
            q = q.filter(ilike(banner_package::Column::Name, &term));
        }
        if let Some(p) = position {
            q = q.filter(banner_package::Column::Position.eq(p));
        }
        let q = q
            .order_by_desc(banner_package::Column::Priority)
            .order_by_desc(banner_package::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<banner_package::Model>, ServiceError> {
        Ok(banner_package::Entity::find_by_id(id)
            .filter(banner_package::Column::Deleted.eq(false))
            .one(&self.db)
            .await?)
    }

    async fn insert(&self, model: banner_package::Model) -> Result<banner_package::Model, ServiceError> {
        Ok(banner_package::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: banner_package::Model) -> Result<banner_package::Model, ServiceError> {
        Ok(banner_package::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = banner_package::Entity::update_many()
            .col_expr(banner_package::Column::Deleted, Expr::value(true))
            .filter(banner_package::Column::Id.eq(id))
            .filter(banner_package::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl BannerRepository for SeaOrmBannerRepository {
    async fn list(&self, filter: &BannerFilter, position: Option<BannerPosition>) -> Result<Page<banner::Model>, ServiceError> {
        let mut q = banner::Entity::find().filter(banner::Column::Deleted.eq(false));
        if let Some(p) = position {
            q = q.filter(banner::Column::Position.eq(p));
        }
        if let Some(a) = filter.approved {
            q = q.filter(banner::Column::Approved.eq(a));
        }
        let q = q.order_by_desc(banner::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn list_live(&self, position: Option<BannerPosition>, now: DateTimeWithTimeZone) -> Result<Vec<banner::Model>, ServiceError> {
        let mut q = banner::Entity::find()
            .filter(banner::Column::Deleted.eq(false))
            .filter(banner::Column::Approved.eq(true))
            .filter(banner::Column::IsActive.eq(true))
            .filter(Condition::any().add(banner::Column::StartDate.is_null()).add(banner::Column::StartDate.lte(now)))
            .filter(Condition::any().add(banner::Column::EndDate.is_null()).add(banner::Column::EndDate.gte(now)));
        if let Some(p) = position {
            q = q.filter(banner::Column::Position.eq(p));
        }
        Ok(q.order_by_desc(banner::Column::Price).all(&self.db).await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<banner::Model>, ServiceError> {
        Ok(banner::Entity::find_by_id(id).filter(banner::Column::Deleted.eq(false)).one(&self.db).await?)
    }

    async fn insert(&self, model: banner::Model) -> Result<banner::Model, ServiceError> {
        Ok(banner::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: banner::Model) -> Result<banner::Model, ServiceError> {
        Ok(banner::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = banner::Entity::update_many()
            .col_expr(banner::Column::Deleted, Expr::value(true))
            .filter(banner::Column::Id.eq(id))
            .filter(banner::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn bump(&self, id: Uuid, counter: BannerCounter) -> Result<bool, ServiceError> {
        let col = match counter {
            BannerCounter::Click => banner::Column::ClickCount,
            BannerCounter::View => banner::Column::ViewCount,
        };
        let res = banner::Entity::update_many()
            .col_expr(col, Expr::col(col).add(1))
            .filter(banner::Column::Id.eq(id))
            .filter(banner::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl BannerOrderRepository for SeaOrmBannerRepository {
    async fn list(&self, filter: &OrderFilter, status: Option<banner_order::OrderStatus>) -> Result<Page<banner_order::Model>, ServiceError> {
        let mut q = banner_order::Entity::find();
        if let Some(p) = filter.package_id {
            q = q.filter(banner_order::Column::PackageId.eq(p));
        }
        if let Some(s) = status {
            q = q.filter(banner_order::Column::Status.eq(s));
        }
        let q = q.order_by_desc(banner_order::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<banner_order::Model>, ServiceError> {
        Ok(banner_order::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, model: banner_order::Model) -> Result<banner_order::Model, ServiceError> {
        Ok(banner_order::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: banner_order::Model) -> Result<banner_order::Model, ServiceError> {
        Ok(banner_order::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use crate::filters::contains_ci;
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBannerRepository {
        packages: Mutex<Vec<banner_package::Model>>,
        banners: Mutex<Vec<banner::Model>>,
        orders: Mutex<Vec<banner_order::Model>>,
    }

    fn replace<T: Clone>(rows: &Mutex<Vec<T>>, model: T, same: impl Fn(&T) -> bool, what: &str) -> Result<T, ServiceError> {
        let mut rows = rows.lock().unwrap();
        let slot = rows.iter_mut().find(|r| same(r)).ok_or_else(|| ServiceError::not_found(what))?;
        *slot = model.clone();
        Ok(model)
    }

    #[async_trait]
    impl BannerPackageRepository for MockBannerRepository {
        async fn list(&self, filter: &PackageFilter, position: Option<BannerPosition>) -> Result<Page<banner_package::Model>, ServiceError> {
            let term = search_term(filter.search.as_deref());
            let rows = self.packages.lock().unwrap();
            let mut hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|p| !p.deleted)
                .filter(|p| term.as_deref().map_or(true, |t| contains_ci(&p.name, t)))
                .filter(|p| position.map_or(true, |pos| p.position == pos))
                .cloned()
                .collect();
            hits.sort_by(|a, b| b.priority.cmp(&a.priority));
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn find(&self, id: Uuid) -> Result<Option<banner_package::Model>, ServiceError> {
            Ok(self.packages.lock().unwrap().iter().find(|p| p.id == id && !p.deleted).cloned())
        }

        async fn insert(&self, model: banner_package::Model) -> Result<banner_package::Model, ServiceError> {
            self.packages.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: banner_package::Model) -> Result<banner_package::Model, ServiceError> {
            let id = model.id;
            replace(&self.packages, model, |p| p.id == id, "banner package")
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.packages.lock().unwrap();
            Ok(rows.iter_mut().find(|p| p.id == id && !p.deleted).map(|p| p.deleted = true).is_some())
        }
    }

    #[async_trait]
    impl BannerRepository for MockBannerRepository {
        async fn list(&self, filter: &BannerFilter, position: Option<BannerPosition>) -> Result<Page<banner::Model>, ServiceError> {
            let rows = self.banners.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|b| !b.deleted)
                .filter(|b| position.map_or(true, |p| b.position == p))
                .filter(|b| filter.approved.map_or(true, |a| b.approved == a))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn list_live(&self, position: Option<BannerPosition>, now: DateTimeWithTimeZone) -> Result<Vec<banner::Model>, ServiceError> {
            let mut out: Vec<_> = self
                .banners
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.is_live_at(now))
                .filter(|b| position.map_or(true, |p| b.position == p))
                .cloned()
                .collect();
            out.sort_by(|a, b| b.price.cmp(&a.price));
            Ok(out)
        }

        async fn find(&self, id: Uuid) -> Result<Option<banner::Model>, ServiceError> {
            Ok(self.banners.lock().unwrap().iter().find(|b| b.id == id && !b.deleted).cloned())
        }

        async fn insert(&self, model: banner::Model) -> Result<banner::Model, ServiceError> {
            self.banners.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: banner::Model) -> Result<banner::Model, ServiceError> {
            let id = model.id;
            replace(&self.banners, model, |b| b.id == id, "banner")
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.banners.lock().unwrap();
            Ok(rows.iter_mut().find(|b| b.id == id && !b.deleted).map(|b| b.deleted = true).is_some())
        }

        async fn bump(&self, id: Uuid, counter: BannerCounter) -> Result<bool, ServiceError> {
            let mut rows = self.banners.lock().unwrap();
            Ok(rows
                .iter_mut()
                .find(|b| b.id == id && !b.deleted)
                .map(|b| match counter {
                    BannerCounter::Click => b.click_count += 1,
                    BannerCounter::View => b.view_count += 1,
                })
                .is_some())
        }
    }

    #[async_trait]
    impl BannerOrderRepository for MockBannerRepository {
        async fn list(&self, filter: &OrderFilter, status: Option<banner_order::OrderStatus>) -> Result<Page<banner_order::Model>, ServiceError> {
            let rows = self.orders.lock().unwrap();
            let hits: Vec<_> = rows
                .iter()
                .rev()
                .filter(|o| filter.package_id.map_or(true, |p| o.package_id == p))
                .filter(|o| status.map_or(true, |s| o.status == s))
                .cloned()
                .collect();
            Ok(page_of(&hits, Pagination::new(filter.page, filter.limit)))
        }

        async fn find(&self, id: Uuid) -> Result<Option<banner_order::Model>, ServiceError> {
            Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
        }

        async fn insert(&self, model: banner_order::Model) -> Result<banner_order::Model, ServiceError> {
            self.orders.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update(&self, model: banner_order::Model) -> Result<banner_order::Model, ServiceError> {
            let id = model.id;
            replace(&self.orders, model, |o| o.id == id, "banner order")
        }
    }
}
