use std::sync::Arc;

use chrono::{Duration, Utc};
use models::banner_order::{Approval, OrderStatus};
use models::banner_package::{validate_terms, BannerPosition};
use models::errors::require_text;
use models::{banner, banner_order, banner_package};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{BannerFilter, CreatePackage, OrderFilter, PackageFilter, PlaceOrder, UpdateBanner, UpdatePackage};
use super::repository::{BannerCounter, BannerOrderRepository, BannerPackageRepository, BannerRepository};
use crate::errors::ServiceError;
use crate::pagination::Page;

/// Result of approving an order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedOrder {
    pub order: banner_order::Model,
    pub banner: banner::Model,
}

pub struct BannerService<P: BannerPackageRepository, B: BannerRepository, O: BannerOrderRepository> {
    packages: Arc<P>,
    banners: Arc<B>,
    orders: Arc<O>,
}

fn parse_position(raw: Option<&str>) -> Result<Option<BannerPosition>, ServiceError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => Ok(Some(BannerPosition::parse(s)?)),
        None => Ok(None),
    }
}

impl<P: BannerPackageRepository, B: BannerRepository, O: BannerOrderRepository> BannerService<P, B, O> {
    pub fn new(packages: Arc<P>, banners: Arc<B>, orders: Arc<O>) -> Self { Self { packages, banners, orders } }

    // ---- packages ----

    pub async fn list_packages(&self, filter: &PackageFilter) -> Result<Page<banner_package::Model>, ServiceError> {
        let position = parse_position(filter.position.as_deref())?;
        self.packages.list(filter, position).await
    }

    pub async fn get_package(&self, id: Uuid) -> Result<banner_package::Model, ServiceError> {
        self.packages.find(id).await?.ok_or_else(|| ServiceError::not_found("banner package"))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_package(&self, input: CreatePackage) -> Result<banner_package::Model, ServiceError> {
        require_text("name", &input.name)?;
        let position = BannerPosition::parse(&input.position)?;
        validate_terms(input.duration_days, input.price, input.max_banner_slots)?;
        let now = Utc::now().into();
        let created = self
            .packages
            .insert(banner_package::Model {
                id: Uuid::new_v4(),
                name: input.name.trim().to_string(),
                description: input.description,
                position,
                preview_image: input.preview_image,
                duration_days: input.duration_days,
                price: input.price,
                max_banner_slots: input.max_banner_slots,
                priority: input.priority.unwrap_or(0),
                is_active: input.is_active.unwrap_or(true),
                deleted: false,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(package_id = %created.id, "banner_package_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update_package(&self, id: Uuid, input: UpdatePackage) -> Result<banner_package::Model, ServiceError> {
        let mut p = self.get_package(id).await?;
        if let Some(name) = input.name {
            require_text("name", &name)?;
            p.name = name.trim().to_string();
        }
        if let Some(pos) = parse_position(input.position.as_deref())? {
            p.position = pos;
        }
        if input.description.is_some() {
            p.description = input.description;
        }
        if input.preview_image.is_some() {
            p.preview_image = input.preview_image;
        }
        p.duration_days = input.duration_days.unwrap_or(p.duration_days);
        p.price = input.price.unwrap_or(p.price);
        p.max_banner_slots = input.max_banner_slots.unwrap_or(p.max_banner_slots);
        p.priority = input.priority.unwrap_or(p.priority);
        p.is_active = input.is_active.unwrap_or(p.is_active);
        validate_terms(p.duration_days, p.price, p.max_banner_slots)?;
        p.updated_at = Utc::now().into();
        let updated = self.packages.update(p).await?;
        info!(package_id = %id, "banner_package_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_package(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.packages.soft_delete(id).await? {
            return Err(ServiceError::not_found("banner package"));
        }
        info!(package_id = %id, "banner_package_deleted");
        Ok(())
    }

    // ---- banners ----

    pub async fn list_banners(&self, filter: &BannerFilter) -> Result<Page<banner::Model>, ServiceError> {
        let position = parse_position(filter.position.as_deref())?;
        self.banners.list(filter, position).await
    }

    pub async fn get_banner(&self, id: Uuid) -> Result<banner::Model, ServiceError> {
        self.banners.find(id).await?.ok_or_else(|| ServiceError::not_found("banner"))
    }

    /// Banners currently on air in `position` (all slots when `None`).
    pub async fn live_banners(&self, position: Option<&str>) -> Result<Vec<banner::Model>, ServiceError> {
        let position = parse_position(position)?;
        self.banners.list_live(position, Utc::now().into()).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_banner(&self, id: Uuid, input: UpdateBanner) -> Result<banner::Model, ServiceError> {
        let mut b = self.get_banner(id).await?;
        if let Some(title) = input.title {
            require_text("title", &title)?;
            b.title = title.trim().to_string();
        }
        if let Some(url) = input.image_url {
            require_text("imageUrl", &url)?;
            b.image_url = url;
        }
        if input.redirect_url.is_some() {
            b.redirect_url = input.redirect_url;
        }
        if input.alt_text.is_some() {
            b.alt_text = input.alt_text;
        }
        if let Some(pos) = parse_position(input.position.as_deref())? {
            b.position = pos;
        }
        if let Some(price) = input.price {
            if price < 0 {
                return Err(ServiceError::validation("price must be >= 0"));
            }
            b.price = price;
        }
        b.approved = input.approved.unwrap_or(b.approved);
        b.is_active = input.is_active.unwrap_or(b.is_active);
        if input.start_date.is_some() {
            b.start_date = input.start_date;
        }
        if input.end_date.is_some() {
            b.end_date = input.end_date;
        }
        if let (Some(s), Some(e)) = (b.start_date, b.end_date) {
            if s > e {
                return Err(ServiceError::validation("startDate must not be after endDate"));
            }
        }
        b.updated_at = Utc::now().into();
        let updated = self.banners.update(b).await?;
        info!(banner_id = %id, "banner_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_banner(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.banners.soft_delete(id).await? {
            return Err(ServiceError::not_found("banner"));
        }
        info!(banner_id = %id, "banner_deleted");
        Ok(())
    }

    pub async fn record(&self, id: Uuid, counter: BannerCounter) -> Result<(), ServiceError> {
        if !self.banners.bump(id, counter).await? {
            return Err(ServiceError::not_found("banner"));
        }
        Ok(())
    }

    // ---- orders ----

    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Page<banner_order::Model>, ServiceError> {
        let status = match filter.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(OrderStatus::parse(s)?),
            None => None,
        };
        self.orders.list(filter, status).await
    }

    /// Record a placement against an active package; the amount is the package price.
    #[instrument(skip(self, input), fields(package_id = %input.package_id))]
    pub async fn place_order(&self, input: PlaceOrder) -> Result<banner_order::Model, ServiceError> {
        require_text("title", &input.title)?;
        require_text("imageUrl", &input.image_url)?;
        let package = self
            .packages
            .find(input.package_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| ServiceError::not_found("banner package"))?;
        let now = Utc::now().into();
        let created = self
            .orders
            .insert(banner_order::Model {
                id: Uuid::new_v4(),
                package_id: package.id,
                account_id: input.account_id,
                recruiter_id: input.recruiter_id,
                company_id: input.company_id,
                amount: package.price,
                status: OrderStatus::Pending,
                title: input.title.trim().to_string(),
                image_url: input.image_url,
                redirect_url: input.redirect_url,
                alt_text: input.alt_text,
                banner_id: None,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(order_id = %created.id, amount = created.amount, "banner_order_placed");
        Ok(created)
    }

    async fn load_order(&self, id: Uuid) -> Result<banner_order::Model, ServiceError> {
        self.orders.find(id).await?.ok_or_else(|| ServiceError::not_found("banner order"))
    }

    /// Turn a pending or paid order into a live banner and mark it paid.
    #[instrument(skip(self))]
    pub async fn approve_order(&self, id: Uuid) -> Result<ApprovedOrder, ServiceError> {
        let mut order = self.load_order(id).await?;
        match order.approval() {
            Approval::Allowed => {}
            Approval::AlreadyLinked => return Err(ServiceError::conflict("order already approved")),
            Approval::InvalidStatus(s) => {
                return Err(ServiceError::validation(format!("cannot approve an order in status {s:?}")))
            }
        }
        let package = self.get_package(order.package_id).await?;
        let start = Utc::now();
        let end = start
            .checked_add_signed(Duration::days(i64::from(package.duration_days)))
            .ok_or_else(|| ServiceError::validation("package duration is out of range"))?;
        let banner = self
            .banners
            .insert(banner::Model {
                id: Uuid::new_v4(),
                title: order.title.clone(),
                image_url: order.image_url.clone(),
                redirect_url: order.redirect_url.clone(),
                alt_text: order.alt_text.clone(),
                position: package.position,
                price: package.price,
                approved: true,
                is_active: true,
                start_date: Some(start.into()),
                end_date: Some(end.into()),
                view_count: 0,
                click_count: 0,
                package_id: Some(package.id),
                deleted: false,
                created_at: start.into(),
                updated_at: start.into(),
            })
            .await?;
        order.banner_id = Some(banner.id);
        order.status = OrderStatus::Paid;
        order.updated_at = start.into();
        let order = self.orders.update(order).await?;
        info!(order_id = %id, banner_id = %banner.id, "banner_order_approved");
        Ok(ApprovedOrder { order, banner })
    }

    #[instrument(skip(self))]
    pub async fn reject_order(&self, id: Uuid) -> Result<banner_order::Model, ServiceError> {
        let mut order = self.load_order(id).await?;
        if order.status != OrderStatus::Pending {
            return Err(ServiceError::validation(format!("cannot reject an order in status {:?}", order.status)));
        }
        order.status = OrderStatus::Cancelled;
        order.updated_at = Utc::now().into();
        let order = self.orders.update(order).await?;
        info!(order_id = %id, "banner_order_rejected");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banners::repository::mock::MockBannerRepository;

    type Svc = BannerService<MockBannerRepository, MockBannerRepository, MockBannerRepository>;

    fn svc() -> Svc {
        let repo = Arc::new(MockBannerRepository::default());
        BannerService::new(repo.clone(), repo.clone(), repo)
    }

    fn package(price: i64) -> CreatePackage {
        CreatePackage {
            name: "Top".into(),
            position: "BELOW_SEARCH_BAR".into(),
            duration_days: 7,
            price,
            max_banner_slots: 2,
            ..Default::default()
        }
    }

    fn order(package_id: Uuid) -> PlaceOrder {
        PlaceOrder { package_id, title: "Hiring".into(), image_url: "/uploads/site/a.png".into(), ..Default::default() }
    }

    #[tokio::test]
    async fn package_terms_validated() {
        let svc = svc();
        let mut bad = package(10);
        bad.duration_days = 0;
        assert!(svc.create_package(bad).await.is_err());
        let mut bad = package(10);
        bad.position = "SIDEBAR".into();
        assert!(svc.create_package(bad).await.is_err());
    }

    #[tokio::test]
    async fn oversized_duration_never_reaches_approval() {
        let svc = svc();
        let mut long = package(10);
        long.duration_days = 100_000_000;
        assert!(matches!(svc.create_package(long).await, Err(ServiceError::Model(_))));
    }

    #[tokio::test]
    async fn approval_rejects_stored_duration_past_calendar_range() {
        let repo = Arc::new(MockBannerRepository::default());
        let svc: Svc = BannerService::new(repo.clone(), repo.clone(), repo.clone());
        let mut p = svc.create_package(package(10)).await.unwrap();
        let o = svc.place_order(order(p.id)).await.unwrap();
        // rows written before the upper bound existed
        p.duration_days = i32::MAX;
        BannerPackageRepository::update(&*repo, p).await.unwrap();
        assert!(matches!(svc.approve_order(o.id).await, Err(ServiceError::Validation(_))));
        let o = BannerOrderRepository::find(&*repo, o.id).await.unwrap().unwrap();
        assert_eq!(o.status, OrderStatus::Pending);
        assert!(o.banner_id.is_none());
    }

    #[tokio::test]
    async fn order_takes_package_price_and_requires_active_package() {
        let svc = svc();
        let p = svc.create_package(package(500)).await.unwrap();
        let o = svc.place_order(order(p.id)).await.unwrap();
        assert_eq!(o.amount, 500);
        assert_eq!(o.status, OrderStatus::Pending);
        svc.update_package(p.id, UpdatePackage { is_active: Some(false), ..Default::default() }).await.unwrap();
        assert!(matches!(svc.place_order(order(p.id)).await, Err(ServiceError::NotFound(_))));
        assert!(svc.place_order(order(Uuid::new_v4())).await.is_err());
    }

    #[tokio::test]
    async fn approval_creates_live_banner_once() {
        let svc = svc();
        let p = svc.create_package(package(300)).await.unwrap();
        let o = svc.place_order(order(p.id)).await.unwrap();
        let approved = svc.approve_order(o.id).await.unwrap();
        assert_eq!(approved.order.status, OrderStatus::Paid);
        assert_eq!(approved.order.banner_id, Some(approved.banner.id));
        assert_eq!(approved.banner.price, 300);
        assert_eq!(approved.banner.position, BannerPosition::BelowSearchBar);
        let window = approved.banner.end_date.unwrap() - approved.banner.start_date.unwrap();
        assert_eq!(window.num_days(), 7);
        assert!(matches!(svc.approve_order(o.id).await, Err(ServiceError::Conflict(_))));

        let live = svc.live_banners(Some("BELOW_SEARCH_BAR")).await.unwrap();
        assert_eq!(live.len(), 1);
        assert!(svc.live_banners(Some("BELOW_FEATURED_COMPANIES")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_order_cannot_be_approved() {
        let svc = svc();
        let p = svc.create_package(package(1)).await.unwrap();
        let o = svc.place_order(order(p.id)).await.unwrap();
        assert_eq!(svc.reject_order(o.id).await.unwrap().status, OrderStatus::Cancelled);
        assert!(matches!(svc.approve_order(o.id).await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.reject_order(o.id).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn live_banners_ordered_by_price_and_counters_bump() {
        let svc = svc();
        let cheap = svc.create_package(package(100)).await.unwrap();
        let pricey = svc.create_package(package(900)).await.unwrap();
        let a = svc.approve_order(svc.place_order(order(cheap.id)).await.unwrap().id).await.unwrap();
        svc.approve_order(svc.place_order(order(pricey.id)).await.unwrap().id).await.unwrap();
        let live = svc.live_banners(None).await.unwrap();
        assert_eq!(live[0].price, 900);

        svc.record(a.banner.id, BannerCounter::Click).await.unwrap();
        svc.record(a.banner.id, BannerCounter::View).await.unwrap();
        svc.record(a.banner.id, BannerCounter::View).await.unwrap();
        let b = svc.get_banner(a.banner.id).await.unwrap();
        assert_eq!((b.click_count, b.view_count), (1, 2));
        assert!(svc.record(Uuid::new_v4(), BannerCounter::Click).await.is_err());
    }

    #[tokio::test]
    async fn deactivated_banner_leaves_the_air() {
        let svc = svc();
        let p = svc.create_package(package(5)).await.unwrap();
        let a = svc.approve_order(svc.place_order(order(p.id)).await.unwrap().id).await.unwrap();
        svc.update_banner(a.banner.id, UpdateBanner { is_active: Some(false), ..Default::default() }).await.unwrap();
        assert!(svc.live_banners(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn order_list_filters_by_status() {
        let svc = svc();
        let p = svc.create_package(package(5)).await.unwrap();
        let o = svc.place_order(order(p.id)).await.unwrap();
        svc.place_order(order(p.id)).await.unwrap();
        svc.reject_order(o.id).await.unwrap();
        let f = OrderFilter { status: Some("pending".into()), ..Default::default() };
        assert_eq!(svc.list_orders(&f).await.unwrap().total, 1);
        let bad = OrderFilter { status: Some("weird".into()), ..Default::default() };
        assert!(svc.list_orders(&bad).await.is_err());
    }
}
