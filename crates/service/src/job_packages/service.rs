use std::sync::Arc;

use chrono::Utc;
use models::errors::require_text;
use models::job_package::{self, validate_terms};
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateJobPackage, JobPackageFilter, UpdateJobPackage};
use super::repository::JobPackageRepository;
use crate::errors::ServiceError;
use crate::pagination::Page;

pub struct JobPackageService<R: JobPackageRepository> {
    repo: Arc<R>,
}

impl<R: JobPackageRepository> JobPackageService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, filter: &JobPackageFilter) -> Result<Page<job_package::Model>, ServiceError> {
        self.repo.list(filter).await
    }

    pub async fn list_public(&self) -> Result<Vec<job_package::Model>, ServiceError> { self.repo.list_active().await }

    pub async fn get(&self, id: Uuid) -> Result<job_package::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("job package"))
    }

    #[instrument(skip(self, input), fields(name = %input.package_name))]
    pub async fn create(&self, input: CreateJobPackage) -> Result<job_package::Model, ServiceError> {
        require_text("packageName", &input.package_name)?;
        validate_terms(input.price, input.duration_days, &input.features)?;
        let now = Utc::now().into();
        let created = self
            .repo
            .insert(job_package::Model {
                id: Uuid::new_v4(),
                package_name: input.package_name.trim().to_string(),
                price: input.price,
                duration_days: input.duration_days,
                features: input.features,
                priority_level: input.priority_level.unwrap_or(0),
                is_active: input.is_active.unwrap_or(true),
                deleted: false,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(job_package_id = %created.id, "job_package_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateJobPackage) -> Result<job_package::Model, ServiceError> {
        let mut p = self.get(id).await?;
        if let Some(name) = input.package_name {
            require_text("packageName", &name)?;
            p.package_name = name.trim().to_string();
        }
        p.price = input.price.unwrap_or(p.price);
        p.duration_days = input.duration_days.unwrap_or(p.duration_days);
        if let Some(features) = input.features {
            p.features = features;
        }
        p.priority_level = input.priority_level.unwrap_or(p.priority_level);
        p.is_active = input.is_active.unwrap_or(p.is_active);
        validate_terms(p.price, p.duration_days, &p.features)?;
        p.updated_at = Utc::now().into();
        let updated = self.repo.update(p).await?;
        info!(job_package_id = %id, "job_package_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("job package"));
        }
        info!(job_package_id = %id, "job_package_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_packages::repository::mock::MockJobPackageRepository;
    use models::job_package::{Features, SupportLevel};

    fn svc() -> JobPackageService<MockJobPackageRepository> {
        JobPackageService::new(Arc::new(MockJobPackageRepository::default()))
    }

    fn input(name: &str, priority: i32) -> CreateJobPackage {
        CreateJobPackage {
            package_name: name.into(),
            price: 100,
            duration_days: 30,
            priority_level: Some(priority),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_rejects_bad_terms() {
        let svc = svc();
        assert!(svc.create(CreateJobPackage { price: -1, ..input("Basic", 0) }).await.is_err());
        assert!(svc.create(CreateJobPackage { duration_days: 0, ..input("Basic", 0) }).await.is_err());
        assert!(svc.create(input("  ", 0)).await.is_err());
    }

    #[tokio::test]
    async fn public_list_is_active_by_priority() {
        let svc = svc();
        svc.create(input("Basic", 0)).await.unwrap();
        let gold = svc.create(input("Gold", 5)).await.unwrap();
        let hidden = svc.create(input("Hidden", 9)).await.unwrap();
        svc.update(hidden.id, UpdateJobPackage { is_active: Some(false), ..Default::default() }).await.unwrap();
        let names: Vec<_> = svc.list_public().await.unwrap().into_iter().map(|p| p.package_name).collect();
        assert_eq!(names, vec!["Gold", "Basic"]);
        svc.delete(gold.id).await.unwrap();
        assert_eq!(svc.list_public().await.unwrap().len(), 1);
        assert!(svc.delete(gold.id).await.is_err());
    }

    #[tokio::test]
    async fn update_replaces_features_and_revalidates() {
        let svc = svc();
        let p = svc.create(input("Pro", 1)).await.unwrap();
        let features = Features { job_post_limit: 20, highlight: true, support_level: SupportLevel::Priority, ..Default::default() };
        let p = svc.update(p.id, UpdateJobPackage { features: Some(features.clone()), ..Default::default() }).await.unwrap();
        assert_eq!(p.features, features);
        let bad = Features { job_post_limit: -3, ..Default::default() };
        assert!(svc.update(p.id, UpdateJobPackage { features: Some(bad), ..Default::default() }).await.is_err());
    }
}
