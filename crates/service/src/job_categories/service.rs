use std::sync::Arc;

use chrono::Utc;
use models::errors::require_text;
use models::job_category;
use models::status::RecordStatus;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CategoryFilter, CreateCategory, UpdateCategory};
use super::repository::JobCategoryRepository;
use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::slug::unique_slug;

pub struct JobCategoryService<R: JobCategoryRepository> {
    repo: Arc<R>,
}

impl<R: JobCategoryRepository> JobCategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, filter: &CategoryFilter) -> Result<Page<job_category::Model>, ServiceError> {
        self.repo.list(filter).await
    }

    pub async fn list_public(&self) -> Result<Vec<job_category::Model>, ServiceError> { self.repo.list_public().await }

    pub async fn get(&self, id: Uuid) -> Result<job_category::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("job category"))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateCategory) -> Result<job_category::Model, ServiceError> {
        require_text("title", &input.title)?;
        let title = input.title.trim().to_string();
        let status = match input.status.as_deref() {
            Some(s) => RecordStatus::parse(s)?,
            None => RecordStatus::Active,
        };
        let slug = unique_slug(self.repo.as_ref(), &title, None).await?;
        let now = Utc::now().into();
        let created = self
            .repo
            .insert(job_category::Model {
                id: Uuid::new_v4(),
                title,
                slug,
                description: input.description,
                status: status.as_str().to_string(),
                views: 0,
                deleted: false,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(category_id = %created.id, slug = %created.slug, "job_category_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateCategory) -> Result<job_category::Model, ServiceError> {
        let mut current = self.get(id).await?;
        if let Some(title) = input.title.as_deref() {
            require_text("title", title)?;
            let title = title.trim();
            if title != current.title {
                current.slug = unique_slug(self.repo.as_ref(), title, Some(id)).await?;
                current.title = title.to_string();
            }
        }
        if input.description.is_some() {
            current.description = input.description;
        }
        if let Some(s) = input.status.as_deref() {
            current.status = RecordStatus::parse(s)?.as_str().to_string();
        }
        current.updated_at = Utc::now().into();
        let updated = self.repo.update(current).await?;
        info!(category_id = %id, "job_category_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: Uuid) -> Result<job_category::Model, ServiceError> {
        let mut current = self.get(id).await?;
        current.status = RecordStatus::toggle_str(&current.status).as_str().to_string();
        current.updated_at = Utc::now().into();
        let updated = self.repo.update(current).await?;
        info!(category_id = %id, status = %updated.status, "job_category_toggled");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("job category"));
        }
        info!(category_id = %id, "job_category_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_categories::repository::mock::MockJobCategoryRepository;

    fn svc() -> JobCategoryService<MockJobCategoryRepository> {
        JobCategoryService::new(Arc::new(MockJobCategoryRepository::default()))
    }

    fn input(title: &str) -> CreateCategory { CreateCategory { title: title.into(), description: None, status: None } }

    #[tokio::test]
    async fn same_title_gets_suffixed_slug() {
        let svc = svc();
        let a = svc.create(input("Công nghệ thông tin")).await.unwrap();
        let b = svc.create(input("Công nghệ thông tin")).await.unwrap();
        assert_eq!(a.slug, "cong-nghe-thong-tin");
        assert_eq!(b.slug, "cong-nghe-thong-tin-1");
    }

    #[tokio::test]
    async fn retitle_regenerates_slug_but_same_title_keeps_it() {
        let svc = svc();
        let a = svc.create(input("Sales")).await.unwrap();
        let same = svc.update(a.id, UpdateCategory { title: Some("Sales".into()), ..Default::default() }).await.unwrap();
        assert_eq!(same.slug, "sales");
        let moved = svc.update(a.id, UpdateCategory { title: Some("Marketing".into()), ..Default::default() }).await.unwrap();
        assert_eq!(moved.slug, "marketing");
    }

    #[tokio::test]
    async fn toggle_and_public_listing() {
        let svc = svc();
        let b = svc.create(input("B")).await.unwrap();
        svc.create(input("A")).await.unwrap();
        svc.toggle_status(b.id).await.unwrap();
        let public = svc.list_public().await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].title, "A");
        assert_eq!(svc.toggle_status(b.id).await.unwrap().status, "active");
    }

    #[tokio::test]
    async fn deleted_category_is_not_found() {
        let svc = svc();
        let a = svc.create(input("Gone")).await.unwrap();
        svc.delete(a.id).await.unwrap();
        assert!(matches!(svc.get(a.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(a.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn blank_title_rejected() {
        assert!(svc().create(input("  ")).await.is_err());
    }
}
