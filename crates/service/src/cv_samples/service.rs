use std::sync::Arc;

use chrono::Utc;
use models::cv_sample;
use models::errors::require_text;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateCvSample, CvSampleFilter, UpdateCvSample};
use super::repository::CvSampleRepository;
use crate::errors::ServiceError;
use crate::pagination::Page;

pub struct CvSampleService<R: CvSampleRepository> {
    repo: Arc<R>,
}

impl<R: CvSampleRepository> CvSampleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, filter: &CvSampleFilter) -> Result<Page<cv_sample::Model>, ServiceError> {
        self.repo.list(filter).await
    }

    pub async fn list_active(&self) -> Result<Vec<cv_sample::Model>, ServiceError> { self.repo.list_active().await }

    pub async fn get(&self, id: Uuid) -> Result<cv_sample::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("cv sample"))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateCvSample) -> Result<cv_sample::Model, ServiceError> {
        require_text("name", &input.name)?;
        require_text("title", &input.title)?;
        require_text("html", &input.html)?;
        let now = Utc::now().into();
        let created = self
            .repo
            .insert(cv_sample::Model {
                id: Uuid::new_v4(),
                name: input.name.trim().to_string(),
                title: input.title.trim().to_string(),
                description: input.description,
                demo_image: input.demo_image,
                html: input.html,
                css: input.css,
                is_active: input.is_active.unwrap_or(true),
                is_deleted: false,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(cv_sample_id = %created.id, "cv_sample_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateCvSample) -> Result<cv_sample::Model, ServiceError> {
        let mut c = self.get(id).await?;
        if let Some(name) = input.name {
            require_text("name", &name)?;
            c.name = name.trim().to_string();
        }
        if let Some(title) = input.title {
            require_text("title", &title)?;
            c.title = title.trim().to_string();
        }
        if let Some(html) = input.html {
            require_text("html", &html)?;
            c.html = html;
        }
        if let Some(css) = input.css {
            c.css = css;
        }
        if input.description.is_some() {
            c.description = input.description;
        }
        if input.demo_image.is_some() {
            c.demo_image = input.demo_image;
        }
        if let Some(a) = input.is_active {
            c.is_active = a;
        }
        c.updated_at = Utc::now().into();
        let updated = self.repo.update(c).await?;
        info!(cv_sample_id = %id, "cv_sample_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: Uuid) -> Result<cv_sample::Model, ServiceError> {
        let mut c = self.get(id).await?;
        c.is_active = !c.is_active;
        c.updated_at = Utc::now().into();
        self.repo.update(c).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("cv sample"));
        }
        info!(cv_sample_id = %id, "cv_sample_deleted");
        Ok(())
    }

    /// Remove the row itself, soft-deleted or not.
    #[instrument(skip(self))]
    pub async fn hard_delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.hard_delete(id).await? {
            return Err(ServiceError::not_found("cv sample"));
        }
        info!(cv_sample_id = %id, "cv_sample_purged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv_samples::repository::mock::MockCvSampleRepository;

    fn svc() -> CvSampleService<MockCvSampleRepository> { CvSampleService::new(Arc::new(MockCvSampleRepository::default())) }

    fn input(name: &str) -> CreateCvSample {
        CreateCvSample { name: name.into(), title: "Modern".into(), html: "<div></div>".into(), ..Default::default() }
    }

    #[tokio::test]
    async fn active_and_deleted_flags_are_independent() {
        let svc = svc();
        let a = svc.create(input("a")).await.unwrap();
        let b = svc.create(input("b")).await.unwrap();
        svc.toggle_active(a.id).await.unwrap();
        svc.delete(b.id).await.unwrap();
        assert!(svc.list_active().await.unwrap().is_empty());
        let inactive = svc.list(&CvSampleFilter { is_active: Some(false), ..Default::default() }).await.unwrap();
        assert_eq!(inactive.total, 1);
        assert_eq!(svc.list(&CvSampleFilter::default()).await.unwrap().total, 1);
    }

    #[tokio::test]
    async fn hard_delete_removes_soft_deleted_rows_too() {
        let svc = svc();
        let a = svc.create(input("a")).await.unwrap();
        svc.delete(a.id).await.unwrap();
        svc.hard_delete(a.id).await.unwrap();
        assert!(matches!(svc.hard_delete(a.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn html_is_required() {
        let mut bad = input("a");
        bad.html = "  ".into();
        assert!(svc().create(bad).await.is_err());
    }
}
