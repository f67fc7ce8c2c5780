use std::sync::Arc;

use chrono::Utc;
use models::errors::require_text;
use models::job::{self, ensure_distinct, validate_salary};
use models::status::RecordStatus;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{CreateJob, JobDetail, JobFilter, PublicJob, PublicJobFilter, UpdateJob};
use super::repository::JobRepository;
use crate::errors::ServiceError;
use crate::job_categories::repository::JobCategoryRepository;
use crate::media::{ImageUpload, MediaStore};
use crate::pagination::Page;
use crate::slug::unique_slug;

pub const IMAGE_FOLDER: &str = "jobs";

pub struct JobService<J: JobRepository, C: JobCategoryRepository> {
    repo: Arc<J>,
    categories: Arc<C>,
    media: Arc<dyn MediaStore>,
}

fn trimmed_list(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).filter(|v| !v.is_empty()).collect()
}

impl<J: JobRepository, C: JobCategoryRepository> JobService<J, C> {
    pub fn new(repo: Arc<J>, categories: Arc<C>, media: Arc<dyn MediaStore>) -> Self { Self { repo, categories, media } }

    pub async fn list(&self, filter: &JobFilter) -> Result<Page<job::Model>, ServiceError> { self.repo.list(filter).await }

    pub async fn list_public(&self, filter: &PublicJobFilter) -> Result<Page<PublicJob>, ServiceError> {
        Ok(self.repo.list_public(filter).await?.map(PublicJob::from))
    }

    async fn load(&self, id: Uuid) -> Result<job::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("job"))
    }

    pub async fn detail(&self, id: Uuid) -> Result<JobDetail, ServiceError> {
        let job = self.load(id).await?;
        let category_title = match job.category_id {
            Some(c) => self.categories.find(c).await?.map(|c| c.title),
            None => None,
        };
        Ok(JobDetail { job, category_title })
    }

    /// Public detail by slug; counts a view.
    pub async fn view_public(&self, slug: &str) -> Result<PublicJob, ServiceError> {
        let job = self.repo.find_public_by_slug(slug).await?.ok_or_else(|| ServiceError::not_found("job"))?;
        self.repo.increment_views(job.id).await?;
        Ok(job.into())
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateJob) -> Result<job::Model, ServiceError> {
        require_text("title", &input.title)?;
        validate_salary(input.salary_min, input.salary_max)?;
        let skills = trimmed_list(input.skills);
        let tags = trimmed_list(input.tags);
        ensure_distinct("skills", &skills)?;
        ensure_distinct("tags", &tags)?;
        let title = input.title.trim().to_string();
        let slug = unique_slug(self.repo.as_ref(), &title, None).await?;
        let now = Utc::now().into();
        let model = job::Model {
            id: Uuid::new_v4(),
            title,
            slug,
            description: input.description,
            requirements: input.requirements,
            benefits: input.benefits,
            quantity: input.quantity,
            salary_min: input.salary_min,
            salary_max: input.salary_max,
            salary_type: input.salary_type,
            salary_negotiable: input.salary_negotiable,
            career: input.career,
            category_id: input.category_id,
            level: input.level,
            job_type: input.job_type,
            location: input.location,
            address: input.address,
            deadline: input.deadline,
            is_active: true,
            status: RecordStatus::Active.as_str().to_string(),
            reason_reject: None,
            views: 0,
            skills,
            tags,
            images: Vec::new(),
            recruiter_id: input.recruiter_id,
            deleted: false,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(model).await?;
        info!(job_id = %created.id, slug = %created.slug, "job_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateJob) -> Result<job::Model, ServiceError> {
        let mut j = self.load(id).await?;
        if let Some(title) = input.title.as_deref() {
            require_text("title", title)?;
            let title = title.trim();
            if title != j.title {
                j.slug = unique_slug(self.repo.as_ref(), title, Some(id)).await?;
                j.title = title.to_string();
            }
        }
        macro_rules! assign_opt {
            ($($field:ident),*) => { $( if input.$field.is_some() { j.$field = input.$field; } )* };
        }
        assign_opt!(description, requirements, benefits, quantity, salary_min, salary_max, salary_type, career,
            category_id, level, job_type, location, address, deadline, reason_reject, recruiter_id);
        validate_salary(j.salary_min, j.salary_max)?;
        if let Some(v) = input.salary_negotiable {
            j.salary_negotiable = v;
        }
        if let Some(v) = input.is_active {
            j.is_active = v;
        }
        if let Some(s) = input.status.as_deref() {
            j.status = RecordStatus::parse(s)?.as_str().to_string();
        }
        if let Some(skills) = input.skills {
            let skills = trimmed_list(skills);
            ensure_distinct("skills", &skills)?;
            j.skills = skills;
        }
        if let Some(tags) = input.tags {
            let tags = trimmed_list(tags);
            ensure_distinct("tags", &tags)?;
            j.tags = tags;
        }
        j.updated_at = Utc::now().into();
        let updated = self.repo.update(j).await?;
        info!(job_id = %id, "job_updated");
        Ok(updated)
    }

    /// Store each upload under `jobs/` and append the URLs to the gallery.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn add_images(&self, id: Uuid, files: Vec<ImageUpload>) -> Result<job::Model, ServiceError> {
        if files.is_empty() {
            return Err(ServiceError::validation("no files uploaded"));
        }
        let mut j = self.load(id).await?;
        for f in &files {
            let stored = self.media.put(IMAGE_FOLDER, &f.file_name, &f.bytes).await?;
            j.images.push(stored.secure_url);
        }
        j.updated_at = Utc::now().into();
        let updated = self.repo.update(j).await?;
        info!(job_id = %id, images = updated.images.len(), "job_images_added");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove_image(&self, id: Uuid, image_url: &str) -> Result<job::Model, ServiceError> {
        let mut j = self.load(id).await?;
        let before = j.images.len();
        j.images.retain(|u| u != image_url);
        if j.images.len() == before {
            return Err(ServiceError::not_found("image"));
        }
        if let Some(public_id) = self.media.public_id_of(image_url) {
            if let Err(e) = self.media.remove(&public_id).await {
                warn!(error = %e, public_id = %public_id, "stored image removal failed");
            }
        }
        j.updated_at = Utc::now().into();
        let updated = self.repo.update(j).await?;
        info!(job_id = %id, "job_image_removed");
        Ok(updated)
    }

    /// Flip active/inactive and keep `is_active` in step.
    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: Uuid) -> Result<job::Model, ServiceError> {
        let mut j = self.load(id).await?;
        let next = RecordStatus::toggle_str(&j.status);
        j.status = next.as_str().to_string();
        j.is_active = next == RecordStatus::Active;
        j.updated_at = Utc::now().into();
        let updated = self.repo.update(j).await?;
        info!(job_id = %id, status = %updated.status, "job_toggled");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("job"));
        }
        info!(job_id = %id, "job_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_categories::domain::CreateCategory;
    use crate::job_categories::repository::mock::MockJobCategoryRepository;
    use crate::job_categories::JobCategoryService;
    use crate::jobs::repository::mock::MockJobRepository;
    use crate::media::mock::MockMediaStore;

    struct Fixture {
        jobs: JobService<MockJobRepository, MockJobCategoryRepository>,
        categories: JobCategoryService<MockJobCategoryRepository>,
        media: Arc<MockMediaStore>,
    }

    fn fixture() -> Fixture {
        let cats = Arc::new(MockJobCategoryRepository::default());
        let media = Arc::new(MockMediaStore::default());
        Fixture {
            jobs: JobService::new(Arc::new(MockJobRepository::default()), cats.clone(), media.clone()),
            categories: JobCategoryService::new(cats),
            media,
        }
    }

    fn job(title: &str) -> CreateJob { CreateJob { title: title.into(), ..Default::default() } }

    #[tokio::test]
    async fn create_forces_active_and_empty_gallery() {
        let f = fixture();
        let j = f.jobs.create(job("Lập trình viên Rust")).await.unwrap();
        assert_eq!(j.slug, "lap-trinh-vien-rust");
        assert_eq!(j.status, "active");
        assert!(j.is_active);
        assert!(j.images.is_empty());
    }

    #[tokio::test]
    async fn validation_failures() {
        let f = fixture();
        assert!(f.jobs.create(job(" ")).await.is_err());
        let mut bad = job("x");
        bad.salary_min = Some(500);
        bad.salary_max = Some(100);
        assert!(matches!(f.jobs.create(bad).await, Err(ServiceError::Model(_))));
        let mut dup = job("x");
        dup.skills = vec!["go".into(), "go".into()];
        assert!(f.jobs.create(dup).await.is_err());
    }

    #[tokio::test]
    async fn retitle_excludes_self_when_probing() {
        let f = fixture();
        let a = f.jobs.create(job("Tester")).await.unwrap();
        f.jobs.create(job("QA")).await.unwrap();
        let upd = f.jobs.update(a.id, UpdateJob { title: Some("QA".into()), ..Default::default() }).await.unwrap();
        assert_eq!(upd.slug, "qa-1");
        let again = f.jobs.update(a.id, UpdateJob { title: Some("Tester".into()), ..Default::default() }).await.unwrap();
        assert_eq!(again.slug, "tester");
    }

    #[tokio::test]
    async fn partial_update_keeps_salary_rule() {
        let f = fixture();
        let mut input = job("Dev");
        input.salary_min = Some(100);
        let j = f.jobs.create(input).await.unwrap();
        let bad = UpdateJob { salary_max: Some(50), ..Default::default() };
        assert!(f.jobs.update(j.id, bad).await.is_err());
    }

    #[tokio::test]
    async fn toggle_syncs_is_active_and_hides_from_public() {
        let f = fixture();
        let j = f.jobs.create(job("Dev")).await.unwrap();
        let t = f.jobs.toggle_status(j.id).await.unwrap();
        assert_eq!(t.status, "inactive");
        assert!(!t.is_active);
        assert_eq!(f.jobs.list_public(&PublicJobFilter::default()).await.unwrap().total, 0);
        assert!(matches!(f.jobs.view_public("dev").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn public_view_counts() {
        let f = fixture();
        let j = f.jobs.create(job("Dev")).await.unwrap();
        f.jobs.view_public("dev").await.unwrap();
        f.jobs.view_public("dev").await.unwrap();
        assert_eq!(f.jobs.detail(j.id).await.unwrap().job.views, 2);
    }

    #[tokio::test]
    async fn images_are_appended_and_removed() {
        let f = fixture();
        let j = f.jobs.create(job("Dev")).await.unwrap();
        let files = vec![
            ImageUpload { file_name: "a.png".into(), bytes: vec![1] },
            ImageUpload { file_name: "b.jpg".into(), bytes: vec![2] },
        ];
        let j = f.jobs.add_images(j.id, files).await.unwrap();
        assert_eq!(j.images.len(), 2);
        assert!(j.images[0].starts_with("/uploads/jobs/"));
        let url = j.images[0].clone();
        let j = f.jobs.remove_image(j.id, &url).await.unwrap();
        assert_eq!(j.images.len(), 1);
        assert_eq!(f.media.files.lock().unwrap().len(), 1);
        assert!(matches!(f.jobs.remove_image(j.id, &url).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn detail_resolves_category_title() {
        let f = fixture();
        let c = f.categories.create(CreateCategory { title: "IT".into(), description: None, status: None }).await.unwrap();
        let mut input = job("Dev");
        input.category_id = Some(c.id);
        let j = f.jobs.create(input).await.unwrap();
        assert_eq!(f.jobs.detail(j.id).await.unwrap().category_title.as_deref(), Some("IT"));
    }

    #[test]
    fn public_dto_hides_admin_fields() {
        let now = Utc::now().into();
        let model = job::Model {
            id: Uuid::new_v4(),
            title: "t".into(),
            slug: "t".into(),
            description: None,
            requirements: None,
            benefits: None,
            quantity: None,
            salary_min: None,
            salary_max: None,
            salary_type: None,
            salary_negotiable: false,
            career: None,
            category_id: None,
            level: None,
            job_type: None,
            location: None,
            address: None,
            deadline: None,
            is_active: true,
            status: "active".into(),
            reason_reject: Some("r".into()),
            views: 3,
            skills: vec![],
            tags: vec![],
            images: vec![],
            recruiter_id: None,
            deleted: false,
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(PublicJob::from(model)).unwrap();
        for hidden in ["deleted", "status", "reasonReject", "views", "isActive"] {
            assert!(v.get(hidden).is_none(), "{hidden} leaked");
        }
        assert!(v.get("slug").is_some());
    }

    #[tokio::test]
    async fn public_listing_survives_absurd_page_numbers() {
        let f = fixture();
        f.jobs.create(job("Backend")).await.unwrap();
        let filter = PublicJobFilter { page: Some(u64::MAX), limit: Some(10), ..Default::default() };
        let page = f.jobs.list_public(&filter).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 1);
    }
}
