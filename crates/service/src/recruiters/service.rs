use std::sync::Arc;

use chrono::Utc;
use models::account::{normalize_email, validate_password};
use models::errors::require_text;
use models::recruiter;
use models::status::RecordStatus;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{CreateRecruiter, RecruiterFilter, UpdateRecruiter};
use super::repository::RecruiterRepository;
use crate::auth::password::hash_password;
use crate::errors::ServiceError;
use crate::media::{ImageUpload, MediaStore};
use crate::pagination::Page;

pub const AVATAR_FOLDER: &str = "recruiters";

pub struct RecruiterService<R: RecruiterRepository> {
    repo: Arc<R>,
    media: Arc<dyn MediaStore>,
}

fn set_text(slot: &mut String, field: &str, value: Option<String>) -> Result<(), ServiceError> {
    if let Some(v) = value {
        require_text(field, &v)?;
        *slot = v.trim().to_string();
    }
    Ok(())
}

impl<R: RecruiterRepository> RecruiterService<R> {
    pub fn new(repo: Arc<R>, media: Arc<dyn MediaStore>) -> Self { Self { repo, media } }

    pub async fn list(&self, filter: &RecruiterFilter) -> Result<Page<recruiter::Model>, ServiceError> {
        self.repo.list(filter).await
    }

    pub async fn get(&self, id: Uuid) -> Result<recruiter::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("recruiter"))
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateRecruiter) -> Result<recruiter::Model, ServiceError> {
        for (field, value) in [
            ("fullName", &input.full_name),
            ("gender", &input.gender),
            ("phone", &input.phone),
            ("company", &input.company),
        ] {
            require_text(field, value)?;
        }
        let email = normalize_email(&input.email)?;
        validate_password(&input.password)?;
        let status = match input.status.as_deref() {
            Some(s) => RecordStatus::parse(s)?,
            None => RecordStatus::Active,
        };
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ServiceError::conflict(format!("email '{email}' already in use")));
        }
        let now = Utc::now().into();
        let created = self
            .repo
            .insert(recruiter::Model {
                id: Uuid::new_v4(),
                full_name: input.full_name.trim().to_string(),
                gender: input.gender.trim().to_string(),
                email,
                password_hash: hash_password(&input.password)?,
                phone: input.phone.trim().to_string(),
                company: input.company.trim().to_string(),
                province: input.province,
                district: input.district,
                status: status.as_str().to_string(),
                avatar: None,
                deleted: false,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(recruiter_id = %created.id, "recruiter_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateRecruiter) -> Result<recruiter::Model, ServiceError> {
        let mut r = self.get(id).await?;
        if let Some(email) = input.email.as_deref() {
            let email = normalize_email(email)?;
            if email != r.email {
                if self.repo.find_by_email(&email).await?.is_some() {
                    return Err(ServiceError::conflict(format!("email '{email}' already in use")));
                }
                r.email = email;
            }
        }
        if let Some(pw) = input.password.as_deref() {
            validate_password(pw)?;
            r.password_hash = hash_password(pw)?;
        }
        set_text(&mut r.full_name, "fullName", input.full_name)?;
        set_text(&mut r.gender, "gender", input.gender)?;
        set_text(&mut r.phone, "phone", input.phone)?;
        set_text(&mut r.company, "company", input.company)?;
        if input.province.is_some() {
            r.province = input.province;
        }
        if input.district.is_some() {
            r.district = input.district;
        }
        if let Some(s) = input.status.as_deref() {
            r.status = RecordStatus::parse(s)?.as_str().to_string();
        }
        r.updated_at = Utc::now().into();
        let updated = self.repo.update(r).await?;
        info!(recruiter_id = %id, "recruiter_updated");
        Ok(updated)
    }

    async fn drop_stored(&self, url: &str) {
        if let Some(public_id) = self.media.public_id_of(url) {
            if let Err(e) = self.media.remove(&public_id).await {
                warn!(error = %e, public_id = %public_id, "stored avatar removal failed");
            }
        }
    }

    #[instrument(skip(self, upload), fields(file = %upload.file_name))]
    pub async fn update_avatar(&self, id: Uuid, upload: ImageUpload) -> Result<recruiter::Model, ServiceError> {
        let mut r = self.get(id).await?;
        let stored = self.media.put(AVATAR_FOLDER, &upload.file_name, &upload.bytes).await?;
        if let Some(old) = r.avatar.replace(stored.secure_url) {
            self.drop_stored(&old).await;
        }
        r.updated_at = Utc::now().into();
        let updated = self.repo.update(r).await?;
        info!(recruiter_id = %id, "recruiter_avatar_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove_avatar(&self, id: Uuid) -> Result<recruiter::Model, ServiceError> {
        let mut r = self.get(id).await?;
        if let Some(old) = r.avatar.take() {
            self.drop_stored(&old).await;
        }
        r.updated_at = Utc::now().into();
        let updated = self.repo.update(r).await?;
        info!(recruiter_id = %id, "recruiter_avatar_removed");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: Uuid) -> Result<recruiter::Model, ServiceError> {
        let mut r = self.get(id).await?;
        r.status = RecordStatus::toggle_str(&r.status).as_str().to_string();
        r.updated_at = Utc::now().into();
        self.repo.update(r).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("recruiter"));
        }
        info!(recruiter_id = %id, "recruiter_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::mock::MockMediaStore;
    use crate::recruiters::repository::mock::MockRecruiterRepository;

    fn fixture() -> (RecruiterService<MockRecruiterRepository>, Arc<MockMediaStore>) {
        let media = Arc::new(MockMediaStore::default());
        (RecruiterService::new(Arc::new(MockRecruiterRepository::default()), media.clone()), media)
    }

    fn input(email: &str) -> CreateRecruiter {
        CreateRecruiter {
            full_name: "Nguyễn Văn A".into(),
            gender: "male".into(),
            email: email.into(),
            password: "Secret123".into(),
            phone: "0900000000".into(),
            company: "ACME".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn required_fields_and_duplicate_email() {
        let (svc, _) = fixture();
        let mut missing = input("a@x.com");
        missing.company = " ".into();
        assert!(svc.create(missing).await.is_err());
        svc.create(input("a@x.com")).await.unwrap();
        assert!(matches!(svc.create(input("A@x.com")).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn avatar_replace_drops_previous_file() {
        let (svc, media) = fixture();
        let r = svc.create(input("a@x.com")).await.unwrap();
        let up = |n: &str| ImageUpload { file_name: n.into(), bytes: vec![7] };
        svc.update_avatar(r.id, up("one.png")).await.unwrap();
        let r = svc.update_avatar(r.id, up("two.png")).await.unwrap();
        assert_eq!(media.files.lock().unwrap().len(), 1);
        let r = svc.remove_avatar(r.id).await.unwrap();
        assert!(r.avatar.is_none());
        assert!(media.files.lock().unwrap().is_empty());
        // nothing stored any more; clearing again still succeeds
        assert!(svc.remove_avatar(r.id).await.is_ok());
    }

    #[tokio::test]
    async fn search_matches_full_name() {
        let (svc, _) = fixture();
        svc.create(input("a@x.com")).await.unwrap();
        let f = RecruiterFilter { search: Some("văn".into()), ..Default::default() };
        assert_eq!(svc.list(&f).await.unwrap().total, 1);
    }
}
