use std::sync::Arc;

use chrono::Utc;
use models::site_setting::{self, validate_color};
use serde::Deserialize;
use tracing::{info, instrument};

use super::repository::SiteSettingsRepository;
use crate::errors::ServiceError;

/// Partial update; an empty string clears an optional field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsPatch {
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub client_title: Option<String>,
    pub recruiter_title: Option<String>,
    pub notice_enabled: Option<bool>,
    pub notice_message: Option<String>,
    pub notice_color: Option<String>,
}

fn apply(slot: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        let v = v.trim();
        *slot = if v.is_empty() { None } else { Some(v.to_string()) };
    }
}

pub struct SiteSettingsService<R: SiteSettingsRepository> {
    repo: Arc<R>,
}

impl<R: SiteSettingsRepository> SiteSettingsService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Stored settings, or defaults when none were saved yet.
    pub async fn get(&self) -> Result<site_setting::Model, ServiceError> {
        Ok(self.repo.load().await?.unwrap_or_default())
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, patch: SiteSettingsPatch) -> Result<site_setting::Model, ServiceError> {
        let mut s = self.get().await?;
        apply(&mut s.logo_url, patch.logo_url);
        apply(&mut s.favicon_url, patch.favicon_url);
        apply(&mut s.client_title, patch.client_title);
        apply(&mut s.recruiter_title, patch.recruiter_title);
        apply(&mut s.notice_message, patch.notice_message);
        apply(&mut s.notice_color, patch.notice_color);
        if let Some(color) = s.notice_color.as_deref() {
            validate_color(color)?;
        }
        s.notice_enabled = patch.notice_enabled.unwrap_or(s.notice_enabled);
        s.updated_at = Some(Utc::now().into());
        let saved = self.repo.save(s).await?;
        info!(notice_enabled = saved.notice_enabled, "site_settings_updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_settings::repository::mock::MockSiteSettingsRepository;

    fn svc() -> SiteSettingsService<MockSiteSettingsRepository> {
        SiteSettingsService::new(Arc::new(MockSiteSettingsRepository::default()))
    }

    #[tokio::test]
    async fn defaults_before_first_save() {
        let s = svc().get().await.unwrap();
        assert!(!s.notice_enabled);
        assert!(s.logo_url.is_none());
        assert!(s.updated_at.is_none());
    }

    #[tokio::test]
    async fn patch_merges_and_clears() {
        let svc = svc();
        svc.update(SiteSettingsPatch { client_title: Some("Jobs".into()), logo_url: Some("/uploads/site/l.png".into()), ..Default::default() })
            .await
            .unwrap();
        let s = svc
            .update(SiteSettingsPatch { notice_enabled: Some(true), logo_url: Some("".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(s.client_title.as_deref(), Some("Jobs"));
        assert!(s.logo_url.is_none());
        assert!(s.notice_enabled);
        assert_eq!(svc.get().await.unwrap(), s);
    }

    #[tokio::test]
    async fn notice_color_is_validated() {
        let svc = svc();
        assert!(svc.update(SiteSettingsPatch { notice_color: Some("red".into()), ..Default::default() }).await.is_err());
        let s = svc.update(SiteSettingsPatch { notice_color: Some("#f5a".into()), ..Default::default() }).await.unwrap();
        assert_eq!(s.notice_color.as_deref(), Some("#f5a"));
    }
}
