//! Branding and notice banner shared by the public sites.

pub mod repository;
pub mod service;

pub use service::{SiteSettingsPatch, SiteSettingsService};
