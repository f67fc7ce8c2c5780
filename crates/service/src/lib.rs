//! Business operations of the recruitment platform.
//!
//! Every domain follows the same split: `domain` holds request and filter
//! types, `repository` a trait with a SeaORM implementation and an in-memory
//! mock, and `service` the rules (validation, slugs, media, scoring).

pub mod errors;
pub mod pagination;
pub mod filters;
pub mod slug;
pub mod media;

pub mod auth;
pub mod accounts;
pub mod roles;
pub mod job_categories;
pub mod jobs;
pub mod recruiters;
pub mod cv_samples;
pub mod blogs;
pub mod banners;
pub mod job_packages;
pub mod holland;
pub mod site_settings;

#[cfg(test)]
pub mod test_support;
