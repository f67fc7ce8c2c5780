//! Job categories with unique slugs and an active/inactive flag.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::JobCategoryService;
