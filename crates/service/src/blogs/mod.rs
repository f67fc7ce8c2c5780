//! Blog posts with unique slugs and a publish flag.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::BlogService;
