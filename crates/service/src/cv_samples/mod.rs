//! CV templates (HTML + CSS) offered to candidates.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CvSampleService;
