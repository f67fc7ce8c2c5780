//! Paid job-posting packages.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::JobPackageService;
