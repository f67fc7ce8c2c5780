//! Recruiter accounts managed from the admin console.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::RecruiterService;
