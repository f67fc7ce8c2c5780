//! Holland (RIASEC) career test: questions, result profiles and submissions.

pub mod domain;
pub mod repository;
pub mod scoring;
pub mod service;

pub use service::HollandService;
