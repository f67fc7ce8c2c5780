//! Job postings: admin management, image gallery and the public board.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::JobService;
