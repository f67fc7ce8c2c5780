//! Banner advertising: packages, placed orders and the banners approval
//! produces.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::BannerService;
