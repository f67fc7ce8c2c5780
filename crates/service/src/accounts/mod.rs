//! Admin-managed login accounts.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::AccountService;
