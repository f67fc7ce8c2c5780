//! Roles: named, free-form permission sets referenced by accounts.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::RoleService;
