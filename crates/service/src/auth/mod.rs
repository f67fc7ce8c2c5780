//! Admin authentication: password hashing, JWT issue/verify, login and the
//! bootstrap administrator.

pub mod domain;
pub mod password;
pub mod service;
pub mod token;

pub use service::AuthService;
