//! HTTP surface of the recruitment platform: axum routes, admin guard,
//! metrics and OpenAPI docs over the `service` crate.

pub mod auth;
pub mod errors;
pub mod extract;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
