//! SeaORM entities of the recruitment platform.
//!
//! Each module is one table: the entity definition, its string enums and the
//! field validation shared by the service layer. References between tables are
//! plain UUID columns without foreign keys.

pub mod errors;
pub mod db;
pub mod status;
pub mod account;
pub mod role;
pub mod job_category;
pub mod job;
pub mod recruiter;
pub mod cv_sample;
pub mod blog;
pub mod banner_package;
pub mod banner;
pub mod banner_order;
pub mod job_package;
pub mod holland_question;
pub mod holland_profile;
pub mod holland_result;
pub mod site_setting;

#[cfg(test)]
mod tests;
