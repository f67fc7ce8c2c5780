//! Migrator registering table migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_identity;
mod m20240301_000002_create_jobs;
mod m20240301_000003_create_content;
mod m20240301_000004_create_commerce;
mod m20240301_000005_create_holland;
mod m20240301_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_identity::Migration),
            Box::new(m20240301_000002_create_jobs::Migration),
            Box::new(m20240301_000003_create_content::Migration),
            Box::new(m20240301_000004_create_commerce::Migration),
            Box::new(m20240301_000005_create_holland::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000010_add_indexes::Migration),
        ]
    }
}
