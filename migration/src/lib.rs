pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20261019_000001_link_tables;

/// Display name of the pre-seeded creator that owns every URL submitted
/// without an explicit creator.
pub const ANONYMOUS_CREATOR: &str = "anonymous";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261019_000001_link_tables::Migration)]
    }
}
