//! Database migrations.
//!
//! Each service owns its database, so each gets its own migrator.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_movies_table;

/// Migrations for the auth service database.
pub struct AuthMigrator;

#[async_trait::async_trait]
impl MigratorTrait for AuthMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_users_table::Migration)]
    }
}

/// Migrations for the movies service database.
pub struct MoviesMigrator;

#[async_trait::async_trait]
impl MigratorTrait for MoviesMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000002_create_movies_table::Migration)]
    }
}
