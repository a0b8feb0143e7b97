//! PostgreSQL storage for the VSP registry.
//!
//! One table per collection (`vsp`, `objects`, `repairs`,
//! `maintenance_plans`, `work_logs`, `photos`, `maps`) plus the
//! `collection_counters` table backing identifier assignment.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Default pool size when the caller does not override it.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
///
/// When `database_name` is given it replaces the database named in the URL,
/// so one server URL can be pointed at different databases.
pub async fn create_pool(
    database_url: &str,
    database_name: Option<&str>,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;
    if let Some(name) = database_name {
        options = options.database(name);
    }

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
