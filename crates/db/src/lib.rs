//! Persistence for outfits, favorites and user accounts.
//!
//! Handlers depend on the traits in [`store`]; the concrete backend is
//! chosen at startup:
//!
//! - [`backends::postgres::PgStore`] -- PostgreSQL via the repositories in
//!   [`repositories`].
//! - [`backends::json_file::JsonFileStore`] -- flat JSON files in a data
//!   directory, for local development without a database.

pub mod backends;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;
pub use store::{FavoritesStore, OutfitStore, Storage, UserStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
