//! Store initialization.
//!
//! The schedule store lives in an in-memory SQLite database. The pool holds a
//! single connection that is never recycled, because every new in-memory
//! connection would start from an empty database.

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub async fn connect_in_memory() -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<std::time::Duration>)
        .max_lifetime(None::<std::time::Duration>)
        .connect_with(connect_options)
        .await?;

    tracing::info!("Running store migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
