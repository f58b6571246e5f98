//! SQLite connection pool management

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database name that selects a private in-memory database.
pub const MEMORY_DATABASE: &str = ":memory:";

/// Open a SQLite pool for `database` (a file path or [`MEMORY_DATABASE`]).
///
/// The file is created if it does not exist. Its parent directory must.
///
/// # Example
///
/// ```ignore
/// let pool = open_pool("coffees.db").await?;
/// ```
pub async fn open_pool(database: &str) -> Result<SqlitePool, sqlx::Error> {
    open_pool_with_options(database, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a SQLite pool with a custom connection limit.
///
/// An in-memory database lives only as long as its connection, so it is
/// always served by one connection that is never recycled.
pub async fn open_pool_with_options(
    database: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    if database == MEMORY_DATABASE {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    let options = SqliteConnectOptions::new()
        .filename(database)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}
