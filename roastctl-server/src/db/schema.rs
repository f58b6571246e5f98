//! Schema bootstrap
//!
//! Runs once at startup, before the server accepts requests. Each table is
//! probed with a trivial read; a failing probe means the table is created.

use sqlx::SqlitePool;

const CREATE_COFFEES: &str = r#"
    CREATE TABLE coffees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        roaster TEXT NOT NULL,
        roaster_location TEXT,
        origin TEXT,
        image_url TEXT
    )
"#;

const CREATE_MACHINES: &str = r#"
    CREATE TABLE machines (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vendor TEXT NOT NULL,
        name TEXT NOT NULL,
        image_url TEXT
    )
"#;

const CREATE_MACHINE_KEY_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS machines_vendor_name ON machines (vendor, name)";

/// Make sure `coffees` and `machines` exist.
///
/// # Errors
///
/// Returns the `CREATE TABLE` error if a missing table cannot be created.
/// Callers treat this as fatal.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    ensure_table(pool, "coffees", CREATE_COFFEES).await?;
    ensure_table(pool, "machines", CREATE_MACHINES).await?;

    // Databases carrying duplicate (vendor, name) pairs cannot take the
    // index; lookups still dedup new inserts for them.
    if let Err(e) = sqlx::query(CREATE_MACHINE_KEY_INDEX).execute(pool).await {
        tracing::warn!(error = %e, "could not create unique (vendor, name) index on machines");
    }

    Ok(())
}

async fn ensure_table(pool: &SqlitePool, table: &str, ddl: &str) -> Result<(), sqlx::Error> {
    let probe = format!("SELECT 1 FROM {} LIMIT 1", table);
    if let Err(e) = sqlx::query(&probe).fetch_optional(pool).await {
        tracing::info!(table, reason = %e, "table probe failed, creating table");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::{open_pool, MEMORY_DATABASE};

    async fn table_exists(pool: &SqlitePool, table: &str) -> bool {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(table)
                .fetch_one(pool)
                .await
                .unwrap();
        count == 1
    }

    #[tokio::test]
    async fn creates_both_tables() {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        assert!(table_exists(&pool, "coffees").await);
        assert!(table_exists(&pool, "machines").await);
    }

    #[tokio::test]
    async fn is_idempotent() {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO coffees (name, roaster) VALUES ('a', 'b')")
            .execute(&pool)
            .await
            .unwrap();

        ensure_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM coffees")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn keeps_existing_tables() {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        sqlx::query("CREATE TABLE coffees (id INTEGER PRIMARY KEY, name TEXT, roaster TEXT, roaster_location TEXT, origin TEXT, image_url TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO coffees (name, roaster) VALUES ('a', NULL)")
            .execute(&pool)
            .await
            .unwrap();

        ensure_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM coffees")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert!(table_exists(&pool, "machines").await);
    }

    #[tokio::test]
    async fn machine_key_is_unique() {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let insert = "INSERT INTO machines (vendor, name) VALUES ('Acme', 'Classic')";
        sqlx::query(insert).execute(&pool).await.unwrap();
        assert!(sqlx::query(insert).execute(&pool).await.is_err());
    }

    #[tokio::test]
    async fn duplicate_legacy_machines_do_not_block_startup() {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        sqlx::query("CREATE TABLE machines (id INTEGER PRIMARY KEY AUTOINCREMENT, vendor TEXT, name TEXT, image_url TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        for _ in 0..2 {
            sqlx::query("INSERT INTO machines (vendor, name) VALUES ('Acme', 'Classic')")
                .execute(&pool)
                .await
                .unwrap();
        }

        assert!(ensure_schema(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn fails_when_table_cannot_be_created() {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        pool.close().await;

        assert!(ensure_schema(&pool).await.is_err());
    }
}
