//! Machine repository
//!
//! Insert is deduplicated on (vendor, name), first write wins:
//! - look the pair up, return the stored row if there is one
//! - otherwise insert and return the new row
//! - if the insert loses a race to another writer (unique index), return
//!   the winner's row

use sqlx::SqlitePool;

use crate::models::{Machine, NewMachine};

/// Machine repository
pub struct MachineRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MachineRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All machines, empty when the table is.
    pub async fn list(&self) -> Result<Vec<Machine>, sqlx::Error> {
        sqlx::query_as::<_, Machine>("SELECT id, vendor, name, image_url FROM machines ORDER BY id")
            .fetch_all(self.pool)
            .await
    }

    /// First machine stored for an exact (vendor, name) pair.
    pub async fn find(&self, vendor: &str, name: &str) -> Result<Option<Machine>, sqlx::Error> {
        sqlx::query_as::<_, Machine>(
            r#"
            SELECT id, vendor, name, image_url
            FROM machines
            WHERE vendor = ? AND name = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(vendor)
        .bind(name)
        .fetch_optional(self.pool)
        .await
    }

    /// Return the stored machine for the pair, inserting it if absent.
    ///
    /// An existing row is returned unchanged; the `image_url` on `new` is
    /// ignored in that case.
    pub async fn insert_or_get(&self, new: NewMachine) -> Result<Machine, sqlx::Error> {
        if let Some(existing) = self.find(&new.vendor, &new.name).await? {
            tracing::debug!(id = existing.id, vendor = %existing.vendor, name = %existing.name, "machine already recorded");
            return Ok(existing);
        }

        match self.insert(&new).await {
            Ok(machine) => Ok(machine),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                match self.find(&new.vendor, &new.name).await? {
                    Some(existing) => Ok(existing),
                    None => Err(sqlx::Error::Database(e)),
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn insert(&self, new: &NewMachine) -> Result<Machine, sqlx::Error> {
        sqlx::query_as::<_, Machine>(
            r#"
            INSERT INTO machines (vendor, name, image_url)
            VALUES (?, ?, ?)
            RETURNING id, vendor, name, image_url
            "#,
        )
        .bind(&new.vendor)
        .bind(&new.name)
        .bind(&new.image_url)
        .fetch_one(self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, open_pool, MEMORY_DATABASE};

    async fn pool() -> SqlitePool {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    fn new_machine(vendor: &str, name: &str, image_url: Option<&str>) -> NewMachine {
        NewMachine {
            vendor: vendor.into(),
            name: name.into(),
            image_url: image_url.map(String::from),
        }
    }

    #[tokio::test]
    async fn first_write_wins() {
        let pool = pool().await;
        let repo = MachineRepo::new(&pool);

        let first = repo
            .insert_or_get(new_machine("Acme", "Classic", Some("img1")))
            .await
            .unwrap();
        let second = repo
            .insert_or_get(new_machine("Acme", "Classic", Some("img2")))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.image_url.as_deref(), Some("img1"));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn pair_match_is_exact() {
        let pool = pool().await;
        let repo = MachineRepo::new(&pool);

        let a = repo.insert_or_get(new_machine("Acme", "Classic", None)).await.unwrap();
        let b = repo.insert_or_get(new_machine("acme", "Classic", None)).await.unwrap();
        let c = repo.insert_or_get(new_machine("Acme", "Classic II", None)).await.unwrap();
        let d = repo.insert_or_get(new_machine("Classic", "Acme", None)).await.unwrap();

        let ids = [a.id, b.id, c.id, d.id];
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(repo.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn null_image_url_is_stored_as_null() {
        let pool = pool().await;
        let repo = MachineRepo::new(&pool);

        let machine = repo.insert_or_get(new_machine("Acme", "Classic", None)).await.unwrap();
        let stored = repo.find("Acme", "Classic").await.unwrap().unwrap();

        assert_eq!(stored, machine);
        assert_eq!(stored.image_url, None);
    }

    #[tokio::test]
    async fn returns_first_of_legacy_duplicates() {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        sqlx::query("CREATE TABLE machines (id INTEGER PRIMARY KEY AUTOINCREMENT, vendor TEXT, name TEXT, image_url TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        for img in ["old", "newer"] {
            sqlx::query("INSERT INTO machines (vendor, name, image_url) VALUES ('Acme', 'Classic', ?)")
                .bind(img)
                .execute(&pool)
                .await
                .unwrap();
        }
        ensure_schema(&pool).await.unwrap();

        let machine = MachineRepo::new(&pool)
            .insert_or_get(new_machine("Acme", "Classic", Some("x")))
            .await
            .unwrap();
        assert_eq!(machine.id, 1);
        assert_eq!(machine.image_url.as_deref(), Some("old"));
    }
}
