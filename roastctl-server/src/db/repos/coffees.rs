//! Coffee repository
//!
//! No uniqueness is enforced for coffees: the same (name, roaster) pair can
//! be inserted any number of times and yields distinct rows.

use sqlx::SqlitePool;

use crate::models::{Coffee, NewCoffee};

/// Coffee repository
pub struct CoffeeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CoffeeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All coffees, empty when the table is.
    pub async fn list(&self) -> Result<Vec<Coffee>, sqlx::Error> {
        sqlx::query_as::<_, Coffee>(
            r#"
            SELECT id, name, roaster, roaster_location, origin AS origins, image_url
            FROM coffees
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await
    }

    /// Coffee by primary key, `None` when nothing matches.
    pub async fn get(&self, id: i64) -> Result<Option<Coffee>, sqlx::Error> {
        sqlx::query_as::<_, Coffee>(
            r#"
            SELECT id, name, roaster, roaster_location, origin AS origins, image_url
            FROM coffees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    /// Roaster of every coffee row, NULLs skipped and duplicates kept.
    pub async fn roaster_names(&self) -> Result<Vec<String>, sqlx::Error> {
        let roasters: Vec<Option<String>> =
            sqlx::query_scalar("SELECT roaster FROM coffees ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(roasters.into_iter().flatten().collect())
    }

    /// Coffees whose roaster is exactly `roaster` (case-sensitive).
    pub async fn list_by_roaster(&self, roaster: &str) -> Result<Vec<Coffee>, sqlx::Error> {
        sqlx::query_as::<_, Coffee>(
            r#"
            SELECT id, name, roaster, roaster_location, origin AS origins, image_url
            FROM coffees
            WHERE roaster = ?
            ORDER BY id
            "#,
        )
        .bind(roaster)
        .fetch_all(self.pool)
        .await
    }

    /// Insert a coffee; only `name` and `roaster` are persisted.
    pub async fn insert(&self, new: NewCoffee) -> Result<Coffee, sqlx::Error> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO coffees (name, roaster) VALUES (?, ?) RETURNING id")
                .bind(&new.name)
                .bind(&new.roaster)
                .fetch_one(self.pool)
                .await?;

        Ok(Coffee::inserted(id, new))
    }

    /// Set the name of coffee `id`. Returns whether any row matched.
    pub async fn update_name(&self, id: i64, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE coffees SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
