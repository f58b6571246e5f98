//! Record store - the persistence seam between handlers and SQLite
//!
//! Handlers only see [`RecordStore`], so they can be exercised against any
//! implementation. [`SqliteStore`] is the one the server runs with.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::repos::{CoffeeRepo, MachineRepo};
use crate::models::{Coffee, Machine, NewCoffee, NewMachine};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Read/create/update operations over coffees and machines.
///
/// Every call is an independent statement; nothing here is transactional.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All coffees in insertion order.
    async fn list_coffees(&self) -> Result<Vec<Coffee>, StoreError>;

    /// Coffee by id, `None` when no row matches.
    async fn get_coffee(&self, id: i64) -> Result<Option<Coffee>, StoreError>;

    /// Non-null roaster of every coffee, duplicates kept.
    async fn list_roaster_names(&self) -> Result<Vec<String>, StoreError>;

    /// Coffees whose roaster equals `roaster` exactly.
    async fn list_coffees_by_roaster(&self, roaster: &str) -> Result<Vec<Coffee>, StoreError>;

    /// Insert a coffee and return it with its assigned id.
    async fn insert_coffee(&self, new: NewCoffee) -> Result<Coffee, StoreError>;

    /// Rename coffee `id`. `false` means no row matched.
    async fn update_coffee_name(&self, id: i64, name: &str) -> Result<bool, StoreError>;

    /// All machines in insertion order.
    async fn list_machines(&self) -> Result<Vec<Machine>, StoreError>;

    /// Stored machine for `(vendor, name)`, inserted from `new` if absent.
    async fn insert_or_get_machine(&self, new: NewMachine) -> Result<Machine, StoreError>;

    /// Cheap round trip to check the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`RecordStore`] over a SQLite pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close all connections. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list_coffees(&self) -> Result<Vec<Coffee>, StoreError> {
        Ok(CoffeeRepo::new(&self.pool).list().await?)
    }

    async fn get_coffee(&self, id: i64) -> Result<Option<Coffee>, StoreError> {
        Ok(CoffeeRepo::new(&self.pool).get(id).await?)
    }

    async fn list_roaster_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(CoffeeRepo::new(&self.pool).roaster_names().await?)
    }

    async fn list_coffees_by_roaster(&self, roaster: &str) -> Result<Vec<Coffee>, StoreError> {
        Ok(CoffeeRepo::new(&self.pool).list_by_roaster(roaster).await?)
    }

    async fn insert_coffee(&self, new: NewCoffee) -> Result<Coffee, StoreError> {
        Ok(CoffeeRepo::new(&self.pool).insert(new).await?)
    }

    async fn update_coffee_name(&self, id: i64, name: &str) -> Result<bool, StoreError> {
        Ok(CoffeeRepo::new(&self.pool).update_name(id, name).await?)
    }

    async fn list_machines(&self) -> Result<Vec<Machine>, StoreError> {
        Ok(MachineRepo::new(&self.pool).list().await?)
    }

    async fn insert_or_get_machine(&self, new: NewMachine) -> Result<Machine, StoreError> {
        Ok(MachineRepo::new(&self.pool).insert_or_get(new).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, open_pool, MEMORY_DATABASE};

    async fn store() -> SqliteStore {
        let pool = open_pool(MEMORY_DATABASE).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        SqliteStore::new(pool)
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let store: Box<dyn RecordStore> = Box::new(store().await);

        let coffee = store
            .insert_coffee(NewCoffee {
                name: "Gesha".into(),
                roaster: "Acme".into(),
            })
            .await
            .unwrap();
        let machine = store
            .insert_or_get_machine(NewMachine {
                vendor: "Acme".into(),
                name: "Classic".into(),
                image_url: None,
            })
            .await
            .unwrap();

        assert_eq!(store.list_coffees().await.unwrap(), vec![coffee.clone()]);
        assert_eq!(store.get_coffee(coffee.id).await.unwrap(), Some(coffee));
        assert_eq!(store.list_roaster_names().await.unwrap(), vec!["Acme"]);
        assert_eq!(store.list_coffees_by_roaster("Acme").await.unwrap().len(), 1);
        assert_eq!(store.list_machines().await.unwrap(), vec![machine]);
    }

    #[tokio::test]
    async fn closed_store_reports_errors() {
        let store = store().await;
        assert!(store.ping().await.is_ok());
        store.close().await;

        assert!(store.ping().await.is_err());

        let err = store.list_coffees().await.unwrap_err();
        assert!(matches!(err, StoreError::Sqlx(sqlx::Error::PoolClosed)));
    }
}
