//! Database layer - connection pool, schema bootstrap and the record store
//!
//! # Design Principles
//!
//! - One process-wide pool, handed to handlers through `AppState`
//! - Every operation is a single, independent statement (no transactions)
//! - The store owns all SQL text; handlers never see a query

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use pool::{open_pool, open_pool_with_options, MEMORY_DATABASE};
pub use schema::ensure_schema;
pub use store::{RecordStore, SqliteStore, StoreError};
