//! roastctl-server: HTTP API over coffees, roasters and brewing machines
//!
//! Layers, leaves first:
//! - `db::schema` creates the tables at startup
//! - `db::store` owns every query and null-handling rule
//! - `http` maps routes to one store call each and results to status codes

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{ensure_schema, open_pool, RecordStore, SqliteStore, StoreError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{Coffee, Machine};
pub use state::AppState;
