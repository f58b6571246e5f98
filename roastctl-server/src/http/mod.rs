//! HTTP server layer
//!
//! Axum server with:
//! - `/api/v1` resource routes plus `/health`
//! - Request tracing
//! - Graceful shutdown
//! - Pretty-printed JSON bodies, bodiless error responses

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use response::PrettyJson;
pub use server::{build_router, run_server, ServerConfig, ServerError};
