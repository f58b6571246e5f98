//! Machine endpoints

use axum::{extract::State, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::response::PrettyJson;
use crate::models::{Machine, NewMachine};
use crate::state::AppState;

/// GET /machines - list all machines
async fn list_machines(State(state): State<AppState>) -> Result<PrettyJson<Vec<Machine>>, ApiError> {
    let machines = state.store().list_machines().await?;
    Ok(PrettyJson(machines))
}

/// POST /machines - return the machine for `(vendor, name)`, creating it if new
async fn create_machine(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewMachine>,
) -> Result<PrettyJson<Machine>, ApiError> {
    tracing::debug!(vendor = %req.vendor, name = %req.name, image_url = ?req.image_url, "insert machine");
    let machine = state.store().insert_or_get_machine(req).await?;
    Ok(PrettyJson(machine))
}

/// Machine routes
pub fn router() -> Router<AppState> {
    Router::new().route("/machines", get(list_machines).post(create_machine))
}
