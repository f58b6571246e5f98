//! Coffee endpoints

use axum::{extract::State, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::response::PrettyJson;
use crate::models::{Coffee, CoffeeNameUpdate, NewCoffee};
use crate::state::AppState;

/// GET /coffees - list all coffees
async fn list_coffees(State(state): State<AppState>) -> Result<PrettyJson<Vec<Coffee>>, ApiError> {
    let coffees = state.store().list_coffees().await?;
    Ok(PrettyJson(coffees))
}

/// GET /coffees/{id} - a single coffee
///
/// An id that matches nothing yields the zero-valued coffee with 200, not
/// a 404. Clients depend on this.
async fn get_coffee(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<PrettyJson<Coffee>, ApiError> {
    let coffee = state.store().get_coffee(id).await?.unwrap_or_default();
    Ok(PrettyJson(coffee))
}

/// POST /coffees - create a coffee from `{name, roaster}`
async fn create_coffee(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewCoffee>,
) -> Result<PrettyJson<Coffee>, ApiError> {
    tracing::debug!(name = %req.name, roaster = %req.roaster, "insert coffee");
    let coffee = state.store().insert_coffee(req).await?;
    Ok(PrettyJson(coffee))
}

/// PUT /coffees/{id} - rename a coffee
async fn update_coffee(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(req): JsonBody<CoffeeNameUpdate>,
) -> Result<PrettyJson<Coffee>, ApiError> {
    let not_found = || ApiError::NotFound {
        resource: "coffee",
        id,
    };

    if !state.store().update_coffee_name(id, &req.name).await? {
        return Err(not_found());
    }

    let coffee = state.store().get_coffee(id).await?.ok_or_else(not_found)?;
    Ok(PrettyJson(coffee))
}

/// Coffee routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/coffees", get(list_coffees).post(create_coffee))
        .route("/coffees/{id}", get(get_coffee).put(update_coffee))
}
