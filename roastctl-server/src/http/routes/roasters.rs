//! Roaster endpoints - views over the coffees table

use axum::{extract::State, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::extractors::PathSegment;
use crate::http::response::PrettyJson;
use crate::models::Coffee;
use crate::state::AppState;

/// GET /roasters - roaster of every coffee (duplicates kept)
async fn list_roasters(State(state): State<AppState>) -> Result<PrettyJson<Vec<String>>, ApiError> {
    let roasters = state.store().list_roaster_names().await?;
    Ok(PrettyJson(roasters))
}

/// GET /roasters/{roaster} - coffees from one roaster
async fn list_coffees_by_roaster(
    State(state): State<AppState>,
    PathSegment(roaster): PathSegment,
) -> Result<PrettyJson<Vec<Coffee>>, ApiError> {
    let coffees = state.store().list_coffees_by_roaster(&roaster).await?;
    Ok(PrettyJson(coffees))
}

/// Roaster routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roasters", get(list_roasters))
        .route("/roasters/{roaster}", get(list_coffees_by_roaster))
}
