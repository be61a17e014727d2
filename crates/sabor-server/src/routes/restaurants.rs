//! Restaurant endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use sabor_core::{NewRestaurant, Restaurant, RestaurantFilter};
use tracing::info;

use crate::error::AppError;
use crate::AppState;

/// Restaurant routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route("/restaurants/:name", get(get_restaurant))
        .route("/restaurants/:name/toggle-active", patch(toggle_active))
}

/// List restaurants, optionally filtered by category, active flag and name.
async fn list_restaurants(
    State(state): State<AppState>,
    query: Result<Query<RestaurantFilter>, QueryRejection>,
) -> Result<Json<Vec<Restaurant>>, AppError> {
    let Query(filter) = query?;
    Ok(Json(state.store.list(&filter)))
}

async fn get_restaurant(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Restaurant>, AppError> {
    Ok(Json(state.store.get(&name)?))
}

async fn create_restaurant(
    State(state): State<AppState>,
    payload: Result<Json<NewRestaurant>, JsonRejection>,
) -> Result<(StatusCode, Json<Restaurant>), AppError> {
    let Json(payload) = payload?;
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Restaurant name must not be empty".to_string()));
    }

    let restaurant = state.store.create(payload)?;
    info!(name = %restaurant.name, "Created restaurant");
    Ok((StatusCode::CREATED, Json(restaurant)))
}

async fn toggle_active(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Restaurant>, AppError> {
    let restaurant = state.store.toggle_active(&name)?;
    info!(name = %restaurant.name, active = restaurant.active, "Toggled restaurant status");
    Ok(Json(restaurant))
}
