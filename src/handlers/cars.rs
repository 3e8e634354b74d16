//! Car handlers: list and create.

use crate::error::AppError;
use crate::models::NewCar;
use crate::service::CarService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

pub async fn list_cars(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let cars = CarService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(cars)))
}

/// Decode failures (malformed JSON, wrong field types) surface verbatim
/// as a 400 before any store access.
pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<NewCar>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(new_car) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let car = CarService::create(&state.pool, &new_car).await?;
    Ok((StatusCode::CREATED, Json(car)))
}
