//! User handlers: lookup by id.

use crate::error::AppError;
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// The response for a missing row and for a lookup failure is the same
/// fixed 404 body; store detail is kept out of the response.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id: i64 = id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))?;

    let user = match UserService::find(&state.pool, id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(AppError::NotFound("User not found".into())),
        Err(e) => {
            tracing::debug!(error = %e, id, "user lookup failed");
            return Err(AppError::NotFound("User not found".into()));
        }
    };
    Ok((StatusCode::OK, Json(user)))
}
