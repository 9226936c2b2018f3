use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::model::{PositionRequest, UpdatePositionRequest};
use crate::{
    AppState,
    error::{AppError, AppResult},
    extract::{AppJson, AppPath},
};

#[axum::debug_handler]
pub async fn list_positions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let positions = state.db.list_positions().await?;
    Ok(Json(positions))
}

#[axum::debug_handler]
pub async fn get_position(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    match state.db.find_position(&id).await? {
        Some(position) => Ok(Json(position)),
        None => Err(AppError::NotFound("Position not found".into())),
    }
}

#[axum::debug_handler]
pub async fn create_position(
    State(state): State<AppState>,
    AppJson(req): AppJson<PositionRequest>,
) -> AppResult<impl IntoResponse> {
    let position = req.into_position()?;
    state.db.create_position(&position).await?;
    tracing::info!("Created position {}", position.id);

    Ok((StatusCode::CREATED, Json(json!({ "id": position.id }))))
}

#[axum::debug_handler]
pub async fn update_position(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(req): AppJson<UpdatePositionRequest>,
) -> AppResult<impl IntoResponse> {
    let name = req.into_name()?;
    state.db.update_position(&id, &name).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_position(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    state.db.delete_position(&id).await?;
    tracing::info!("Deleted position {}", id);

    Ok(StatusCode::NO_CONTENT)
}
