use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::model::PermissionRoleRequest;
use crate::{
    AppState,
    database::PermissionRole,
    error::{AppError, AppResult},
    extract::{AppJson, AppPath},
};

#[axum::debug_handler]
pub async fn list_roles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let roles = state.db.list_roles().await?;
    Ok(Json(roles))
}

#[axum::debug_handler]
pub async fn get_role(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<impl IntoResponse> {
    match state.db.find_role(id).await? {
        Some(role) => Ok(Json(role)),
        None => Err(AppError::NotFound("role not found".into())),
    }
}

#[axum::debug_handler]
pub async fn create_role(
    State(state): State<AppState>,
    AppJson(req): AppJson<PermissionRoleRequest>,
) -> AppResult<impl IntoResponse> {
    let data = req.into_data()?;
    let id = state.db.create_role(&data).await?;
    tracing::info!("Created permission role {}", id);

    let role = PermissionRole {
        id,
        name: data.name,
        permissions: data.permissions,
    };
    Ok((StatusCode::CREATED, Json(role)))
}

#[axum::debug_handler]
pub async fn update_role(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(req): AppJson<PermissionRoleRequest>,
) -> AppResult<impl IntoResponse> {
    let data = req.into_data()?;
    state.db.update_role(id, &data).await?;

    Ok(Json(PermissionRole {
        id,
        name: data.name,
        permissions: data.permissions,
    }))
}

#[axum::debug_handler]
pub async fn delete_role(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<impl IntoResponse> {
    state.db.delete_role(id).await?;
    tracing::info!("Deleted permission role {}", id);

    Ok(StatusCode::NO_CONTENT)
}
