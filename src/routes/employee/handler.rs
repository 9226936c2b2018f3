use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::form::{EmployeeForm, remove_upload, store_upload};
use crate::{
    AppState,
    database::EmployeeData,
    error::{AppError, AppResult},
    extract::{AppMultipart, AppPath},
    utils::hash_password,
};

#[axum::debug_handler]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = state.db.list_employees().await?;
    Ok(Json(employees))
}

/// Unauthenticated dump of every employee row. Password hashes are omitted
/// here as everywhere else.
#[axum::debug_handler]
pub async fn debug_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = state.db.list_employees().await?;
    tracing::debug!("Debug dump of {} employees", employees.len());
    Ok(Json(employees))
}

#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    match state.db.find_employee(&id).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(AppError::NotFound("Employee not found".into())),
    }
}

#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<AppState>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<impl IntoResponse> {
    let form = EmployeeForm::from_multipart(multipart).await?;
    let mut data = form.decode();
    if data.id.trim().is_empty() {
        return Err(AppError::BadRequest("id is required".into()));
    }

    apply_password(&state, &form, &mut data).await?;
    data.image_url = save_image(&state, &form).await?;

    if let Err(e) = state.db.create_employee(&data).await {
        discard_image(&state, &data).await;
        return Err(e.into());
    }
    tracing::info!("Created employee {}", data.id);

    Ok((StatusCode::CREATED, Json(json!({ "id": data.id }))))
}

#[axum::debug_handler]
pub async fn update_employee(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<impl IntoResponse> {
    let form = EmployeeForm::from_multipart(multipart).await?;
    let mut data = form.decode();
    data.id = id;

    apply_password(&state, &form, &mut data).await?;
    data.image_url = save_image(&state, &form).await?;

    if let Err(e) = state.db.update_employee(&data.id, &data).await {
        discard_image(&state, &data).await;
        return Err(e.into());
    }

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    state.db.delete_employee(&id).await?;
    tracing::info!("Deleted employee {}", id);

    Ok(StatusCode::NO_CONTENT)
}

// A plaintext `password` wins over a pre-hashed `password_hash`.
async fn apply_password(
    state: &AppState,
    form: &EmployeeForm,
    data: &mut EmployeeData,
) -> AppResult<()> {
    if let Some(password) = form.password() {
        let password = password.to_string();
        let cost = state.config.bcrypt_cost;
        data.password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;
    }
    Ok(())
}

async fn save_image(state: &AppState, form: &EmployeeForm) -> AppResult<Option<String>> {
    match form.image() {
        Some(image) => {
            let url = store_upload(&state.config.upload_dir, &image.file_name, &image.bytes).await?;
            tracing::debug!("Stored profile image at {}", url);
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

// The row was never written, so a file stored for it has no owner.
async fn discard_image(state: &AppState, data: &EmployeeData) {
    if let Some(url) = &data.image_url {
        remove_upload(&state.config.upload_dir, url).await;
    }
}
