use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use super::model::{LoginRequest, LoginResponse};
use crate::{
    AppState,
    config::Config,
    database::EmployeeRepository,
    error::{AppError, AppResult},
    utils::{generate_token, verify_password},
};

const BAD_REQUEST: &str = "bad request";
const INVALID: &str = "invalid";
const DISABLED: &str = "disabled";

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!("Rejected login body: {}", e.body_text());
        AppError::BadRequest(BAD_REQUEST.into())
    })?;

    let response = authenticate(state.db.as_ref(), &state.config, req).await?;
    Ok(Json(response))
}

/// Runs the login checks in order: lookup, active status, password, then
/// token issue.
///
/// An unknown email and a wrong password both yield `401 invalid`. A disabled
/// account yields `403 disabled` before its password is looked at.
pub async fn authenticate(
    employees: &(impl EmployeeRepository + ?Sized),
    config: &Config,
    req: LoginRequest,
) -> AppResult<LoginResponse> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(BAD_REQUEST.into()));
    }

    let Some(employee) = employees.find_credentials_by_email(&req.email).await? else {
        tracing::warn!("Login failed: unknown email {}", req.email);
        return Err(AppError::Unauthorized(INVALID.into()));
    };

    if !employee.status {
        tracing::warn!("Login refused: employee {} is disabled", employee.id);
        return Err(AppError::Forbidden(DISABLED.into()));
    }

    let password = req.password.trim().to_string();
    let stored_hash = employee.password_hash.clone();
    let matched = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .unwrap_or(false);
    if !matched {
        tracing::warn!("Login failed: wrong password for employee {}", employee.id);
        return Err(AppError::Unauthorized(INVALID.into()));
    }

    let (token, expires_at) = generate_token(&employee.id, &employee.email, config)?;
    tracing::info!("Employee {} logged in, token expires at {}", employee.id, expires_at);

    Ok(LoginResponse { token })
}
