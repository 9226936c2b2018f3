use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::model::{CreateCustomerResponse, CustomerRequest};
use crate::{
    AppState,
    error::{AppError, AppResult},
    extract::{AppJson, AppPath},
};

#[axum::debug_handler]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let customers = state.db.list_customers().await?;
    Ok(Json(customers))
}

#[axum::debug_handler]
pub async fn get_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<impl IntoResponse> {
    match state.db.find_customer(id).await? {
        Some(customer) => Ok(Json(customer)),
        None => Err(AppError::NotFound("Customer not found".into())),
    }
}

#[axum::debug_handler]
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(req): AppJson<CustomerRequest>,
) -> AppResult<impl IntoResponse> {
    let data = req.into_data()?;
    let id = state.db.create_customer(&data).await?;
    tracing::info!("Created customer {}", id);

    Ok((StatusCode::CREATED, Json(CreateCustomerResponse { id })))
}

#[axum::debug_handler]
pub async fn update_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(req): AppJson<CustomerRequest>,
) -> AppResult<impl IntoResponse> {
    let data = req.into_data()?;
    state.db.update_customer(id, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<impl IntoResponse> {
    state.db.delete_customer(id).await?;
    tracing::info!("Deleted customer {}", id);

    Ok(StatusCode::NO_CONTENT)
}
