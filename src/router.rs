use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
    routing::post,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{AppState, middleware::log_errors, routes};

fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(routes::customer::list_customers).post(routes::customer::create_customer),
        )
        .route(
            "/customers/{id}",
            get(routes::customer::get_customer)
                .put(routes::customer::update_customer)
                .delete(routes::customer::delete_customer),
        )
}

fn position_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/positions",
            get(routes::position::list_positions).post(routes::position::create_position),
        )
        .route(
            "/positions/{id}",
            get(routes::position::get_position)
                .put(routes::position::update_position)
                .delete(routes::position::delete_position),
        )
}

fn employee_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(routes::employee::list_employees).post(routes::employee::create_employee),
        )
        .route(
            "/employees/{id}",
            get(routes::employee::get_employee)
                .put(routes::employee::update_employee)
                .delete(routes::employee::delete_employee),
        )
        .layer(DefaultBodyLimit::max(max_upload_size))
}

fn permission_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/permissions",
            get(routes::permission::list_roles).post(routes::permission::create_role),
        )
        .route(
            "/permissions/{id}",
            get(routes::permission::get_role)
                .put(routes::permission::update_role)
                .delete(routes::permission::delete_role),
        )
}

/// Full application router with state applied.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(customer_routes())
        .merge(position_routes())
        .merge(employee_routes(state.config.max_upload_size))
        .merge(permission_routes());

    Router::new()
        .route("/login", post(routes::auth::login))
        .route("/health", get(|| async { "OK" }))
        .route("/debug/employees", get(routes::employee::debug_employees))
        .nest("/api", api)
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
