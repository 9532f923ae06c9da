pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod state;
pub mod types;
pub mod utils;
pub mod validation;

use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, state::AppState};

/// Routes under `/api`, without the shared layers.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/employees/",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        .route(
            "/api/employees",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        .route(
            "/api/employees/dashboard/stats",
            get(handlers::employees::dashboard_stats),
        )
        .route(
            "/api/employees/{id}",
            get(handlers::employees::get_employee).delete(handlers::employees::delete_employee),
        )
        .route("/api/attendance/", post(handlers::attendance::mark_attendance))
        .route("/api/attendance", post(handlers::attendance::mark_attendance))
        .route(
            "/api/attendance/employee/{id}",
            get(handlers::attendance::employee_attendance),
        )
        .route(
            "/api/attendance/summary",
            get(handlers::attendance::attendance_summary),
        )
        .route(
            "/api/attendance/today-stats",
            get(handlers::attendance::daily_stats),
        )
}

/// Full application: health probe, API routes, OpenAPI docs and the shared
/// tracing/CORS/request-id layers.
pub fn app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::health::health))
        .merge(api_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::log_error_responses))
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(24 * 60 * 60))
}
