//! System endpoints: health check and OpenAPI document.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorResponse};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document covering the REST (non-GraphQL) routes.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "eventbook", description = "GraphQL gateway for the event-booking demo"),
    paths(health_handler, super::graphql::sdl_handler),
    components(schemas(HealthResponse, ErrorResponse, ErrorBody)),
    tags(
        (name = "System", description = "Service health"),
        (name = "GraphQL", description = "Schema introspection helpers"),
    )
)]
pub struct ApiDoc;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    let router = Router::new().route("/health", get(health_handler));

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()),
    );

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(OPENAPI_PATH, get(openapi_handler));

    router
}

/// `GET /api-docs/openapi.json` when Swagger UI is compiled out.
#[cfg(not(feature = "swagger-ui"))]
async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
