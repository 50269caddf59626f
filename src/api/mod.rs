//! HTTP layer: GraphQL endpoint, GraphiQL console, and system routes.
//!
//! | Path                     | Method | Purpose                        |
//! |--------------------------|--------|--------------------------------|
//! | `/graphql`               | POST   | execute a GraphQL operation    |
//! | `/graphql`               | GET    | GraphiQL console               |
//! | `/graphql/sdl`           | GET    | schema in SDL form             |
//! | `/health`                | GET    | liveness check                 |
//! | `/api-docs/openapi.json` | GET    | OpenAPI document (REST routes) |

pub mod graphql;
pub mod system;

use axum::Router;
use axum::http::Uri;

use crate::app_state::AppState;
use crate::error::GatewayError;

/// Builds the complete router with every endpoint and the JSON 404 fallback.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(graphql::routes())
        .merge(system::routes())
        .fallback(fallback)
}

/// Answers any unmatched path with a structured 404.
async fn fallback(uri: Uri) -> GatewayError {
    tracing::debug!(path = %uri.path(), "no route matched");
    GatewayError::RouteNotFound(uri.path().to_string())
}
