//! GraphQL endpoint and GraphiQL console.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::app_state::AppState;
use crate::error::GatewayError;

/// Path the GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// `POST /graphql` — Executes a GraphQL operation against the schema.
///
/// Parse and validation failures are reported by the engine in the
/// `errors` array of the response body.
pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(operation = ?request.operation_name, "executing graphql request");
    state.schema.execute(request).await.into()
}

/// `GET /graphql` — Returns the GraphiQL page pointed at the request path.
///
/// # Errors
///
/// Returns [`GatewayError::RouteNotFound`] when the console is disabled.
pub async fn graphiql(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, GatewayError> {
    if !state.graphiql_enabled {
        return Err(GatewayError::RouteNotFound(uri.path().to_string()));
    }
    Ok(Html(GraphiQLSource::build().endpoint(uri.path()).finish()))
}

/// `GET /graphql/sdl` — Schema definition in GraphQL SDL.
#[utoipa::path(
    get,
    path = "/graphql/sdl",
    tag = "GraphQL",
    summary = "Export schema",
    description = "Returns the GraphQL schema served at /graphql in SDL form.",
    responses(
        (status = 200, description = "Schema SDL", body = String, content_type = "text/plain"),
    )
)]
pub async fn sdl_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.schema.sdl(),
    )
}

/// GraphQL routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/graphql/sdl", get(sdl_handler))
}
