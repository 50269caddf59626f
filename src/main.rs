//! eventbook server entry point.
//!
//! Starts the Axum HTTP server with the GraphQL endpoint and system routes.

use anyhow::Context as _;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use eventbook::api;
use eventbook::app_state::AppState;
use eventbook::config::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    tracing::info!(
        addr = %config.listen_addr,
        graphiql = config.graphiql_enabled,
        "starting eventbook"
    );

    // Build application state
    let app_state = AppState::new(&config);

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");
    if let Some(url) = config.graphiql_url() {
        tracing::info!("GraphiQL IDE: {url}");
    }

    axum::serve(listener, app).await?;

    Ok(())
}
