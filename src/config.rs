//! Gateway and client configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The gateway and the client have
//! separate defaults; the gateway binds port 3000 while the client targets
//! port 8000, mirroring the deployment the booking frontend was written for.

use std::net::SocketAddr;

use crate::error::GatewayError;

/// Default bind address of the gateway.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Default GraphQL endpoint targeted by the booking client.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:8000/graphql";

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Whether `GET /graphql` serves the GraphiQL console.
    pub graphiql_enabled: bool,

    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidConfig`] if `LISTEN_ADDR` is set but
    /// cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok();

        let raw_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = parse_listen_addr(&raw_addr)?;

        let graphiql_enabled = parse_env_bool("GRAPHIQL_ENABLED", true);
        let log_json = matches!(
            std::env::var("LOG_FORMAT").ok().as_deref(),
            Some("json") | Some("JSON")
        );

        Ok(Self {
            listen_addr,
            graphiql_enabled,
            log_json,
        })
    }

    /// URL of the GraphiQL console, or `None` when it is disabled.
    #[must_use]
    pub fn graphiql_url(&self) -> Option<String> {
        self.graphiql_enabled
            .then(|| format!("http://{}/graphql", self.listen_addr))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            graphiql_enabled: true,
            log_json: false,
        }
    }
}

/// Booking client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the GraphQL endpoint, including the `/graphql` path.
    pub endpoint: String,
}

impl ClientConfig {
    /// Loads the client configuration from `GRAPHQL_ENDPOINT`, falling back
    /// to [`DEFAULT_GRAPHQL_ENDPOINT`].
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            endpoint: endpoint_or_default(std::env::var("GRAPHQL_ENDPOINT").ok()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
        }
    }
}

/// Parses a listen address, reporting the offending value on failure.
fn parse_listen_addr(raw: &str) -> Result<SocketAddr, GatewayError> {
    raw.parse()
        .map_err(|e| GatewayError::InvalidConfig(format!("LISTEN_ADDR {raw:?}: {e}")))
}

/// Uses `raw` unless it is missing or blank.
fn endpoint_or_default(raw: Option<String>) -> String {
    raw.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GRAPHQL_ENDPOINT.to_string())
}

/// Parses an environment variable as a boolean. See [`parse_bool`].
fn parse_env_bool(key: &str, default: bool) -> bool {
    parse_bool(std::env::var(key).ok().as_deref(), default)
}

/// Accepts `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`, ignoring case
/// and surrounding whitespace. Returns `default` for anything else.
fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1" | "yes" | "on") => true,
        Some("false" | "0" | "no" | "off") => false,
        _ => default,
    }
}
