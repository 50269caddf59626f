//! Shared application state injected into all Axum handlers.

use std::fmt;

use crate::config::GatewayConfig;
use crate::schema::{BookingSchema, build_schema};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema. Cheap to clone (internally `Arc`ed).
    pub schema: BookingSchema,
    /// Whether `GET /graphql` serves the GraphiQL console.
    pub graphiql_enabled: bool,
}

impl AppState {
    /// Builds the state for a gateway running with `config`.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            schema: build_schema(),
            graphiql_enabled: config.graphiql_enabled,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("graphiql_enabled", &self.graphiql_enabled)
            .finish_non_exhaustive()
    }
}
