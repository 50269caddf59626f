//! GraphQL schema: root query and mutation types.
//!
//! The contract is deliberately small:
//!
//! ```graphql
//! type RootQuery    { events: [String!]! }
//! type RootMutation { createEvent(name: String): String }
//! ```
//!
//! Both resolvers are synchronous in effect and hold no state; the schema is
//! built once at startup and shared by every request.

pub mod mutation;
pub mod query;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::{QueryRoot, SAMPLE_EVENTS};

/// Executable schema served by the gateway.
pub type BookingSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema with the tracing extension installed.
#[must_use]
pub fn build_schema() -> BookingSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(async_graphql::extensions::Tracing)
        .finish()
}

/// Returns the schema in GraphQL SDL form.
#[must_use]
pub fn sdl() -> String {
    build_schema().sdl()
}
