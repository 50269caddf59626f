//! Root query type.

use async_graphql::Object;

/// Event names returned by the `events` query, in order.
pub const SAMPLE_EVENTS: [&str; 3] = ["cooking", "sailing", "coding"];

/// Root of all read operations (`RootQuery` in the schema).
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
    /// Lists the names of all known events.
    async fn events(&self) -> Vec<String> {
        tracing::debug!(count = SAMPLE_EVENTS.len(), "resolving events");
        SAMPLE_EVENTS.iter().map(|name| (*name).to_string()).collect()
    }
}
