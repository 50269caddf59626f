//! Root mutation type.

use async_graphql::Object;

/// Root of all write operations (`RootMutation` in the schema).
///
/// Nothing is stored; `createEvent` hands its argument straight back.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationRoot;

#[Object(name = "RootMutation")]
impl MutationRoot {
    /// Creates an event and returns its name.
    async fn create_event(&self, name: Option<String>) -> Option<String> {
        tracing::info!(name = ?name, "event created");
        name
    }
}
