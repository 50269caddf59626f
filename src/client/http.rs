//! reqwest-backed GraphQL transport.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::BookingApi;
use super::error::ClientError;
use super::models::{Booking, CancelledEvent, CreatedEvent, Event, EventInput};
use super::operations::{CANCEL_BOOKING, CREATE_EVENT, FETCH_BOOKINGS, FETCH_EVENTS, Operation};
use crate::config::ClientConfig;

/// JSON body of a GraphQL POST.
#[derive(Debug, Serialize)]
struct RequestBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// GraphQL client posting JSON to a single endpoint.
///
/// No retries and no timeout: a request either completes or fails once.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    /// Creates a client for the endpoint in `config`.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config.endpoint.clone())
    }

    /// Creates a client for `GRAPHQL_ENDPOINT` (see [`ClientConfig::from_env`]).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env())
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs `op` and decodes the value under `data.<op.field>`.
    ///
    /// The bearer token is attached only for authenticated operations and
    /// only when `token` is present.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the request cannot be completed.
    /// - [`ClientError::RequestFailed`] for any status but 200 and 201.
    /// - [`ClientError::Graphql`] if the server reported errors and no data.
    /// - [`ClientError::MissingField`] if `data` lacks the field.
    /// - [`ClientError::Decode`] if the payload has the wrong shape.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        op: &Operation,
        variables: Option<Value>,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let body = RequestBody {
            query: op.document,
            variables,
        };
        let mut request = self.http.post(&self.endpoint).json(&body);
        if op.authenticated
            && let Some(token) = token
        {
            request = request.bearer_auth(token);
        }

        tracing::debug!(operation = op.name, endpoint = %self.endpoint, "sending graphql request");
        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            tracing::warn!(operation = op.name, %status, "graphql request failed");
            return Err(ClientError::RequestFailed(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&bytes)?;
        extract(op, envelope)
    }
}

/// Pulls `op.field` out of the envelope.
fn extract<T: DeserializeOwned>(op: &Operation, envelope: Envelope) -> Result<T, ClientError> {
    let Envelope { data, errors } = envelope;
    let field = data
        .and_then(|mut data| data.get_mut(op.field).map(Value::take))
        .filter(|value| !value.is_null());

    match field {
        Some(value) => {
            if !errors.is_empty() {
                tracing::warn!(operation = op.name, count = errors.len(), "partial graphql errors");
            }
            Ok(serde_json::from_value(value)?)
        }
        None if !errors.is_empty() => Err(ClientError::Graphql(
            errors.into_iter().map(|e| e.message).collect(),
        )),
        None => Err(ClientError::MissingField(op.field)),
    }
}

impl BookingApi for GraphqlClient {
    async fn fetch_events(&self) -> Result<Vec<Event>, ClientError> {
        self.execute(&FETCH_EVENTS, None, None).await
    }

    async fn fetch_bookings(&self, token: Option<&str>) -> Result<Vec<Booking>, ClientError> {
        self.execute(&FETCH_BOOKINGS, None, token).await
    }

    async fn create_event(
        &self,
        token: Option<&str>,
        input: &EventInput,
    ) -> Result<CreatedEvent, ClientError> {
        let variables = json!({ "eventInput": input });
        self.execute(&CREATE_EVENT, Some(variables), token).await
    }

    async fn cancel_booking(
        &self,
        token: Option<&str>,
        booking_id: &str,
    ) -> Result<CancelledEvent, ClientError> {
        let variables = json!({ "id": booking_id });
        self.execute(&CANCEL_BOOKING, Some(variables), token).await
    }
}
