//! Booking client: typed access to the GraphQL API used by the pages.
//!
//! Every remote operation is described by an [`Operation`] (document,
//! response field, auth requirement) and executed by [`GraphqlClient`].
//! Pages do not talk to [`GraphqlClient`] directly; they are generic over
//! [`BookingApi`] so the transport can be swapped.

pub mod auth;
pub mod error;
pub mod http;
pub mod models;
pub mod operations;

use std::future::Future;

pub use auth::AuthContext;
pub use error::ClientError;
pub use http::GraphqlClient;
pub use models::{BookedEvent, Booking, CancelledEvent, CreatedEvent, Creator, Event, EventInput};
pub use operations::Operation;

/// Remote operations the booking pages depend on.
pub trait BookingApi {
    /// Lists every event. Sent without credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure, a non-200/201 status,
    /// or an unusable response body.
    fn fetch_events(&self) -> impl Future<Output = Result<Vec<Event>, ClientError>> + Send;

    /// Lists the bookings of the user owning `token`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BookingApi::fetch_events`].
    fn fetch_bookings(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Booking>, ClientError>> + Send;

    /// Creates an event from `input`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BookingApi::fetch_events`].
    fn create_event(
        &self,
        token: Option<&str>,
        input: &EventInput,
    ) -> impl Future<Output = Result<CreatedEvent, ClientError>> + Send;

    /// Cancels the booking `booking_id`, returning the event it referenced.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BookingApi::fetch_events`].
    fn cancel_booking(
        &self,
        token: Option<&str>,
        booking_id: &str,
    ) -> impl Future<Output = Result<CancelledEvent, ClientError>> + Send;
}
