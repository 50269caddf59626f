//! Page view-models: local view state plus the user actions that change it.
//!
//! A page owns its state, reads the ambient [`AuthContext`], and reaches the
//! network only through a [`BookingApi`]. Rendering produces text built from
//! the presentational components.
//!
//! [`AuthContext`]: crate::client::AuthContext
//! [`BookingApi`]: crate::client::BookingApi

pub mod bookings;
pub mod chart;
pub mod events;
pub mod form;

#[cfg(test)]
pub(crate) mod fake;

pub use bookings::{BookingsPage, OutputType};
pub use chart::{BOOKING_BUCKETS, ChartData, Dataset, PriceBucket};
pub use events::EventsPage;
pub use form::{EventForm, FormError};

use crate::client::ClientError;

/// Failure of a page action.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The request reached the API and failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The form was rejected before any request was made.
    #[error("invalid event form: {0}")]
    InvalidForm(#[from] FormError),
}
