//! Bookings page: list or chart of the user's bookings, with cancellation.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDateTime};

use super::chart::{BOOKING_BUCKETS, ChartData};
use crate::client::{AuthContext, Booking, BookingApi, ClientError};
use crate::components::Spinner;

/// How the bookings are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputType {
    /// One line per booking with a cancel button.
    #[default]
    List,
    /// Bar chart of bookings per price bucket.
    Chart,
}

/// View state of the bookings page.
#[derive(Debug, Clone)]
pub struct BookingsPage {
    auth: AuthContext,
    is_loading: bool,
    bookings: Vec<Booking>,
    output_type: OutputType,
}

impl BookingsPage {
    /// An empty list view for the given user.
    #[must_use]
    pub fn new(auth: AuthContext) -> Self {
        Self {
            auth,
            is_loading: false,
            bookings: Vec::new(),
            output_type: OutputType::List,
        }
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Bookings currently held.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Current display mode.
    #[must_use]
    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    /// Loads the bookings when the page is first shown.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`] of the fetch.
    pub async fn mount<A: BookingApi>(&mut self, api: &A) -> Result<(), ClientError> {
        self.fetch_bookings(api).await
    }

    /// Replaces the bookings with the server's.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`] after clearing the loading flag.
    pub async fn fetch_bookings<A: BookingApi>(&mut self, api: &A) -> Result<(), ClientError> {
        self.is_loading = true;
        let result = api.fetch_bookings(self.auth.token()).await;
        self.is_loading = false;

        self.bookings = result.inspect_err(|err| {
            tracing::warn!(error = %err, "failed to load bookings");
        })?;
        tracing::debug!(count = self.bookings.len(), "bookings loaded");
        Ok(())
    }

    /// Cancels `booking_id` and drops it from the local list.
    ///
    /// Only entries with exactly that id are removed.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`] after clearing the loading flag; the
    /// list is unchanged.
    pub async fn cancel_booking<A: BookingApi>(
        &mut self,
        api: &A,
        booking_id: &str,
    ) -> Result<(), ClientError> {
        self.is_loading = true;
        let result = api.cancel_booking(self.auth.token(), booking_id).await;
        self.is_loading = false;

        let cancelled = result.inspect_err(|err| {
            tracing::warn!(error = %err, booking_id, "failed to cancel booking");
        })?;
        self.bookings.retain(|booking| booking.id != booking_id);
        tracing::info!(booking_id, event = %cancelled.title, "booking cancelled");
        Ok(())
    }

    /// Switches between list and chart.
    pub fn change_output_type(&mut self, output_type: OutputType) {
        self.output_type = output_type;
    }

    /// Chart data over [`BOOKING_BUCKETS`].
    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_bookings(&BOOKING_BUCKETS, &self.bookings)
    }

    /// Renders the page.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_loading {
            return Spinner.render();
        }

        let mut out = String::from("[List] [Chart]\n");
        match self.output_type {
            OutputType::List => {
                for booking in &self.bookings {
                    let _ = writeln!(
                        out,
                        "- {} - {} [Cancel]",
                        booking.event.title,
                        format_booking_date(&booking.created_at)
                    );
                }
            }
            OutputType::Chart => out.push_str(&self.chart_data().render()),
        }
        out
    }
}

/// Formats a booking timestamp as `month/day/year`.
///
/// Accepts RFC 3339 and naive ISO-8601 date-times; anything else is shown
/// as received.
#[must_use]
pub fn format_booking_date(raw: &str) -> String {
    const FORMAT: &str = "%-m/%-d/%Y";
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::client::BookedEvent;
    use crate::pages::fake::FakeApi;

    fn booking(id: &str, price: f64) -> Booking {
        Booking {
            id: id.to_string(),
            created_at: "2024-03-01T10:00:00.000Z".to_string(),
            event: BookedEvent {
                id: format!("event-{id}"),
                title: format!("Title {id}"),
                date: "2024-04-01T09:00".to_string(),
                price,
            },
        }
    }

    fn loaded_api() -> FakeApi {
        FakeApi::with_bookings(vec![
            booking("a", 50.0),
            booking("b", 150.0),
            booking("c", 250.0),
        ])
    }

    #[tokio::test]
    async fn mount_loads_with_token() {
        let api = loaded_api();
        let mut page = BookingsPage::new(AuthContext::new("tok", "u1"));
        tokio_test::assert_ok!(page.mount(&api).await);

        assert!(!page.is_loading());
        assert_eq!(page.bookings().len(), 3);
        assert_eq!(api.calls(), vec![("fetch_bookings", Some("tok".to_string()))]);
    }

    #[tokio::test]
    async fn failed_fetch_resets_loading() {
        let api = FakeApi::failing();
        let mut page = BookingsPage::new(AuthContext::new("tok", "u1"));

        let result = page.fetch_bookings(&api).await;
        assert!(matches!(result, Err(ClientError::RequestFailed(500))));
        assert!(!page.is_loading());
        assert!(page.bookings().is_empty());
    }

    #[tokio::test]
    async fn cancel_removes_only_matching_booking() {
        let api = loaded_api();
        let mut page = BookingsPage::new(AuthContext::new("tok", "u1"));
        tokio_test::assert_ok!(page.mount(&api).await);

        tokio_test::assert_ok!(page.cancel_booking(&api, "b").await);
        let ids: Vec<&str> = page.bookings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn cancel_unknown_id_keeps_everything() {
        let api = loaded_api();
        let mut page = BookingsPage::new(AuthContext::new("tok", "u1"));
        tokio_test::assert_ok!(page.mount(&api).await);

        tokio_test::assert_ok!(page.cancel_booking(&api, "zzz").await);
        assert_eq!(page.bookings(), api.bookings.as_slice());
    }

    #[tokio::test]
    async fn failed_cancel_keeps_list_and_resets_loading() {
        let mut page = BookingsPage::new(AuthContext::new("tok", "u1"));
        tokio_test::assert_ok!(page.mount(&loaded_api()).await);

        let result = page.cancel_booking(&FakeApi::failing(), "a").await;
        assert!(result.is_err());
        assert!(!page.is_loading());
        assert_eq!(page.bookings().len(), 3);
    }

    #[test]
    fn output_type_toggles() {
        let mut page = BookingsPage::new(AuthContext::anonymous());
        assert_eq!(page.output_type(), OutputType::List);
        page.change_output_type(OutputType::Chart);
        assert_eq!(page.output_type(), OutputType::Chart);
        page.change_output_type(OutputType::List);
        assert_eq!(page.output_type(), OutputType::List);
    }

    #[tokio::test]
    async fn chart_counts_each_bucket() {
        let api = loaded_api();
        let mut page = BookingsPage::new(AuthContext::new("tok", "u1"));
        tokio_test::assert_ok!(page.mount(&api).await);

        let counts: Vec<(&str, usize)> = page.chart_data().counts().collect();
        assert_eq!(counts, vec![("Cheap", 1), ("Normal", 1), ("Expensive", 1)]);
    }

    #[tokio::test]
    async fn render_switches_between_views() {
        let api = loaded_api();
        let mut page = BookingsPage::new(AuthContext::new("tok", "u1"));
        tokio_test::assert_ok!(page.mount(&api).await);

        let list = page.render();
        assert!(list.starts_with("[List] [Chart]\n"));
        assert!(list.contains("- Title a - 3/1/2024 [Cancel]"));

        page.change_output_type(OutputType::Chart);
        let chart = page.render();
        assert!(chart.contains("Normal    | # 1"));
        assert!(!chart.contains("[Cancel]"));
    }

    #[test]
    fn loading_renders_spinner() {
        let mut page = BookingsPage::new(AuthContext::anonymous());
        page.is_loading = true;
        assert_eq!(page.render(), Spinner.render());
    }

    #[test]
    fn booking_dates_are_formatted() {
        assert_eq!(format_booking_date("2024-03-01T10:00:00.000Z"), "3/1/2024");
        assert_eq!(format_booking_date("2024-12-24T08:30:00"), "12/24/2024");
        assert_eq!(format_booking_date("yesterday"), "yesterday");
    }
}
