//! In-memory [`BookingApi`] used by the page tests.

use std::sync::Mutex;

use crate::client::{
    Booking, BookingApi, CancelledEvent, ClientError, CreatedEvent, Event, EventInput,
};

/// A call observed by [`FakeApi`]: operation name and token.
pub(crate) type Call = (&'static str, Option<String>);

#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub events: Vec<Event>,
    pub bookings: Vec<Booking>,
    pub fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record<T>(
        &self,
        name: &'static str,
        token: Option<&str>,
        value: T,
    ) -> Result<T, ClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((name, token.map(str::to_string)));
        }
        if self.fail {
            Err(ClientError::RequestFailed(500))
        } else {
            Ok(value)
        }
    }
}

impl BookingApi for FakeApi {
    async fn fetch_events(&self) -> Result<Vec<Event>, ClientError> {
        self.record("fetch_events", None, self.events.clone())
    }

    async fn fetch_bookings(&self, token: Option<&str>) -> Result<Vec<Booking>, ClientError> {
        self.record("fetch_bookings", token, self.bookings.clone())
    }

    async fn create_event(
        &self,
        token: Option<&str>,
        input: &EventInput,
    ) -> Result<CreatedEvent, ClientError> {
        let created = CreatedEvent {
            id: "created-1".to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            date: input.date.clone(),
            price: input.price,
        };
        self.record("create_event", token, created)
    }

    async fn cancel_booking(
        &self,
        token: Option<&str>,
        booking_id: &str,
    ) -> Result<CancelledEvent, ClientError> {
        let cancelled = CancelledEvent {
            id: format!("event-{booking_id}"),
            title: "Event".to_string(),
        };
        self.record("cancel_booking", token, cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_fake_serves_data_and_records_calls() {
        let api = FakeApi::with_bookings(Vec::new());
        assert!(api.calls().is_empty());
        assert!(!api.fail);

        let seeded = FakeApi::with_events(Vec::new());
        let events = tokio_test::assert_ok!(seeded.fetch_events().await);
        assert!(events.is_empty());

        tokio_test::assert_ok!(api.fetch_bookings(Some("tok")).await);
        assert_eq!(api.calls(), vec![("fetch_bookings", Some("tok".to_string()))]);
    }
}
