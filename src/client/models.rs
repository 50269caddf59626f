//! Records exchanged with the GraphQL API.
//!
//! Field names follow the wire format (`_id`, `createdAt`); identifiers are
//! opaque strings minted by the server.

use serde::{Deserialize, Serialize};

/// Owner of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// User identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Contact address; omitted when the event was created locally.
    #[serde(default)]
    pub email: Option<String>,
}

/// An event as listed on the events page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title shown in the list.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Date as entered in the form (ISO-8601 local date-time).
    pub date: String,
    /// Price in euros.
    pub price: f64,
    /// User who created the event.
    pub creator: Creator,
}

impl Event {
    /// Builds the list entry for an event the current user just created.
    #[must_use]
    pub fn from_created(created: CreatedEvent, creator_id: &str) -> Self {
        Self {
            id: created.id,
            title: created.title,
            description: created.description,
            date: created.date,
            price: created.price,
            creator: Creator {
                id: creator_id.to_string(),
                email: None,
            },
        }
    }

    /// `true` when `user_id` created this event.
    #[must_use]
    pub fn is_owned_by(&self, user_id: Option<&str>) -> bool {
        user_id.is_some_and(|id| id == self.creator.id)
    }
}

/// Payload returned by the `createEvent` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedEvent {
    /// Event identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Date.
    pub date: String,
    /// Price in euros.
    pub price: f64,
}

/// Input object of the `createEvent` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    /// Title, non-empty after trimming.
    pub title: String,
    /// Description, non-empty after trimming.
    pub description: String,
    /// Price, strictly positive.
    pub price: f64,
    /// Date, non-empty after trimming.
    pub date: String,
}

/// The event a booking refers to, reduced to what the bookings page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedEvent {
    /// Event identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title.
    pub title: String,
    /// Date.
    pub date: String,
    /// Price in euros; drives the chart buckets.
    pub price: f64,
}

/// A booking of exactly one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation timestamp as sent by the server.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// The booked event.
    pub event: BookedEvent,
}

/// Payload returned by the `cancelBooking` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledEvent {
    /// Identifier of the event the booking referred to.
    #[serde(rename = "_id")]
    pub id: String,
    /// Its title.
    pub title: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn booking_reads_wire_names() {
        let value = json!({
            "_id": "b1",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "event": { "_id": "e1", "title": "Sailing", "date": "2024-04-01T09:00", "price": 150.0 }
        });
        let Ok(booking) = serde_json::from_value::<Booking>(value) else {
            panic!("booking should decode");
        };
        assert_eq!(booking.id, "b1");
        assert_eq!(booking.created_at, "2024-03-01T10:00:00.000Z");
        assert!((booking.event.price - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn event_without_creator_email_decodes() {
        let value = json!({
            "_id": "e1", "title": "Coding", "description": "Rust night",
            "date": "2024-05-01T18:00", "price": 9.99,
            "creator": { "_id": "u1" }
        });
        let Ok(event) = serde_json::from_value::<Event>(value) else {
            panic!("event should decode");
        };
        assert_eq!(event.creator.email, None);
        assert!(event.is_owned_by(Some("u1")));
        assert!(!event.is_owned_by(Some("u2")));
        assert!(!event.is_owned_by(None));
    }

    #[test]
    fn created_event_takes_creator_from_context() {
        let created = CreatedEvent {
            id: "e9".to_string(),
            title: "Cooking".to_string(),
            description: "Pasta".to_string(),
            date: "2024-06-01T12:00".to_string(),
            price: 20.0,
        };
        let event = Event::from_created(created, "u7");
        assert_eq!(event.id, "e9");
        assert_eq!(event.creator.id, "u7");
    }
}
