//! GraphQL documents issued by the booking client.

/// A named GraphQL document and the `data` field its result lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Short name used in logs.
    pub name: &'static str,
    /// GraphQL document sent as `query`.
    pub document: &'static str,
    /// Top-level field of `data` holding the result.
    pub field: &'static str,
    /// Whether the bearer token is attached.
    pub authenticated: bool,
}

/// Lists every event with its creator.
pub const FETCH_EVENTS: Operation = Operation {
    name: "fetch_events",
    document: "query { events { _id title description date price creator { _id email } } }",
    field: "events",
    authenticated: false,
};

/// Lists the bookings of the current user.
pub const FETCH_BOOKINGS: Operation = Operation {
    name: "fetch_bookings",
    document: "query { bookings { _id createdAt event { _id title date price } } }",
    field: "bookings",
    authenticated: true,
};

/// Creates an event; expects `$eventInput`.
pub const CREATE_EVENT: Operation = Operation {
    name: "create_event",
    document: "mutation CreateEvent($eventInput: EventInput!) { \
               createEvent(eventInput: $eventInput) { _id title description date price } }",
    field: "createEvent",
    authenticated: true,
};

/// Cancels a booking; expects `$id`.
pub const CANCEL_BOOKING: Operation = Operation {
    name: "cancel_booking",
    document: "mutation CancelBooking($id: ID!) { cancelBooking(bookingId: $id) { _id title } }",
    field: "cancelBooking",
    authenticated: true,
};
