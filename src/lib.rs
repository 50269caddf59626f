//! # eventbook
//!
//! GraphQL gateway and booking client for the event-booking demo.
//!
//! The gateway serves a two-field schema (`events`, `createEvent`) over
//! Axum together with a GraphiQL console. The client half models the
//! booking frontend: a typed GraphQL client, the events and bookings page
//! view-models, and a few text-rendered presentational components.
//!
//! ## Architecture
//!
//! ```text
//! Pages (pages/)  ──  Components (components/)
//!     │
//!     ├── BookingApi / GraphqlClient (client/)
//!     │        │  HTTP POST, JSON
//!     ▼        ▼
//! Axum router (api/)  ──  GraphiQL, /health
//!     │
//!     └── async-graphql Schema (schema/)
//! ```

pub mod api;
pub mod app_state;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod schema;
