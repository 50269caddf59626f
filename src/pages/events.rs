//! Events page: the event list and the "Add Event" modal.

use std::fmt::Write as _;

use super::PageError;
use super::form::EventForm;
use crate::client::{AuthContext, BookingApi, ClientError, Event};
use crate::components::{Backdrop, Modal, ModalAction};

/// View state of the events page.
///
/// `creating` is `true` while the "Add Event" modal is open.
#[derive(Debug, Clone)]
pub struct EventsPage {
    auth: AuthContext,
    creating: bool,
    events: Vec<Event>,
}

impl EventsPage {
    /// An empty page for the given user.
    #[must_use]
    pub fn new(auth: AuthContext) -> Self {
        Self {
            auth,
            creating: false,
            events: Vec::new(),
        }
    }

    /// Whether the modal is open.
    #[must_use]
    pub fn creating(&self) -> bool {
        self.creating
    }

    /// Events currently listed.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Loads the list when the page is first shown.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`] of the fetch.
    pub async fn mount<A: BookingApi>(&mut self, api: &A) -> Result<(), ClientError> {
        self.fetch_events(api).await
    }

    /// Replaces the list with the server's.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`] of the fetch; the list is unchanged.
    pub async fn fetch_events<A: BookingApi>(&mut self, api: &A) -> Result<(), ClientError> {
        self.events = api.fetch_events().await?;
        tracing::debug!(count = self.events.len(), "events loaded");
        Ok(())
    }

    /// Opens the modal.
    pub fn start_create_event(&mut self) {
        self.creating = true;
    }

    /// Closes the modal without submitting.
    pub fn cancel_create_event(&mut self) {
        self.creating = false;
    }

    /// Closes the modal and submits `form`.
    ///
    /// An invalid form is rejected before any request is made. On success
    /// the new event is appended with the current user as creator.
    ///
    /// # Errors
    ///
    /// - [`PageError::InvalidForm`] if validation fails.
    /// - [`PageError::Client`] if the mutation fails.
    pub async fn confirm_create_event<A: BookingApi>(
        &mut self,
        api: &A,
        form: &EventForm,
    ) -> Result<Event, PageError> {
        self.creating = false;
        let input = form.validate()?;

        let created = api.create_event(self.auth.token(), &input).await?;
        let event = Event::from_created(created, self.auth.user_id().unwrap_or_default());
        tracing::info!(id = %event.id, title = %event.title, "event created");

        self.events.push(event.clone());
        Ok(event)
    }

    /// Dispatches a press on one of the modal's buttons.
    ///
    /// # Errors
    ///
    /// Same as [`EventsPage::confirm_create_event`] for `Confirm`.
    pub async fn handle_modal_action<A: BookingApi>(
        &mut self,
        api: &A,
        action: ModalAction,
        form: &EventForm,
    ) -> Result<(), PageError> {
        match action {
            ModalAction::Cancel => self.cancel_create_event(),
            ModalAction::Confirm => {
                self.confirm_create_event(api, form).await?;
            }
        }
        Ok(())
    }

    /// The "Add Event" modal while it is open.
    #[must_use]
    pub fn modal(&self) -> Option<Modal> {
        self.creating
            .then(|| Modal::new("Add Event").cancellable().confirmable())
    }

    /// Renders the page.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(modal) = self.modal() {
            out.push_str(&Backdrop.render());
            out.push_str(&modal.render("Title\nPrice\nDate\nDescription"));
        }

        if self.auth.is_authenticated() {
            out.push_str("Create your events!\n[Create Event]\n");
        }

        out.push_str("Upcoming Events\n");
        for event in &self.events {
            let _ = writeln!(out, "- Name: {}", event.title);
            let _ = writeln!(out, "  Price: {} Eur", event.price);
            if event.is_owned_by(self.auth.user_id()) {
                out.push_str("  You are the owner of this event!\n");
            } else {
                out.push_str("  [Details]\n");
            }
        }
        out
    }
}
