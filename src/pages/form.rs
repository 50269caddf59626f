//! The "Add Event" form and its client-side validation.

use crate::client::EventInput;

/// Reason the event form was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Price is missing, not a number, or not strictly positive.
    #[error("price must be a positive number")]
    InvalidPrice,
    /// Date is empty after trimming.
    #[error("date must not be empty")]
    EmptyDate,
    /// Description is empty after trimming.
    #[error("description must not be empty")]
    EmptyDescription,
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    /// Title input.
    pub title: String,
    /// Price input, parsed on submit.
    pub price: String,
    /// Date input (`datetime-local` format).
    pub date: String,
    /// Description textarea.
    pub description: String,
}

impl EventForm {
    /// Checks every field and builds the mutation input.
    ///
    /// Values are sent as typed; trimming is only used for the emptiness
    /// checks.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`FormError`], in the order
    /// title, price, date, description.
    pub fn validate(&self) -> Result<EventInput, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let price = parse_price(&self.price).ok_or(FormError::InvalidPrice)?;
        if self.date.trim().is_empty() {
            return Err(FormError::EmptyDate);
        }
        if self.description.trim().is_empty() {
            return Err(FormError::EmptyDescription);
        }

        Ok(EventInput {
            title: self.title.clone(),
            description: self.description.clone(),
            price,
            date: self.date.clone(),
        })
    }
}

/// A finite, strictly positive price.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}
