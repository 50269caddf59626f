//! Stateless presentational components rendered as plain text.

pub mod backdrop;
pub mod modal;
pub mod spinner;

pub use backdrop::Backdrop;
pub use modal::{Modal, ModalAction};
pub use spinner::Spinner;
