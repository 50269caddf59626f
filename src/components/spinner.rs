//! Loading indicator.

/// Shown in place of page content while a request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner;

impl Spinner {
    /// Renders the indicator.
    #[must_use]
    pub fn render(self) -> String {
        "(loading...)\n".to_string()
    }
}
