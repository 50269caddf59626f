//! Shade drawn behind an open modal.

/// Width of the rendered shade line.
pub const BACKDROP_WIDTH: usize = 40;

/// Full-width shade line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Backdrop;

impl Backdrop {
    /// Renders the shade.
    #[must_use]
    pub fn render(self) -> String {
        format!("{}\n", "#".repeat(BACKDROP_WIDTH))
    }
}
