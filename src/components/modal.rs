//! Dialog with a title, a content section, and optional action buttons.

use std::fmt::Write as _;

/// Button a user can press on a [`Modal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Dismiss without applying anything.
    Cancel,
    /// Apply the dialog's content.
    Confirm,
}

impl ModalAction {
    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Confirm => "Confirm",
        }
    }
}

/// A modal dialog. Buttons are shown only when enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    /// Header text.
    pub title: String,
    /// Show the Cancel button.
    pub can_cancel: bool,
    /// Show the Confirm button.
    pub can_confirm: bool,
}

impl Modal {
    /// A modal with no buttons.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            can_cancel: false,
            can_confirm: false,
        }
    }

    /// Enables the Cancel button.
    #[must_use]
    pub fn cancellable(mut self) -> Self {
        self.can_cancel = true;
        self
    }

    /// Enables the Confirm button.
    #[must_use]
    pub fn confirmable(mut self) -> Self {
        self.can_confirm = true;
        self
    }

    /// Enabled buttons in display order.
    #[must_use]
    pub fn actions(&self) -> Vec<ModalAction> {
        let mut actions = Vec::with_capacity(2);
        if self.can_cancel {
            actions.push(ModalAction::Cancel);
        }
        if self.can_confirm {
            actions.push(ModalAction::Confirm);
        }
        actions
    }

    /// Renders header, `content`, and the action row.
    #[must_use]
    pub fn render(&self, content: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", self.title);
        for line in content.lines() {
            let _ = writeln!(out, "  {line}");
        }
        let buttons: Vec<String> = self
            .actions()
            .into_iter()
            .map(|action| format!("[{}]", action.label()))
            .collect();
        if !buttons.is_empty() {
            let _ = writeln!(out, "{}", buttons.join(" "));
        }
        out
    }
}
