//! Ambient authentication values consumed by the pages.

use std::fmt;

/// Bearer token and user identifier of the signed-in user, if any.
///
/// How the token is obtained is not this crate's concern; the pages only
/// read it to decide which controls to show and which header to send.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
    user_id: Option<String>,
}

impl AuthContext {
    /// Context for a signed-in user.
    #[must_use]
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id.into()),
        }
    }

    /// Context with neither token nor user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The bearer token, if present.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The user identifier, if present.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// `true` when a token is available.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .finish()
    }
}
