use serde::{Deserialize, Serialize};

/// An authenticated session: the bearer token plus the profile fields the
/// login endpoint returns.
///
/// This is the single source of truth for the current token. The API
/// client owns one and is the only place the token is ever attached to an
/// outgoing request. Serializable so a frontend can persist it across
/// page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub name: String,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Name to show in the dashboard header; falls back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Uppercase initial for the avatar badge; 'U' when nothing is known.
    #[must_use]
    pub fn initial(&self) -> char {
        self.display_name()
            .trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}
