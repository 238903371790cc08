use serde::{Deserialize, Serialize};

/// An authenticated session handed to the appointment core on activation.
///
/// Token persistence and login flows live outside the core; holding a
/// `Session` value is the only signal that the user is authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Returns `None` for a blank token, which callers treat as "not logged in".
    pub fn from_token(user_id: impl Into<String>, access_token: Option<String>) -> Option<Self> {
        access_token
            .filter(|token| !token.trim().is_empty())
            .map(|token| Self::new(user_id, token))
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
