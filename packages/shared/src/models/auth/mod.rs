pub mod claims;

use serde::{Deserialize, Serialize};

/// The authenticated principal behind a request.
///
/// Resolved once at the API boundary and passed explicitly into every
/// operation that scopes data by user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Identity {
            user_id: user_id.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl From<claims::TokenClaims> for Identity {
    fn from(claims: claims::TokenClaims) -> Self {
        Identity {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}
