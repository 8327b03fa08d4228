use serde::{Deserialize, Serialize};

/// Claims read from a bearer token issued by the identity provider.
///
/// Cognito ID tokens carry the app client in `aud`, access tokens in
/// `client_id`; either is accepted when an allowed-client list is configured.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenClaims {
    pub sub: String, // subject (user ID)
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl TokenClaims {
    /// The app client the token was issued to, if the provider recorded one.
    pub fn issued_to(&self) -> Option<&str> {
        self.client_id.as_deref().or(self.aud.as_deref())
    }
}
