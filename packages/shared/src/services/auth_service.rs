use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::claims::TokenClaims;
use crate::models::auth::Identity;
use crate::services::errors::auth_service_errors::AuthServiceError;

/// How bearer tokens are trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Tokens are HS256-signed with a shared secret and verified here.
    Verify { secret: String },
    /// An API Gateway authorizer has already verified the token; only the
    /// claims are read.
    Gateway,
}

/// Turns the caller's credentials into an [`Identity`].
pub trait IdentityResolver: Send + Sync {
    fn identity_from_token(&self, token: &str) -> Result<Identity, AuthServiceError>;

    /// Resolves the caller from an optional bearer token.
    ///
    /// With `require_present` an absent token is `Unauthorized`; without it
    /// the caller is anonymous. A token that is present but bad is always an
    /// error.
    fn resolve(
        &self,
        token: Option<&str>,
        require_present: bool,
    ) -> Result<Option<Identity>, AuthServiceError> {
        match token {
            Some(token) => self.identity_from_token(token).map(Some),
            None if require_present => Err(AuthServiceError::Unauthorized),
            None => Ok(None),
        }
    }
}

pub struct AuthService {
    mode: AuthMode,
    allowed_client_ids: Vec<String>,
}

impl AuthService {
    pub fn new(mode: AuthMode) -> Self {
        AuthService {
            mode,
            allowed_client_ids: Vec::new(),
        }
    }

    pub fn with_jwt_secret(jwt_secret: String) -> Self {
        Self::new(AuthMode::Verify { secret: jwt_secret })
    }

    /// Restricts accepted tokens to the given app clients. An empty list
    /// accepts any client.
    pub fn with_allowed_client_ids(mut self, allowed_client_ids: Vec<String>) -> Self {
        self.allowed_client_ids = allowed_client_ids;
        self
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError> {
        let (decoding_key, mut validation) = match &self.mode {
            AuthMode::Verify { secret } => (
                DecodingKey::from_secret(secret.as_ref()),
                Validation::new(Algorithm::HS256),
            ),
            AuthMode::Gateway => {
                let mut validation = Validation::default();
                validation.insecure_disable_signature_validation();
                (DecodingKey::from_secret(&[]), validation)
            }
        };
        // Audience is checked against the allowed client list below.
        validation.validate_aud = false;

        let claims = match decode::<TokenClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => token_data.claims,
            Err(err) => {
                return match err.kind() {
                    ErrorKind::ExpiredSignature => Err(AuthServiceError::ExpiredToken),
                    _ => Err(AuthServiceError::InvalidToken),
                }
            }
        };

        if claims.sub.is_empty() {
            return Err(AuthServiceError::InvalidToken);
        }

        if !self.allowed_client_ids.is_empty() {
            match claims.issued_to() {
                Some(client) if self.allowed_client_ids.iter().any(|id| id == client) => {}
                other => {
                    return Err(AuthServiceError::ClientNotAllowed(
                        other.unwrap_or("<none>").to_string(),
                    ))
                }
            }
        }

        Ok(claims)
    }

    /// Signs a token for `identity`. Only available when this service holds
    /// the signing secret; in gateway mode tokens come from the provider.
    pub fn issue_token(
        &self,
        identity: &Identity,
        lifetime: Duration,
    ) -> Result<String, AuthServiceError> {
        let AuthMode::Verify { secret } = &self.mode else {
            return Err(AuthServiceError::JwtError(
                "tokens are issued by the identity provider".to_string(),
            ));
        };

        let now = Utc::now();
        let claims = TokenClaims {
            sub: identity.user_id.clone(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
            email: identity.email.clone(),
            aud: None,
            client_id: None,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|e| AuthServiceError::JwtError(format!("{:#?}", e)))
    }
}

impl IdentityResolver for AuthService {
    fn identity_from_token(&self, token: &str) -> Result<Identity, AuthServiceError> {
        self.verify_token(token).map(Identity::from)
    }
}
