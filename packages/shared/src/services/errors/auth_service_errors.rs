use std::fmt;

#[derive(Debug)]
pub enum AuthServiceError {
    Unauthorized,
    InvalidToken,
    ExpiredToken,
    ClientNotAllowed(String),
    JwtError(String),
}

impl fmt::Display for AuthServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthServiceError::Unauthorized => write!(f, "Invalid token."),
            AuthServiceError::InvalidToken => write!(f, "Invalid JWT token"),
            AuthServiceError::ExpiredToken => write!(f, "JWT token has expired"),
            AuthServiceError::ClientNotAllowed(client) => {
                write!(f, "Client {} is not allowed to call this API", client)
            }
            AuthServiceError::JwtError(msg) => write!(f, "JWT error: {}", msg),
        }
    }
}

impl std::error::Error for AuthServiceError {}
