use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::services::errors::{
    auth_service_errors::AuthServiceError, move_service_errors::MoveServiceError,
    score_service_errors::ScoreServiceError,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    MoveService(MoveServiceError),
    ScoreService(ScoreServiceError),
    AuthService(AuthServiceError),
    BadRequest(String),
}

impl From<MoveServiceError> for ApiError {
    fn from(error: MoveServiceError) -> Self {
        ApiError::MoveService(error)
    }
}

impl From<ScoreServiceError> for ApiError {
    fn from(error: ScoreServiceError) -> Self {
        ApiError::ScoreService(error)
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MoveService(err) => write!(f, "{}", err),
            ApiError::ScoreService(err) => write!(f, "{}", err),
            ApiError::AuthService(err) => write!(f, "{}", err),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MoveService(
                MoveServiceError::InvalidBoard(_) | MoveServiceError::NoEmptyCell,
            ) => StatusCode::BAD_REQUEST,

            ApiError::ScoreService(ScoreServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ScoreService(ScoreServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::AuthService(
                AuthServiceError::Unauthorized
                | AuthServiceError::InvalidToken
                | AuthServiceError::ExpiredToken
                | AuthServiceError::ClientNotAllowed(_),
            ) => StatusCode::UNAUTHORIZED,
            ApiError::AuthService(AuthServiceError::JwtError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
