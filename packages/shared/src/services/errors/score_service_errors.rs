use crate::repositories::errors::score_repository_errors::ScoreRepositoryError;

#[derive(Debug)]
pub enum ScoreServiceError {
    RepositoryError(ScoreRepositoryError),
    ValidationError(String),
}

impl std::fmt::Display for ScoreServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreServiceError::RepositoryError(err) => {
                write!(f, "Repository error: {}", err)
            }
            ScoreServiceError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ScoreServiceError {}

impl From<ScoreRepositoryError> for ScoreServiceError {
    fn from(err: ScoreRepositoryError) -> Self {
        ScoreServiceError::RepositoryError(err)
    }
}
