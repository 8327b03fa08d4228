#[derive(Debug)]
pub enum ScoreRepositoryError {
    Serialization(String),
    DynamoDb(String),
    CounterUnavailable,
}

impl std::fmt::Display for ScoreRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreRepositoryError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ScoreRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
            ScoreRepositoryError::CounterUnavailable => {
                write!(f, "Score id counter returned no value")
            }
        }
    }
}

impl std::error::Error for ScoreRepositoryError {}
