use serde::{Deserialize, Serialize};

use super::Score;

/// A stored score as returned to clients. The owner is never included.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScoreResponse {
    pub id: i64,
    pub outcome: String,
    pub played: String,
}

impl From<&Score> for ScoreResponse {
    fn from(score: &Score) -> Self {
        ScoreResponse {
            id: score.id,
            outcome: score.outcome.clone(),
            played: score.timestamp(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScoresListResponse {
    pub items: Vec<ScoreResponse>,
}

impl From<Vec<Score>> for ScoresListResponse {
    fn from(scores: Vec<Score>) -> Self {
        ScoresListResponse {
            items: scores.iter().map(ScoreResponse::from).collect(),
        }
    }
}
