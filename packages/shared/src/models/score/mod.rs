pub mod requests;
pub mod responses;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// strftime pattern used whenever a score's play time is shown to a client,
/// e.g. `Mar 04, 2024 07:15:09 PM`.
pub const TIME_FORMAT: &str = "%b %d, %Y %I:%M:%S %p";

/// Page size used when a list request does not name one.
pub const DEFAULT_LIMIT: i64 = 10;

/// A finished game submitted by a player.
/// Each record corresponds to a DynamoDB item partitioned by owner.
/// Example PK: "cognito-sub", SK: 42
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Score {
    pub owner: String,
    pub id: i64,
    pub outcome: String,
    /// Stored as epoch microseconds so the store sorts it numerically.
    #[serde(with = "chrono::serde::ts_microseconds")]
    pub played_at: DateTime<Utc>,
}

impl Score {
    /// `played_at` rendered with [`TIME_FORMAT`].
    pub fn timestamp(&self) -> String {
        self.played_at.format(TIME_FORMAT).to_string()
    }
}

/// The caller-controlled part of a score. Id and play time are filled in by
/// the repository at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub owner: String,
    pub outcome: String,
}

impl NewScore {
    pub fn new(owner: &str, outcome: &str) -> Self {
        NewScore {
            owner: owner.to_string(),
            outcome: outcome.to_string(),
        }
    }

    pub fn into_score(self, id: i64, played_at: DateTime<Utc>) -> Score {
        Score {
            owner: self.owner,
            id,
            outcome: self.outcome,
            played_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreOrder {
    /// Most recently played first.
    #[default]
    ByTimeDesc,
    /// Lexicographic by outcome; ties keep the store's natural order.
    ByOutcomeTextAsc,
}

/// A page of one owner's scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreQuery {
    pub owner: String,
    pub order: ScoreOrder,
    pub limit: usize,
}
