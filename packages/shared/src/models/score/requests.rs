use serde::{Deserialize, Serialize};

use super::{ScoreOrder, DEFAULT_LIMIT};

/// Sort order as named on the wire.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreOrderParam {
    #[default]
    When,
    Text,
}

impl From<ScoreOrderParam> for ScoreOrder {
    fn from(param: ScoreOrderParam) -> Self {
        match param {
            ScoreOrderParam::When => ScoreOrder::ByTimeDesc,
            ScoreOrderParam::Text => ScoreOrder::ByOutcomeTextAsc,
        }
    }
}

/// Query string of `GET /scores`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoresListRequest {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub order: Option<ScoreOrderParam>,
}

impl ScoresListRequest {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn order(&self) -> ScoreOrder {
        self.order.unwrap_or_default().into()
    }
}

/// Body of `POST /scores`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreRequest {
    pub outcome: String,
}
