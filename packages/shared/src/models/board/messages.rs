use serde::{Deserialize, Serialize};

/// Wire shape for `POST /board`, used for both the request and the response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BoardMessage {
    pub state: String,
}

impl From<&super::Board> for BoardMessage {
    fn from(board: &super::Board) -> Self {
        BoardMessage {
            state: board.to_string(),
        }
    }
}
