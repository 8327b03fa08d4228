use crate::models::board::BoardError;

#[derive(Debug, PartialEq, Eq)]
pub enum MoveServiceError {
    InvalidBoard(BoardError),
    NoEmptyCell,
}

impl std::fmt::Display for MoveServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveServiceError::InvalidBoard(err) => write!(f, "{}", err),
            MoveServiceError::NoEmptyCell => write!(f, "Invalid board: no empty cell left to play"),
        }
    }
}

impl std::error::Error for MoveServiceError {}

impl From<BoardError> for MoveServiceError {
    fn from(err: BoardError) -> Self {
        MoveServiceError::InvalidBoard(err)
    }
}
