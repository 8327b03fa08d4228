use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::board::{Board, Cell};
use crate::services::errors::move_service_errors::MoveServiceError;

/// Plays the computer's turn: an `O` on a uniformly random empty cell.
#[derive(Clone, Default)]
pub struct MoveService;

impl MoveService {
    pub fn new() -> Self {
        MoveService
    }

    /// Parses `state` and plays one move on it.
    pub fn get_move(&self, state: &str) -> Result<Board, MoveServiceError> {
        let board: Board = state.parse()?;
        self.make_move(&board)
    }

    pub fn make_move(&self, board: &Board) -> Result<Board, MoveServiceError> {
        self.make_move_with_rng(board, &mut rand::thread_rng())
    }

    pub fn make_move_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Board, MoveServiceError> {
        let free_indices = board.empty_cells();
        let index = free_indices
            .choose(rng)
            .copied()
            .ok_or(MoveServiceError::NoEmptyCell)?;

        Ok(board.with_cell(index, Cell::O))
    }
}
