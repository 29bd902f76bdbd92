use crate::core::{Board, Mark, Move};
use crate::error::GameError;
use crate::logic::winning_cell;
use crate::player::ai::RandomAI;
use crate::player::PlayerController;
use tracing::debug;

/// 一手詰め → 一手受け → ランダム
pub struct HeuristicAI {
    pub name: String,
}

impl HeuristicAI {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl PlayerController for HeuristicAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, player: Mark, computer: Mark) -> Result<Move, GameError> {
        if board.is_full() {
            return Err(GameError::EmptyBoardPrecondition);
        }

        if let Some(mv) = winning_cell(board, computer) {
            debug!(%mv, "taking the win");
            return Ok(mv);
        }

        if let Some(mv) = winning_cell(board, player) {
            debug!(%mv, "blocking");
            return Ok(mv);
        }

        RandomAI::pick(board)
    }
}
