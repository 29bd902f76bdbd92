use crate::core::{Board, Mark, Move};
use crate::error::GameError;
use crate::player::PlayerController;
use rand::seq::SliceRandom;

pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }

    /// 空きマスから一様に選ぶ
    pub fn pick(board: &Board) -> Result<Move, GameError> {
        let mut rng = rand::thread_rng();
        board
            .empty_cells()
            .choose(&mut rng)
            .copied()
            .ok_or(GameError::EmptyBoardPrecondition)
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, _player: Mark, _computer: Mark) -> Result<Move, GameError> {
        RandomAI::pick(board)
    }
}
