use crate::core::{Board, Mark, Move};
use crate::error::GameError;
use crate::logic::winner;
use crate::player::ai::RandomAI;
use crate::player::PlayerController;
use tracing::debug;

/// 勝ちの基準点。深さを引いて早い勝ち・遅い負けを優先する
const WIN_SCORE: i32 = 10;

/// 全探索 minimax
pub struct MinimaxAI {
    pub name: String,
    /// 先手 (X) の初手だけランダムにする
    pub random_opening: bool,
}

impl MinimaxAI {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            random_opening: true,
        }
    }

    pub fn with_random_opening(mut self, enabled: bool) -> Self {
        self.random_opening = enabled;
        self
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: i32,
        is_maximizing: bool,
        player: Mark,
        computer: Mark,
    ) -> i32 {
        match winner(board) {
            Some(mark) if mark == computer => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None => {}
        }
        if board.is_full() {
            return 0;
        }

        let to_move = if is_maximizing { computer } else { player };

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for mv in board.empty_cells() {
                board.set(mv, to_move);
                let eval = self.minimax(board, depth + 1, false, player, computer);
                board.clear(mv);
                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in board.empty_cells() {
                board.set(mv, to_move);
                let eval = self.minimax(board, depth + 1, true, player, computer);
                board.clear(mv);
                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }

    /// 各空きマスに自分の記号を置いたときの評価値 (行優先順)
    pub fn evaluate_moves(&self, board: &Board, player: Mark, computer: Mark) -> Vec<(Move, i32)> {
        let mut scratch = *board;
        board
            .empty_cells()
            .into_iter()
            .map(|mv| {
                scratch.set(mv, computer);
                // 自分の一手は置いたので、次は相手の番 (is_maximizing=false)
                let score = self.minimax(&mut scratch, 0, false, player, computer);
                scratch.clear(mv);
                (mv, score)
            })
            .collect()
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, player: Mark, computer: Mark) -> Result<Move, GameError> {
        if board.is_full() {
            return Err(GameError::EmptyBoardPrecondition);
        }

        if self.random_opening && computer == Mark::FIRST && board.empty_cells().len() == 9 {
            let mv = RandomAI::pick(board)?;
            debug!(%mv, "random opening");
            return Ok(mv);
        }

        let mut best_move = None;
        let mut best_value = i32::MIN;

        // 同点なら先に見つかった手 (> で更新)
        for (mv, value) in self.evaluate_moves(board, player, computer) {
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }

        let mv = best_move.ok_or(GameError::EmptyBoardPrecondition)?;
        debug!(%mv, score = best_value, "minimax move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
