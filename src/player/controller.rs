use crate::core::{Board, Mark, Move};
use crate::error::GameError;

/// 思考ルーチンのtrait
///
/// `board` には少なくとも一つ空きマスがあること。無ければ
/// `GameError::EmptyBoardPrecondition` を返す。盤面は読むだけで変更しない。
pub trait PlayerController: Send + Sync {
    fn choose_move(&self, board: &Board, player: Mark, computer: Mark)
        -> Result<Move, GameError>;
    fn name(&self) -> &str;
}
