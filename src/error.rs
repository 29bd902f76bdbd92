use thiserror::Error;

/// エンジンのエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 埋まったマス・終局後・手番外などの不正手。状態は変わらない
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: String,
    },

    /// 記号選択や応手など、マスに依らない手番・段階の誤り
    #[error("out of turn: {0}")]
    OutOfTurn(String),

    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    /// 空きマスが無い盤面で思考ルーチンが呼ばれた (呼び出し側の不具合)
    #[error("move policy invoked on a board with no empty cells")]
    EmptyBoardPrecondition,

    #[error("unknown difficulty '{0}' (expected random, heuristic, minimax or manual)")]
    UnknownDifficulty(String),

    #[error("self-play requires a computer policy on both sides")]
    ManualSelfPlay,
}
