use crate::core::{Board, Mark, Move};
use serde::{Deserialize, Serialize};

/// 勝ちラインの並び (行 → 列 → 対角線の順)
pub const LINES: [[(usize, usize); 3]; 8] = [
    // 行
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // 列
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // 対角線
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 終局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::Draw => None,
        }
    }
}

fn cell(board: &Board, (row, col): (usize, usize)) -> Option<Mark> {
    board.get(Move { row, col })
}

/// 揃っているラインの記号を返す
///
/// 複数ラインが同時に揃う盤面 (正規の手順では到達不能) では
/// 走査順で最初に見つかったものを返す。
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        if let Some(mark) = cell(board, a) {
            if cell(board, b) == Some(mark) && cell(board, c) == Some(mark) {
                return Some(mark);
            }
        }
    }
    None
}

pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(mark) = winner(board) {
        Some(Outcome::Win(mark))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_some()
}

/// `mark` を置けば即座にラインが揃う空きマス (行優先で最初のもの)
pub fn winning_cell(board: &Board, mark: Mark) -> Option<Move> {
    let mut scratch = *board;
    for mv in board.empty_cells() {
        scratch.set(mv, mark);
        let wins = winner(&scratch) == Some(mark);
        scratch.clear(mv);
        if wins {
            return Some(mv);
        }
    }
    None
}
