use super::r#move::Move;
use super::types::Mark;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 3;

/// 盤面 (3x3 固定)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.cells[mv.row][mv.col]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv).is_none()
    }

    /// 空きマスに一つだけ置く。範囲外や埋まっていれば盤面は変更しない
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), GameError> {
        if !mv.is_on_board() {
            return Err(GameError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if let Some(existing) = self.get(mv) {
            return Err(GameError::InvalidMove {
                row: mv.row,
                col: mv.col,
                reason: format!("cell already holds {}", existing),
            });
        }
        self.cells[mv.row][mv.col] = Some(mark);
        Ok(())
    }

    /// 探索用の直接書き込み。空きマスであることは呼び出し側が保証する
    pub(crate) fn set(&mut self, mv: Move, mark: Mark) {
        debug_assert!(self.is_empty_at(mv));
        self.cells[mv.row][mv.col] = Some(mark);
    }

    /// 探索用の取り消し
    pub(crate) fn clear(&mut self, mv: Move) {
        self.cells[mv.row][mv.col] = None;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|c| c.is_some()))
    }

    /// 空きマス一覧 (行優先順)
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].is_none() {
                    moves.push(Move { row, col });
                }
            }
        }
        moves
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Some(mark))
            .count()
    }

    pub fn rows(&self) -> &[[Option<Mark>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// "XO./..." のような文字列から盤面を作る (テスト・デバッグ用)
    ///
    /// `X`/`O` 以外の非空白文字は空きマス扱い。9マスに満たなければ `None`。
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let cells: Vec<Option<Mark>> = pattern
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            })
            .collect();
        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return None;
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }
        Some(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                let c = cell.map(Mark::as_char).unwrap_or('.');
                write!(f, "{}", c)?;
            }
            if i < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
