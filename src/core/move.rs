use super::board::BOARD_SIZE;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 着手 (0-indexed の行・列)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// 範囲外の座標は `OutOfBounds`
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Move { row, col })
    }

    /// 行優先のインデックス (0..9) から
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        Move::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// フィールドを直接組み立てた手は範囲外のことがある
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
