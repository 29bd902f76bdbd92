use serde::{Deserialize, Serialize};
use std::fmt;

/// 記号 (○×)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X, // 先手
    O, // 後手
}

impl Default for Mark {
    fn default() -> Self {
        Mark::X
    }
}

impl Mark {
    /// 先手の記号。対局開始時・リセット時は常にXから
    pub const FIRST: Mark = Mark::X;

    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
