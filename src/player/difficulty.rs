use crate::error::GameError;
use crate::player::ai::{HeuristicAI, MinimaxAI, RandomAI};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 難易度 (= 対局中に使う思考ルーチン)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Random,
    #[serde(alias = "medium")]
    Heuristic,
    #[serde(alias = "impossible")]
    Minimax,
    /// 二人対戦。コンピュータは指さない
    Manual,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Random,
        Difficulty::Heuristic,
        Difficulty::Minimax,
        Difficulty::Manual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Random => "random",
            Difficulty::Heuristic => "heuristic",
            Difficulty::Minimax => "minimax",
            Difficulty::Manual => "manual",
        }
    }

    /// 画面表示用の名前
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Random => "Easy",
            Difficulty::Heuristic => "Medium",
            Difficulty::Minimax => "Impossible",
            Difficulty::Manual => "Two Players",
        }
    }

    /// 思考ルーチンを作る。`Manual` は `None`
    pub fn controller(self, random_opening: bool) -> Option<Box<dyn PlayerController>> {
        match self {
            Difficulty::Random => Some(Box::new(RandomAI::new("Random AI"))),
            Difficulty::Heuristic => Some(Box::new(HeuristicAI::new("Heuristic AI"))),
            Difficulty::Minimax => Some(Box::new(
                MinimaxAI::new("Minimax AI").with_random_opening(random_opening),
            )),
            Difficulty::Manual => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Minimax
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(Difficulty::Random),
            "heuristic" | "medium" => Ok(Difficulty::Heuristic),
            "minimax" | "impossible" => Ok(Difficulty::Minimax),
            "manual" => Ok(Difficulty::Manual),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
