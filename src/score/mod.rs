use crate::core::Mark;
use crate::game::MoveEvent;
use crate::player::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 勝敗の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub user: usize,
    /// コンピュータ、または二人対戦の相手
    pub opponent: usize,
    pub draws: usize,
}

impl Tally {
    pub fn games(&self) -> usize {
        self.user + self.opponent + self.draws
    }
}

/// 難易度ごとのスコア表。終局イベントを受けて数えるだけで、保存はしない
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    tallies: HashMap<Difficulty, Tally>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 終局イベントを記録。`MoveEvent::None` は無視
    pub fn record(&mut self, difficulty: Difficulty, human: Mark, event: MoveEvent) {
        let tally = self.tallies.entry(difficulty).or_default();
        match event {
            MoveEvent::Won(mark) if mark == human => tally.user += 1,
            MoveEvent::Won(_) => tally.opponent += 1,
            MoveEvent::Draw => tally.draws += 1,
            MoveEvent::None => {}
        }
    }

    pub fn get(&self, difficulty: Difficulty) -> Tally {
        self.tallies.get(&difficulty).copied().unwrap_or_default()
    }

    pub fn reset_difficulty(&mut self, difficulty: Difficulty) {
        self.tallies.remove(&difficulty);
    }
}
