use crate::core::{Board, Mark, Move};
use crate::error::GameError;
use crate::logic::{outcome, Outcome};
use crate::player::{Difficulty, PlayerController};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    /// 先手 (X) の思考ルーチン
    pub x: Difficulty,
    /// 後手 (O) の思考ルーチン
    pub o: Difficulty,
    pub random_opening: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Mark>,
    pub moves: Vec<Move>,
    pub time_us: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_us: f64,
    pub x_policy: String,
    pub o_policy: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves.len()).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_us).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_us = total_time as f64 / self.games.len() as f64;
    }

    pub fn rate(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// 二つの思考ルーチンで一局指す
pub fn play_game(
    x: &dyn PlayerController,
    o: &dyn PlayerController,
) -> Result<(Option<Mark>, Vec<Move>), GameError> {
    let mut board = Board::new();
    let mut current = Mark::FIRST;
    let mut moves = Vec::with_capacity(9);

    loop {
        if let Some(result) = outcome(&board) {
            let winner = match result {
                Outcome::Win(mark) => Some(mark),
                Outcome::Draw => None,
            };
            return Ok((winner, moves));
        }

        let controller = match current {
            Mark::X => x,
            Mark::O => o,
        };
        let mv = controller.choose_move(&board, current.opponent(), current)?;
        board.place(mv, current)?;
        moves.push(mv);
        current = current.opponent();
    }
}

pub fn run_selfplay(config: SelfPlayConfig) -> Result<SelfPlayStats, GameError> {
    let x_policy = config
        .x
        .controller(config.random_opening)
        .ok_or(GameError::ManualSelfPlay)?;
    let o_policy = config
        .o
        .controller(config.random_opening)
        .ok_or(GameError::ManualSelfPlay)?;

    info!(
        games = config.num_games,
        x = %config.x,
        o = %config.o,
        "self-play started"
    );

    // 対局ごとに独立なので並列に回す
    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| -> Result<GameResult, GameError> {
            let start_time = Instant::now();
            let (winner, moves) = play_game(x_policy.as_ref(), o_policy.as_ref())?;
            debug!(game_num, ?winner, moves = moves.len(), "game finished");
            Ok(GameResult {
                winner,
                moves,
                time_us: start_time.elapsed().as_micros(),
            })
        })
        .collect::<Result<_, _>>()?;

    let mut stats = SelfPlayStats::new();
    stats.x_policy = config.x.to_string();
    stats.o_policy = config.o.to_string();
    for result in results {
        stats.add_result(result);
    }

    info!(
        x_wins = stats.x_wins,
        o_wins = stats.o_wins,
        draws = stats.draws,
        "self-play finished"
    );
    Ok(stats)
}

pub fn save_stats(stats: &SelfPlayStats) -> anyhow::Result<PathBuf> {
    let stats_dir = "selfplay_stats";
    std::fs::create_dir_all(stats_dir)?;

    let filename = PathBuf::from(format!(
        "{}/{}_vs_{}_{}.json",
        stats_dir,
        stats.x_policy,
        stats.o_policy,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(filename)
}
