//! CLI tool for pitting two move policies against each other
//!
//! Usage: selfplay [num_games] [x_policy] [o_policy] [--fixed-opening] [--save]

use marubatsu_ai::player::Difficulty;
use marubatsu_ai::selfplay::{run_selfplay, save_stats, SelfPlayConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let flags: Vec<&str> = args
        .iter()
        .filter(|a| a.starts_with("--"))
        .map(String::as_str)
        .collect();
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    let num_games = match positional.first() {
        Some(n) => n.parse::<usize>()?,
        None => 100,
    };
    let x: Difficulty = positional.get(1).copied().unwrap_or("minimax").parse()?;
    let o: Difficulty = positional.get(2).copied().unwrap_or("minimax").parse()?;

    let config = SelfPlayConfig {
        num_games,
        x,
        o,
        random_opening: !flags.contains(&"--fixed-opening"),
    };
    let stats = run_selfplay(config)?;

    println!("=== Self-Play Result: {} (X) vs {} (O) ===", x, o);
    println!("Games: {}", stats.total_games);
    println!("X Wins: {} ({:.1}%)", stats.x_wins, stats.rate(stats.x_wins));
    println!("O Wins: {} ({:.1}%)", stats.o_wins, stats.rate(stats.o_wins));
    println!("Draws: {} ({:.1}%)", stats.draws, stats.rate(stats.draws));
    println!("Avg Moves: {:.1}", stats.avg_moves);
    println!("Avg Time: {:.1}us", stats.avg_time_us);

    if flags.contains(&"--save") {
        let path = save_stats(&stats)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}
