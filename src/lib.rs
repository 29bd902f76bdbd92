pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod score;
pub mod selfplay;
pub mod ui;

mod logic_tests;

pub use crate::core::{Board, Mark, Move};
pub use crate::error::GameError;
pub use crate::game::{Game, MoveEvent, Phase};
pub use crate::player::{Difficulty, PlayerController};
