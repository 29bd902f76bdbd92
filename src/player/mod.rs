pub mod ai;
pub mod controller;
pub mod difficulty;

pub use ai::{HeuristicAI, MinimaxAI, RandomAI};
pub use controller::PlayerController;
pub use difficulty::Difficulty;
