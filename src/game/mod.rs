//! Playing games: the player contract, the game loop, and batch simulation.

pub mod backgammon;
pub mod player;
pub mod simulation;

pub use backgammon::{check_submission, Backgammon, GameOutcome};
pub use player::{FirstChoicePlayer, GameView, Player, RandomPlayer};
pub use simulation::{Simulation, SimulationConfig, SimulationStats};
