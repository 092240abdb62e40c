//! Core Mancala game logic: board state and sowing, player tags, and game
//! outcomes.

pub mod board;
mod outcome;
mod player;

pub use board::{Board, FORFEIT_SCORE, INITIAL_PEBBLES_PER_PIT, PITS, PITS_PER_PLAYER};
pub use outcome::GameOutcome;
pub use player::Player;
