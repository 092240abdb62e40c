//! # ML Mancala
//!
//! A Mancala (Kalah-style) simulator for pitting move-selection agents
//! against each other and collecting windowed win/tie/loss statistics.
//!
//! ## Modules
//!
//! - [`game`]: Board, sowing rules, players and game outcomes
//! - [`ai`]: Agent trait, random and learned agents, state encoding
//! - [`training`]: Session orchestration and statistics aggregation
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod training;
