//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Time only enters through `GameEngine::step`, which the caller invokes once per tick.

pub mod action;
pub mod config;
pub mod engine;
pub mod schedule;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use schedule::TickSchedule;
pub use state::{CollisionType, GameState, Position, Snake};
