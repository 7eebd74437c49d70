//! Core game rules for snake on a toroidal grid
//!
//! Everything here is pure state manipulation with no I/O or rendering
//! dependencies; the game loop drives it and the tests exercise it directly.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{GameState, Phase, Position, Snake};
