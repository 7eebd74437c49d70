//! Torus Snake - classic snake on a wrap-around grid, in the terminal
//!
//! This library provides:
//! - Core game rules (game module): movement, collision, food, scoring
//! - Input routing (input module): keys, control-pad clicks, drag gestures
//! - TUI rendering (render module)
//! - High score persistence and session stats (score module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
