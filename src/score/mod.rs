//! Score keeping: the persisted high score and per-session stats

pub mod session;
pub mod store;

pub use session::SessionStats;
pub use store::HighScoreStore;
