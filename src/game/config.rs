use serde::{Deserialize, Serialize};

/// Tunables for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: i32,
    /// Starting length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_points: u32,
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
    /// Minimum drag distance, in grid rows, before a gesture steers
    pub swipe_threshold: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            food_points: 10,
            tick_ms: 150,
            swipe_threshold: 2,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom grid side length
    pub fn with_grid_size(grid_size: i32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::with_grid_size(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_points, 10);
    }

    #[test]
    fn test_custom_grid_size() {
        let config = GameConfig::with_grid_size(32);
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.initial_snake_length, 3);
    }
}
