use rand::Rng;

use super::{
    config::GameConfig,
    direction::Direction,
    state::{GameState, Phase, Position, Snake},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether this tick ended the game (or the game was already over)
    pub game_over: bool,
}

/// Owns the rules: movement, collision, food placement, scoring
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh running game: three contiguous cells centered on the grid,
    /// heading right, score zero, food somewhere off the body.
    pub fn reset(&mut self) -> GameState {
        let center = self.config.grid_size / 2;
        let snake = Snake::new(
            Position::new(center, center),
            Direction::Right,
            self.config.initial_snake_length,
        );
        let food = self.spawn_food(&snake);

        GameState {
            snake,
            food,
            grid_size: self.config.grid_size,
            score: 0,
            phase: Phase::Running,
        }
    }

    /// A fresh board to show before the first game starts; nothing moves
    /// until an explicit start resets it into Running.
    pub fn idle(&mut self) -> GameState {
        let mut state = self.reset();
        state.phase = Phase::NotStarted;
        state
    }

    /// Advance the simulation by one step.
    ///
    /// `requested` is the latest direction asked for since the previous
    /// tick; reversals are ignored. A state that is not running is left
    /// untouched, so nothing mutates after game over.
    pub fn tick(&mut self, state: &mut GameState, requested: Option<Direction>) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome {
                ate_food: false,
                game_over: state.phase == Phase::GameOver,
            };
        }

        if let Some(direction) = requested {
            state.steer(direction);
        }

        let new_head = state.snake.head().stepped(state.snake.direction, state.grid_size);

        // Collision scan runs against the full body, tail included, before
        // the growth commit: chasing your own tail cell is still death.
        if state.snake.contains(new_head) {
            state.phase = Phase::GameOver;
            return TickOutcome {
                ate_food: false,
                game_over: true,
            };
        }

        state.snake.grow_to(new_head);

        let ate_food = new_head == state.food;
        if ate_food {
            state.score += self.config.food_points;
            state.food = self.spawn_food(&state.snake);
        } else {
            state.snake.drop_tail();
        }

        TickOutcome {
            ate_food,
            game_over: false,
        }
    }

    /// Rejection-sample a cell the snake does not occupy. Unbounded when
    /// the board is nearly full, which is acceptable at these grid sizes.
    fn spawn_food(&mut self, snake: &Snake) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.config.grid_size),
                self.rng.gen_range(0..self.config.grid_size),
            );

            if !snake.contains(pos) {
                return pos;
            }
        }
    }
}
