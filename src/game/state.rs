use std::collections::VecDeque;

use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One step in `direction`, wrapping around the grid edges.
    ///
    /// Leaving through one edge re-enters from the opposite one, so -1
    /// becomes `grid_size - 1` and `grid_size` becomes 0.
    pub fn stepped(self, direction: Direction, grid_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: (self.x + dx).rem_euclid(grid_size),
            y: (self.y + dy).rem_euclid(grid_size),
        }
    }
}

/// The snake: body segments head-first, plus its direction of travel
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head at the front, tail at the back
    pub body: VecDeque<Position>,
    pub direction: Direction,
}

impl Snake {
    /// A straight snake of `length` contiguous cells with its head at
    /// `head`, trailing away from the direction of travel.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.opposite().offset();
        let body = (0..length as i32)
            .map(|i| Position::new(head.x + dx * i, head.y + dy * i))
            .collect();

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any segment occupies `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Commit a new head cell
    pub fn grow_to(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Release the tail cell, keeping body length constant after a move
    pub fn drop_tail(&mut self) {
        self.body.pop_back();
    }

    /// Change direction of travel. A request for the exact reverse of the
    /// current direction is ignored, since that would drive the head
    /// straight into the first body segment.
    pub fn steer(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }
    }
}

/// Lifecycle of a game.
///
/// NotStarted and GameOver move to Running only through an explicit
/// reset; Running moves to GameOver only through self-collision. There
/// is no way back from Running to NotStarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// Complete game state, owned by the game loop
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Side length of the square grid, in cells
    pub grid_size: i32,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Request a direction change. Silently dropped while the game is not
    /// running, or when the request would reverse the snake.
    pub fn steer(&mut self, requested: Direction) {
        if self.is_running() {
            self.snake.steer(requested);
        }
    }
}
