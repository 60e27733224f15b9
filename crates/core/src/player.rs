//! The player token.

use crate::types::{Direction, Point};

/// Position and facing of the single token on the grid.
///
/// The player never checks bounds itself: callers only invoke [`Player::step`]
/// after confirming that [`Player::next_position`] is inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            direction: Direction::Right,
        }
    }
}

impl Player {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Reset position and facing unconditionally.
    pub fn init(&mut self, x: i32, y: i32, direction: Direction) {
        self.x = x;
        self.y = y;
        self.direction = direction;
    }

    /// Takes effect on the next step.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Where one step in the current facing would land. Does not move the player.
    pub fn next_position(&self) -> Point {
        self.position().moved(self.direction)
    }

    /// Move one cell in the current facing.
    pub fn step(&mut self) {
        let next = self.next_position();
        self.x = next.x;
        self.y = next.y;
    }
}
