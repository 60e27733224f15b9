//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the grid walk and nothing else. It has no
//! dependencies on the terminal, the clock or any I/O, which keeps it:
//!
//! - **Deterministic**: the same settings and the same steps give the same grid
//! - **Testable**: every rule is checked by plain unit tests
//! - **Portable**: the terminal runner is just one possible host
//!
//! # Module Structure
//!
//! - [`settings`]: immutable game configuration, defaults, startup overrides, validation
//! - [`player`]: the player token (position + facing) and its single-step movement
//! - [`grid`]: the addressable, row-major matrix of colorable cells
//!
//! # Example
//!
//! ```
//! use grid_walk_core::{Grid, Player, Settings};
//! use grid_walk_types::{CellColor, Point};
//!
//! let settings = Settings::default();
//! let mut player = Player::new(settings.start_x, settings.start_y, settings.start_direction);
//! player.step();
//! assert_eq!(player.position(), Point::new(1, 0));
//!
//! let mut grid = Grid::new();
//! grid.build(settings.rows_count, settings.cols_count);
//! grid.render(player.x, player.y, settings.empty_color, settings.player_color);
//! assert_eq!(grid.cell(1, 0), Some(CellColor::Red));
//! assert_eq!(grid.cell(0, 0), Some(CellColor::Blue));
//! ```

pub mod grid;
pub mod player;
pub mod settings;

pub use grid_walk_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use player::Player;
pub use settings::Settings;
