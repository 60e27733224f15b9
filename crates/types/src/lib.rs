//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the pure game logic, the terminal view and the input mapping alike.
//!
//! # Default Settings
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLS` | 10 | Grid width in cells |
//! | `DEFAULT_ROWS` | 10 | Grid height in cells |
//! | `DEFAULT_START_X` | 0 | Starting column |
//! | `DEFAULT_START_Y` | 0 | Starting row |
//! | `DEFAULT_START_DIRECTION` | right | Initial facing |
//! | `DEFAULT_STEPS_PER_SECOND` | 5 | Tick rate (200ms per tick) |
//! | `DEFAULT_PLAYER_COLOR` | red | Color of the player cell |
//! | `DEFAULT_EMPTY_COLOR` | blue | Color of every other cell |
//!
//! # Examples
//!
//! ```
//! use grid_walk_types::{CellColor, Direction, Point};
//!
//! let dir = Direction::from_str("Down").unwrap();
//! assert_eq!(dir, Direction::Down);
//! assert_eq!(Point::new(3, 3).moved(dir), Point::new(3, 4));
//!
//! assert_eq!(CellColor::from_str("red"), Some(CellColor::Red));
//! ```

/// Default grid width in cells.
pub const DEFAULT_COLS: u16 = 10;

/// Default grid height in cells.
pub const DEFAULT_ROWS: u16 = 10;

/// Default starting column.
pub const DEFAULT_START_X: i32 = 0;

/// Default starting row.
pub const DEFAULT_START_Y: i32 = 0;

/// Default initial facing.
pub const DEFAULT_START_DIRECTION: Direction = Direction::Right;

/// Default tick rate.
pub const DEFAULT_STEPS_PER_SECOND: f64 = 5.0;

/// Default player cell color.
pub const DEFAULT_PLAYER_COLOR: CellColor = CellColor::Red;

/// Default empty cell color.
pub const DEFAULT_EMPTY_COLOR: CellColor = CellColor::Blue;


/// Facing of the player, relative to the screen:
/// - **Up**: towards row 0
/// - **Down**: towards the last row
/// - **Left**: towards column 0
/// - **Right**: towards the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_walk_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Returns the delta (dx, dy) for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A position on the grid. `x` is the column, `y` is the row, both 0-based.
///
/// Coordinates are signed so that a position one step past the top or left
/// edge is representable (and can be rejected by a bounds check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring point one step away in `direction`.
    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Named cell colors.
///
/// Each name resolves to a fixed 24-bit RGB value via [`CellColor::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    Red,
    #[default]
    Blue,
    Green,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    White,
    Black,
    Gray,
}

impl CellColor {
    /// Parse a color name (case-insensitive). Both "gray" and "grey" are accepted.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(CellColor::Red),
            "blue" => Some(CellColor::Blue),
            "green" => Some(CellColor::Green),
            "yellow" => Some(CellColor::Yellow),
            "cyan" => Some(CellColor::Cyan),
            "magenta" => Some(CellColor::Magenta),
            "orange" => Some(CellColor::Orange),
            "white" => Some(CellColor::White),
            "black" => Some(CellColor::Black),
            "gray" | "grey" => Some(CellColor::Gray),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellColor::Red => "red",
            CellColor::Blue => "blue",
            CellColor::Green => "green",
            CellColor::Yellow => "yellow",
            CellColor::Cyan => "cyan",
            CellColor::Magenta => "magenta",
            CellColor::Orange => "orange",
            CellColor::White => "white",
            CellColor::Black => "black",
            CellColor::Gray => "gray",
        }
    }

    /// `(r, g, b)` components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            CellColor::Red => (220, 50, 47),
            CellColor::Blue => (38, 90, 200),
            CellColor::Green => (100, 200, 100),
            CellColor::Yellow => (240, 220, 80),
            CellColor::Cyan => (80, 220, 220),
            CellColor::Magenta => (200, 120, 220),
            CellColor::Orange => (255, 165, 0),
            CellColor::White => (235, 235, 235),
            CellColor::Black => (0, 0, 0),
            CellColor::Gray => (128, 128, 128),
        }
    }
}
