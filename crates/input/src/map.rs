//! Key mapping from terminal events to player directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a facing.
///
/// Arrows and WASD (either case) are recognized; every other key maps to
/// `None` and must leave the current facing untouched.
pub fn direction_for_key(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        _ => None,
    }
}

/// Map a legacy DOM `keyCode` to a facing.
///
/// 38/87 up, 39/68 right, 40/83 down, 37/65 left.
///
/// Compatibility shim for hosts that hand over numeric key codes instead of
/// crossterm events. The terminal runner never calls it; it uses
/// [`direction_for_key`]. Both functions agree on the same four bindings.
pub fn direction_for_key_code(code: u32) -> Option<Direction> {
    match code {
        38 | 87 => Some(Direction::Up),
        39 | 68 => Some(Direction::Right),
        40 | 83 => Some(Direction::Down),
        37 | 65 => Some(Direction::Left),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
