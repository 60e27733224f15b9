//! Terminal input module (engine-facing).
//!
//! This crate is independent of the game loop. It maps `crossterm` key events
//! into [`crate::types::Direction`] values, and decides which keys end the
//! process. Everything else is ignored.
//!
//! [`direction_for_key_code`] is a compatibility shim for embedders that
//! deliver legacy numeric key codes. The bundled terminal runner does not use it.

pub mod map;

pub use grid_walk_types as types;

pub use map::{direction_for_key, direction_for_key_code, should_quit};
