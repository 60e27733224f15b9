//! Terminal display surface.
//!
//! A small, game-oriented rendering layer: the grid is painted into a plain
//! framebuffer, which is then flushed to the terminal with crossterm.
//!
//! - [`GridView`] is pure and maps a [`core::Grid`] into a [`FrameBuffer`]
//! - [`TerminalRenderer`] owns the terminal and only sends changed cells

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use grid_walk_core as core;
pub use grid_walk_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{FrameOrigin, GridView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
