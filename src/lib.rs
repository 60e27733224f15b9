//! Grid walk (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `grid_walk::{types,core,input,term,engine}`; the implementation lives in
//! dedicated crates under `crates/`.

pub use grid_walk_core as core;
pub use grid_walk_engine as engine;
pub use grid_walk_input as input;
pub use grid_walk_term as term;
pub use grid_walk_types as types;
