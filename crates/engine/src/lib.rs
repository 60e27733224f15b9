//! Game loop: the state machine, its clock, and the dispatch loop that feeds it.
//!
//! - [`game`]: `GameState` (`Uninitialized -> Running`), tick gating and input
//! - [`ticker`]: fixed-interval clock driven by caller-supplied instants
//! - [`session`]: one-event-at-a-time dispatch of ticks and key input
//! - [`log`]: opt-in JSON-lines event log
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use grid_walk_core::Settings;
//! use grid_walk_engine::{LoopEvent, Session};
//! use grid_walk_types::{Direction, Point};
//!
//! let t0 = Instant::now();
//! let mut session = Session::<Vec<u8>>::start(Settings::default(), t0, None).unwrap();
//!
//! assert!(session.poll_tick(t0 + Duration::from_millis(200)));
//! session.dispatch(LoopEvent::Input(Some(Direction::Down)));
//! session.dispatch(LoopEvent::Tick);
//! assert_eq!(session.game().player().position(), Point::new(1, 1));
//! ```

pub mod game;
pub mod log;
pub mod session;
pub mod ticker;

pub use grid_walk_core as core;
pub use grid_walk_types as types;

pub use game::{GameState, Phase, TickOutcome};
pub use log::{EventLog, LogEvent, LOG_PATH_ENV};
pub use session::{LoopEvent, Session};
pub use ticker::Ticker;
