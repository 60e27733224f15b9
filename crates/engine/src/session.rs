//! Single-threaded dispatch of ticks and key input.
//!
//! The runner owns one [`Session`] and feeds it from two sources: the
//! [`Ticker`] and the terminal's key events. Each event is handled to
//! completion before the next one, so a tick's bounds check and its step can
//! never be split by a direction change. A direction set between two ticks is
//! used by the very next tick.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::core::Settings;
use crate::game::{GameState, TickOutcome};
use crate::log::{EventLog, LogEvent};
use crate::ticker::Ticker;
use crate::types::Direction;

/// One unit of work for the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    Tick,
    /// A key press, already mapped; `None` for keys with no meaning.
    Input(Option<Direction>),
}

pub struct Session<W: Write = BufWriter<File>> {
    game: GameState,
    ticker: Ticker,
    log: Option<EventLog<W>>,
}

impl<W: Write> Session<W> {
    /// Validate `settings`, run the game (init + first render) and start the clock.
    pub fn start(settings: Settings, now: Instant, log: Option<EventLog<W>>) -> Result<Self> {
        settings.validate().context("invalid settings")?;

        let ticker = Ticker::new(settings.tick_interval()?, now);
        let mut game = GameState::new(settings);
        game.run();

        let mut session = Self { game, ticker, log };
        let s = session.game.settings();
        let started = LogEvent::Started {
            rows: s.rows_count,
            cols: s.cols_count,
            x: s.start_x,
            y: s.start_y,
            direction: s.start_direction.as_str(),
            tick_ms: s.tick_ms(),
            player_color: s.player_color.as_str(),
            empty_color: s.empty_color.as_str(),
        };
        session.record(&started);
        Ok(session)
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// How long the runner may wait for input before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.ticker.timeout(now)
    }

    /// Handle one event. Returns true when the grid changed and needs a redraw.
    pub fn dispatch(&mut self, event: LoopEvent) -> bool {
        match event {
            LoopEvent::Tick => match self.game.tick() {
                TickOutcome::Moved(p) => {
                    self.record(&LogEvent::Moved { x: p.x, y: p.y });
                    true
                }
                TickOutcome::Blocked(p) => {
                    let direction = self.game.player().direction.as_str();
                    self.record(&LogEvent::Blocked {
                        x: p.x,
                        y: p.y,
                        direction,
                    });
                    false
                }
                TickOutcome::Idle => false,
            },
            LoopEvent::Input(Some(direction)) => {
                self.game.handle_input(Some(direction));
                self.record(&LogEvent::Turned {
                    direction: direction.as_str(),
                });
                false
            }
            LoopEvent::Input(None) => {
                self.game.handle_input(None);
                self.record(&LogEvent::KeyIgnored);
                false
            }
        }
    }

    /// Dispatch a tick if one is due at `now`.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        self.ticker.poll(now) && self.dispatch(LoopEvent::Tick)
    }

    pub fn into_log(self) -> Option<EventLog<W>> {
        self.log
    }

    fn record(&mut self, event: &LogEvent) {
        if let Some(log) = self.log.as_mut() {
            log.record(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn start(settings: Settings, now: Instant) -> Session<Vec<u8>> {
        Session::start(settings, now, None).unwrap()
    }

    #[test]
    fn start_rejects_invalid_settings() {
        let bad = Settings {
            cols_count: 0,
            ..Settings::default()
        };
        assert!(Session::<Vec<u8>>::start(bad, Instant::now(), None).is_err());
    }

    #[test]
    fn start_rejects_rate_without_interval() {
        let slow = Settings {
            steps_per_second: 1e-20,
            ..Settings::default()
        };
        let err = Session::<Vec<u8>>::start(slow, Instant::now(), None)
            .err()
            .expect("rate should be rejected");
        assert!(format!("{err:#}").contains("invalid settings"));
    }

    #[test]
    fn ticker_uses_settings_interval() {
        let settings = Settings {
            steps_per_second: 4.0,
            ..Settings::default()
        };
        let session = start(settings, Instant::now());
        assert_eq!(session.ticker().interval(), Duration::from_millis(250));
    }

    #[test]
    fn poll_tick_waits_for_the_interval() {
        let t0 = Instant::now();
        let mut session = start(Settings::default(), t0);

        assert!(!session.poll_tick(t0 + Duration::from_millis(100)));
        assert_eq!(session.game().player().position(), Point::new(0, 0));

        assert!(session.poll_tick(t0 + Duration::from_millis(200)));
        assert_eq!(session.game().player().position(), Point::new(1, 0));
    }

    #[test]
    fn inputs_never_request_redraw() {
        let mut session = start(Settings::default(), Instant::now());
        assert!(!session.dispatch(LoopEvent::Input(Some(Direction::Down))));
        assert!(!session.dispatch(LoopEvent::Input(None)));
        assert_eq!(session.game().player().direction, Direction::Down);
    }
}
