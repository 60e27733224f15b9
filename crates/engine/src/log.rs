//! Structured event log: one JSON object per line.
//!
//! The terminal is busy drawing the grid, so diagnostics go to an opt-in file
//! instead (see [`LOG_PATH_ENV`]). Logging is best-effort: the first write
//! error disables the log, and the game carries on.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "GRID_WALK_LOG_PATH";

/// Something worth recording.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    Started {
        rows: u16,
        cols: u16,
        x: i32,
        y: i32,
        direction: &'static str,
        tick_ms: f64,
        player_color: &'static str,
        empty_color: &'static str,
    },
    Turned {
        direction: &'static str,
    },
    KeyIgnored,
    Moved {
        x: i32,
        y: i32,
    },
    Blocked {
        x: i32,
        y: i32,
        direction: &'static str,
    },
}

#[derive(Serialize)]
struct LogLine<'a> {
    ts_ms: u64,
    #[serde(flatten)]
    event: &'a LogEvent,
}

pub struct EventLog<W: Write> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Open the file named by [`LOG_PATH_ENV`], if it is set and non-empty.
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(LOG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::open(path.trim()).map(Some),
            _ => Ok(None),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    /// False once a write has failed.
    pub fn is_active(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, event: &LogEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let line = LogLine {
            ts_ms: unix_ms(),
            event,
        };
        if serde_json::to_writer(&mut self.buf, &line).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).and_then(|_| out.flush()).is_err() {
            self.out = None;
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
