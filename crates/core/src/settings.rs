//! Game settings: fixed for the lifetime of a run.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::types::{
    CellColor, Direction, DEFAULT_COLS, DEFAULT_EMPTY_COLOR, DEFAULT_PLAYER_COLOR, DEFAULT_ROWS,
    DEFAULT_START_DIRECTION, DEFAULT_START_X, DEFAULT_START_Y, DEFAULT_STEPS_PER_SECOND,
};

/// Game configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rows_count: u16,
    pub cols_count: u16,
    pub start_x: i32,
    pub start_y: i32,
    pub start_direction: Direction,
    pub steps_per_second: f64,
    pub player_color: CellColor,
    pub empty_color: CellColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows_count: DEFAULT_ROWS,
            cols_count: DEFAULT_COLS,
            start_x: DEFAULT_START_X,
            start_y: DEFAULT_START_Y,
            start_direction: DEFAULT_START_DIRECTION,
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            player_color: DEFAULT_PLAYER_COLOR,
            empty_color: DEFAULT_EMPTY_COLOR,
        }
    }
}

impl Settings {
    /// Create from environment variables.
    ///
    /// - `GRID_WALK_ROWS`, `GRID_WALK_COLS`: grid size
    /// - `GRID_WALK_START_X`, `GRID_WALK_START_Y`: starting cell
    /// - `GRID_WALK_START_DIRECTION`: up / down / left / right
    /// - `GRID_WALK_STEPS_PER_SECOND`: tick rate
    /// - `GRID_WALK_PLAYER_COLOR`, `GRID_WALK_EMPTY_COLOR`: color names
    ///
    /// Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();

        Self {
            rows_count: parse_var(&lookup, "GRID_WALK_ROWS").unwrap_or(d.rows_count),
            cols_count: parse_var(&lookup, "GRID_WALK_COLS").unwrap_or(d.cols_count),
            start_x: parse_var(&lookup, "GRID_WALK_START_X").unwrap_or(d.start_x),
            start_y: parse_var(&lookup, "GRID_WALK_START_Y").unwrap_or(d.start_y),
            start_direction: lookup("GRID_WALK_START_DIRECTION")
                .and_then(|s| Direction::from_str(&s))
                .unwrap_or(d.start_direction),
            steps_per_second: parse_var(&lookup, "GRID_WALK_STEPS_PER_SECOND")
                .unwrap_or(d.steps_per_second),
            player_color: lookup("GRID_WALK_PLAYER_COLOR")
                .and_then(|s| CellColor::from_str(&s))
                .unwrap_or(d.player_color),
            empty_color: lookup("GRID_WALK_EMPTY_COLOR")
                .and_then(|s| CellColor::from_str(&s))
                .unwrap_or(d.empty_color),
        }
    }

    /// Check the startup preconditions the game loop relies on.
    pub fn validate(&self) -> Result<()> {
        if self.rows_count == 0 || self.cols_count == 0 {
            bail!(
                "grid must have at least one cell (rows={}, cols={})",
                self.rows_count,
                self.cols_count
            );
        }
        if !self.in_bounds(self.start_x, self.start_y) {
            bail!(
                "start position ({}, {}) is outside the {}x{} grid",
                self.start_x,
                self.start_y,
                self.cols_count,
                self.rows_count
            );
        }
        if !self.steps_per_second.is_finite() || self.steps_per_second <= 0.0 {
            bail!(
                "steps per second must be a positive number, got {}",
                self.steps_per_second
            );
        }
        self.tick_interval()?;
        Ok(())
    }

    /// Interval between ticks.
    ///
    /// Fails when `1 / steps_per_second` is not a non-zero [`Duration`].
    pub fn tick_interval(&self) -> Result<Duration> {
        match Duration::try_from_secs_f64(1.0 / self.steps_per_second) {
            Ok(interval) if !interval.is_zero() => Ok(interval),
            _ => bail!(
                "steps per second {} gives no usable tick interval",
                self.steps_per_second
            ),
        }
    }

    /// Whether `(x, y)` lies in `[0, cols) x [0, rows)`.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols_count as i32 && y >= 0 && y < self.rows_count as i32
    }

    /// Interval between ticks in milliseconds (`1000 / steps_per_second`).
    pub fn tick_ms(&self) -> f64 {
        1000.0 / self.steps_per_second
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_settings_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.tick_ms(), 200.0);
    }

    #[test]
    fn lookup_overrides_apply() {
        let s = Settings::from_lookup(lookup_from(&[
            ("GRID_WALK_ROWS", "4"),
            ("GRID_WALK_COLS", " 6 "),
            ("GRID_WALK_START_X", "5"),
            ("GRID_WALK_START_Y", "3"),
            ("GRID_WALK_START_DIRECTION", "Up"),
            ("GRID_WALK_STEPS_PER_SECOND", "2.5"),
            ("GRID_WALK_PLAYER_COLOR", "green"),
            ("GRID_WALK_EMPTY_COLOR", "black"),
        ]));
        assert_eq!(s.rows_count, 4);
        assert_eq!(s.cols_count, 6);
        assert_eq!((s.start_x, s.start_y), (5, 3));
        assert_eq!(s.start_direction, Direction::Up);
        assert_eq!(s.steps_per_second, 2.5);
        assert_eq!(s.player_color, CellColor::Green);
        assert_eq!(s.empty_color, CellColor::Black);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn unparseable_values_keep_defaults() {
        let s = Settings::from_lookup(lookup_from(&[
            ("GRID_WALK_ROWS", "many"),
            ("GRID_WALK_START_DIRECTION", "diagonal"),
            ("GRID_WALK_PLAYER_COLOR", "plaid"),
        ]));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn validate_rejects_bad_settings() {
        let empty = Settings {
            rows_count: 0,
            ..Settings::default()
        };
        assert!(empty.validate().is_err());

        let outside = Settings {
            start_x: 10,
            ..Settings::default()
        };
        assert!(outside.validate().is_err());

        let negative = Settings {
            start_y: -1,
            ..Settings::default()
        };
        assert!(negative.validate().is_err());

        let frozen = Settings {
            steps_per_second: 0.0,
            ..Settings::default()
        };
        assert!(frozen.validate().is_err());

        let nan = Settings {
            steps_per_second: f64::NAN,
            ..Settings::default()
        };
        assert!(nan.validate().is_err());

        let glacial = Settings {
            steps_per_second: 1e-20,
            ..Settings::default()
        };
        assert!(glacial.validate().is_err());

        let frantic = Settings {
            steps_per_second: 1e300,
            ..Settings::default()
        };
        assert!(frantic.validate().is_err());
    }

    #[test]
    fn tick_interval_follows_rate() {
        let s = Settings::default();
        assert_eq!(s.tick_interval().unwrap(), Duration::from_millis(200));

        let half = Settings {
            steps_per_second: 0.5,
            ..Settings::default()
        };
        assert_eq!(half.tick_interval().unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn bounds_are_half_open() {
        let s = Settings::default();
        assert!(s.in_bounds(0, 0));
        assert!(s.in_bounds(9, 9));
        assert!(!s.in_bounds(10, 0));
        assert!(!s.in_bounds(0, 10));
        assert!(!s.in_bounds(-1, 5));
    }
}
