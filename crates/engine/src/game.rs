//! Game state machine: settings, player and grid under one owner.

use crate::core::{Grid, Player, Settings};
use crate::types::{Direction, Point};

/// Lifecycle of a game. There is no stop state; a game runs until the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game has not been initialized yet.
    Idle,
    /// The player stepped onto this cell and the grid was re-rendered.
    Moved(Point),
    /// The step would have left the grid; nothing changed.
    Blocked(Point),
}

#[derive(Debug, Clone)]
pub struct GameState {
    settings: Settings,
    player: Player,
    grid: Grid,
    phase: Phase,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            player: Player::default(),
            grid: Grid::new(),
            phase: Phase::Uninitialized,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Place the player at the configured start and lay out a fresh grid.
    pub fn init(&mut self) {
        let s = &self.settings;
        self.player.init(s.start_x, s.start_y, s.start_direction);
        self.grid.build(s.rows_count, s.cols_count);
        self.phase = Phase::Running;
    }

    /// `init` followed by the first render.
    pub fn run(&mut self) {
        self.init();
        self.render();
    }

    /// Recolor every cell from the current player position.
    pub fn render(&mut self) {
        self.grid.render(
            self.player.x,
            self.player.y,
            self.settings.empty_color,
            self.settings.player_color,
        );
    }

    /// Whether the next step stays on the grid.
    pub fn can_step(&self) -> bool {
        let next = self.player.next_position();
        self.settings.in_bounds(next.x, next.y)
    }

    /// Advance one tick: step and render if the next cell is on the grid.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        let next = self.player.next_position();
        if !self.can_step() {
            return TickOutcome::Blocked(next);
        }

        self.player.step();
        self.render();
        TickOutcome::Moved(next)
    }

    /// Apply a mapped key. `None` (an unmapped key) changes nothing.
    pub fn handle_input(&mut self, direction: Option<Direction>) {
        if let Some(direction) = direction {
            self.player.set_direction(direction);
        }
    }
}
