use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::symbols::border;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geometry::{Direction, GridSize};
use crate::snake::Snake;

/// Default playing field width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default playing field height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Default starting snake length.
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 400;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 20;

/// Smallest accepted grid edge.
pub const MIN_GRID_EDGE: u16 = 2;

/// Session settings. Every field has a default, so a config file only needs
/// the keys it wants to change.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_length: usize,
    pub initial_direction: Direction,
    pub tick_interval_ms: u64,
    /// Fixed RNG seed for reproducible food placement.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT),
            initial_length: DEFAULT_INITIAL_LENGTH,
            initial_direction: Direction::Right,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads a JSON config file, filling missing keys with defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that a game can be started from these settings.
    pub fn validate(&self) -> Result<()> {
        let GridSize { width, height } = self.grid;
        if width < MIN_GRID_EDGE || height < MIN_GRID_EDGE {
            return Err(Error::GridTooSmall {
                width,
                height,
                min: MIN_GRID_EDGE,
            });
        }

        // Length is bounded by the grid before any segment is built.
        let fits = self.initial_length > 0
            && self.initial_length < self.grid.total_cells()
            && self
                .initial_snake()
                .segments()
                .all(|segment| segment.is_within_bounds(self.grid));
        if !fits {
            return Err(Error::InitialSnakeDoesNotFit {
                length: self.initial_length,
                width,
                height,
            });
        }

        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(Error::TickIntervalTooShort {
                actual: self.tick_interval_ms,
                min: MIN_TICK_INTERVAL_MS,
            });
        }

        Ok(())
    }

    /// Straight snake centred on the grid, trailing behind its direction.
    #[must_use]
    pub fn initial_snake(&self) -> Snake {
        Snake::new(
            self.grid.center(),
            self.initial_direction,
            self.initial_length,
        )
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Terminal columns used per logical cell.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "<>";
pub const GLYPH_EMPTY: &str = " ·";
