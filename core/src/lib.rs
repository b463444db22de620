#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use mark::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod field;
mod generator;
mod mark;
mod types;

/// Smallest width or height a clamped configuration allows.
pub const MIN_SIDE: Coord = 5;
/// Largest width or height a clamped configuration allows.
pub const MAX_SIDE: Coord = 40;
/// Cells kept free of mines around the first click.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps the sides into `MIN_SIDE..=MAX_SIDE`, then the mine count so the
    /// first click always has room for its mine-free neighborhood.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Self {
        let size_x = size_x.clamp(MIN_SIDE, MAX_SIDE);
        let size_y = size_y.clamp(MIN_SIDE, MAX_SIDE);
        let config = Self::new_unchecked((size_x, size_y), 1);
        Self {
            mines: mines.clamp(1, config.max_mines()),
            ..config
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn max_mines(&self) -> CellCount {
        let max = self.total_cells().saturating_sub(SAFE_ZONE_CELLS);
        if max < 1 { 1 } else { max }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Level::Easy.config()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Easy,
    Normal,
    Hard,
    Custom(GameConfig),
}

impl Level {
    pub const PRESETS: [Level; 3] = [Level::Easy, Level::Normal, Level::Hard];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new_unchecked((9, 9), 10),
            Self::Normal => GameConfig::new_unchecked((16, 16), 40),
            Self::Hard => GameConfig::new_unchecked((30, 16), 99),
            Self::Custom(config) => config,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Custom(_) => "custom",
        }
    }
}
