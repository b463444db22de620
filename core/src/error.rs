use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {coords:?} are outside of a {size:?} board")]
    InvalidCoords { coords: Coord2, size: Coord2 },
    #[error("Too many mines: {requested} requested but the board only fits {available}")]
    TooManyMines {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
