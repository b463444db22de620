use crate::*;
pub use random::*;

mod random;

pub trait MineFieldGenerator {
    fn generate(self, config: GameConfig) -> MineField;
}

/// Cells around the first click that are guaranteed to hold no mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SafeZone {
    /// Mines may land anywhere, including under the first click.
    Anywhere,
    /// Only the clicked cell is kept free.
    Cell,
    /// The clicked cell and its neighbors are kept free, so the first click
    /// always opens a zero.
    #[default]
    Neighborhood,
}
