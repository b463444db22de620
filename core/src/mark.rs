use serde::{Deserialize, Serialize};

/// Player annotation stored per cell.
///
/// Together with the [`MineField`](crate::MineField) this is the whole game
/// state; everything visible is projected from the pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMark {
    #[default]
    Unmarked,
    Flagged,
    Questioned,
    Opened,
    /// The mine whose opening ended the game.
    DetonatedMine,
}

impl CellMark {
    /// Whether the cell has been revealed.
    pub const fn is_opened(self) -> bool {
        matches!(self, Self::Opened | Self::DetonatedMine)
    }

    /// Next state of the right-click cycle, `None` when the cell takes no marks.
    pub const fn cycled(self) -> Option<Self> {
        use CellMark::*;
        match self {
            Unmarked => Some(Flagged),
            Flagged => Some(Questioned),
            Questioned => Some(Unmarked),
            Opened | DetonatedMine => None,
        }
    }
}
