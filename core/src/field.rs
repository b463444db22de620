use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the mines are. Created once per round and never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineField {
    mines: Array2<bool>,
    count: CellCount,
}

impl MineField {
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let count = mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .expect("mine count fits a cell count");
        Self { mines, count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords { coords, size });
            }
            mines[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.count)
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mines)
    }

    pub fn total_cells(&self) -> CellCount {
        let (x, y) = self.size();
        mult(x, y)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(|&coords| self[coords])
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        self.mines.neighbors(coords)
    }

    /// Mines among the eight cells around `coords`.
    ///
    /// Panics when `coords` is off the board; every caller derives its
    /// coordinates from this field's size.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        assert!(
            in_bounds(coords, self.size()),
            "adjacent mine count at {coords:?} is off the board"
        );
        let mut count = 0;
        for pos in self.neighbors(coords) {
            if self[pos] {
                count += 1;
            }
        }
        count
    }
}

impl Index<Coord2> for MineField {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mines[coords.to_nd_index()]
    }
}
