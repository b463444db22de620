use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform rejection sampling: draws random cells until enough distinct ones
/// outside the safe zone hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineFieldGenerator {
    seed: u64,
    start: Coord2,
    safe_zone: SafeZone,
}

impl RandomMineFieldGenerator {
    pub fn new(seed: u64, start: Coord2, safe_zone: SafeZone) -> Self {
        Self {
            seed,
            start,
            safe_zone,
        }
    }

    fn zone_cells(&self, zone: SafeZone, size: Coord2) -> impl Iterator<Item = Coord2> {
        let center = match zone {
            SafeZone::Anywhere => None,
            SafeZone::Cell | SafeZone::Neighborhood => Some(self.start),
        };
        let neighbors = match zone {
            SafeZone::Neighborhood => Some(Neighbors::new(self.start, size)),
            SafeZone::Anywhere | SafeZone::Cell => None,
        };
        center.into_iter().chain(neighbors.into_iter().flatten())
    }

    /// Narrows a neighborhood zone to the clicked cell when the requested
    /// mines do not fit beside it. The clicked cell itself always stays clear.
    fn fitting_zone(&self, config: GameConfig) -> SafeZone {
        use SafeZone::*;

        let reserved = self.zone_cells(Neighborhood, config.size).count() as CellCount;
        match self.safe_zone {
            Neighborhood if config.mines <= config.total_cells() - reserved => Neighborhood,
            Neighborhood => {
                log::warn!("Cannot keep first click neighborhood clear, fallback to cell");
                Cell
            }
            zone => zone,
        }
    }
}

impl MineFieldGenerator for RandomMineFieldGenerator {
    fn generate(self, config: GameConfig) -> MineField {
        let size = config.size;
        assert!(
            in_bounds(self.start, size),
            "first click {:?} is off a {:?} board",
            self.start,
            size
        );

        let zone = self.fitting_zone(config);
        let mut blocked: Array2<bool> = Array2::default(size.to_nd_index());
        for coords in self.zone_cells(zone, size) {
            blocked[coords.to_nd_index()] = true;
        }

        let reserved = blocked.iter().filter(|&&cell| cell).count() as CellCount;
        let available = config.total_cells() - reserved;
        let target = if config.mines > available {
            log::warn!(
                "Minefield cannot fit {} mines, placing {} instead",
                config.mines,
                available
            );
            available
        } else {
            config.mines
        };

        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        let mut draws: u32 = 0;
        while placed < target {
            draws += 1;
            let coords = (rng.random_range(0..size.0), rng.random_range(0..size.1));
            let index = coords.to_nd_index();
            if blocked[index] || mines[index] {
                continue;
            }
            mines[index] = true;
            placed += 1;
        }

        log::debug!(
            "Generated {}x{} minefield with {} mines in {} draws (seed {}, start {:?}, zone {:?})",
            size.0,
            size.1,
            placed,
            draws,
            self.seed,
            self.start,
            zone
        );
        MineField::from_mine_mask(mines)
    }
}
