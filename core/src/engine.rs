use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress (first reveal generates the mine field)
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Reset or reconfiguration goes back to NotStarted from anywhere.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// No player input is accepted anymore.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Everything a host can ask the engine to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Left click.
    Reveal(Coord2),
    /// Right click: unmarked, flagged, questioned, unmarked again.
    CycleMark(Coord2),
    /// One second of wall time passed.
    Tick,
    /// Start over with the same configuration.
    Reset,
    /// Start over with a new configuration.
    Configure(GameConfig),
}

/// One round of minesweeper.
///
/// The phase is never stored: it is recomputed from the marks and the mine
/// field on each read, so it cannot go stale across resets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    mine_field: Option<MineField>,
    marks: Array2<CellMark>,
    elapsed_secs: u32,
}

impl Game {
    /// The mine field is generated on the first reveal, away from the clicked cell.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            mine_field: None,
            marks: Array2::default(config.size.to_nd_index()),
            elapsed_secs: 0,
        }
    }

    /// Starts a round on a known mine field, already in progress.
    pub fn with_mine_field(mine_field: MineField, seed: u64) -> Self {
        let config = mine_field.game_config();
        Self {
            mine_field: Some(mine_field),
            ..Self::new(config, seed)
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mine_field(&self) -> Option<&MineField> {
        self.mine_field.as_ref()
    }

    pub fn marks(&self) -> &Array2<CellMark> {
        &self.marks
    }

    pub fn mark_at(&self, coords: Coord2) -> CellMark {
        self.marks[coords.to_nd_index()]
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn phase(&self) -> Phase {
        let Some(field) = &self.mine_field else {
            return Phase::NotStarted;
        };
        if is_lost(&self.marks, field) {
            Phase::Lost
        } else if is_won(&derive_board(&self.marks, field), field) {
            Phase::Won
        } else {
            Phase::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_finished()
    }

    /// What the player sees, see [`derive_board`].
    pub fn derived_board(&self) -> Array2<i8> {
        match &self.mine_field {
            Some(field) => derive_board(&self.marks, field),
            None => Array2::from_elem(self.marks.dim(), HIDDEN),
        }
    }

    /// Mines minus flags placed; negative when over-flagged.
    ///
    /// Counts the mines actually placed once the field exists, which can be
    /// fewer than configured on an overfull board.
    pub fn flags_remaining(&self) -> isize {
        let mines = self
            .mine_field
            .as_ref()
            .map_or(self.config.mines, MineField::mine_count);
        let flagged = self
            .marks
            .iter()
            .filter(|&&mark| mark == CellMark::Flagged)
            .count();
        mines as isize - flagged as isize
    }

    pub fn detonated_mine(&self) -> Option<Coord2> {
        iter_coords(self.size()).find(|&coords| self.mark_at(coords) == CellMark::DetonatedMine)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if in_bounds(coords, size) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords { coords, size })
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Reveal(coords) => self.left_click(coords).map(RevealOutcome::has_update),
            Action::CycleMark(coords) => self.right_click(coords).map(MarkOutcome::has_update),
            Action::Tick => Ok(self.tick()),
            Action::Reset => {
                self.reset();
                Ok(true)
            }
            Action::Configure(config) => {
                self.new_game(config);
                Ok(true)
            }
        }
    }

    pub fn left_click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.mark_at(coords) != CellMark::Unmarked {
            return Ok(RevealOutcome::NoChange);
        }

        let (config, seed) = (self.config, self.seed);
        let field = self.mine_field.get_or_insert_with(|| {
            RandomMineFieldGenerator::new(seed, coords, SafeZone::Neighborhood).generate(config)
        });

        let mut next = if field[coords] {
            detonate(coords, field, &self.marks)
        } else {
            flood_reveal(coords, field, &self.marks)
        };

        let outcome = if is_lost(&next, field) {
            log::debug!("Mine hit at {:?}, game lost", coords);
            RevealOutcome::HitMine
        } else if is_won(&derive_board(&next, field), field) {
            log::debug!("Last safe cell opened at {:?}, game won", coords);
            flag_mines(field, &mut next);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };

        self.marks = next;
        Ok(outcome)
    }

    pub fn right_click(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        Ok(match self.mark_at(coords).cycled() {
            Some(mark) => {
                self.marks[coords.to_nd_index()] = mark;
                MarkOutcome::Changed
            }
            None => MarkOutcome::NoChange,
        })
    }

    /// Counts one second while the round is being played, ignored otherwise.
    pub fn tick(&mut self) -> bool {
        if self.phase() == Phase::InProgress {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Drops the mine field and marks; the next round uses a fresh seed.
    pub fn reset(&mut self) {
        self.seed = SmallRng::seed_from_u64(self.seed).random();
        self.mine_field = None;
        self.marks = Array2::default(self.config.size.to_nd_index());
        self.elapsed_secs = 0;
        log::debug!(
            "Reset {}x{} game with {} mines",
            self.config.size.0,
            self.config.size.1,
            self.config.mines
        );
    }

    pub fn new_game(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Marks the hit mine and opens every other mine that is not flagged.
fn detonate(hit: Coord2, field: &MineField, marks: &Array2<CellMark>) -> Array2<CellMark> {
    let mut next = marks.clone();
    for coords in field.mine_coords() {
        let mark = &mut next[coords.to_nd_index()];
        if coords == hit {
            *mark = CellMark::DetonatedMine;
        } else if *mark != CellMark::Flagged {
            *mark = CellMark::Opened;
        }
    }
    next
}

fn flag_mines(field: &MineField, marks: &mut Array2<CellMark>) {
    for coords in field.mine_coords() {
        marks[coords.to_nd_index()] = CellMark::Flagged;
    }
}
