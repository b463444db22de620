//! Pure functions over a mine field and its grid of player marks.
//!
//! None of these mutate their inputs; the engine swaps in whatever they return.

use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Derived board value of a cell the player cannot see into.
pub const HIDDEN: i8 = -1;
/// Derived board value of an opened mine.
pub const OPENED_MINE: i8 = -2;

/// Mines around `coords`, `0..=8`.
pub fn count_adjacent_mines(coords: Coord2, field: &MineField) -> u8 {
    field.adjacent_mine_count(coords)
}

/// Projects marks and mines into what the player sees: [`HIDDEN`], an
/// adjacency count for opened safe cells, or [`OPENED_MINE`].
pub fn derive_board(marks: &Array2<CellMark>, field: &MineField) -> Array2<i8> {
    debug_assert_eq!(grid_size(marks), field.size());
    Array2::from_shape_fn(marks.dim(), |(x, y)| {
        let coords = (x as Coord, y as Coord);
        match marks[[x, y]] {
            CellMark::DetonatedMine => OPENED_MINE,
            CellMark::Opened if field[coords] => OPENED_MINE,
            CellMark::Opened => count_adjacent_mines(coords, field) as i8,
            CellMark::Unmarked | CellMark::Flagged | CellMark::Questioned => HIDDEN,
        }
    })
}

/// Opens `start` and spreads through every connected zero.
///
/// Mines, flags and already opened cells stop the spread; numbered cells are
/// opened but not expanded.
pub fn flood_reveal(start: Coord2, field: &MineField, marks: &Array2<CellMark>) -> Array2<CellMark> {
    let mut opened = marks.clone();
    let mut to_visit: Vec<Coord2> = Vec::from([start]);

    while let Some(coords) = to_visit.pop() {
        if !in_bounds(coords, field.size()) {
            continue;
        }
        let mark = opened[coords.to_nd_index()];
        if mark.is_opened() || mark == CellMark::Flagged || field[coords] {
            continue;
        }

        opened[coords.to_nd_index()] = CellMark::Opened;
        let count = count_adjacent_mines(coords, field);
        log::trace!("Flood opened cell at {:?}, mine count: {}", coords, count);

        if count == 0 {
            to_visit.extend(
                field
                    .neighbors(coords)
                    .filter(|&pos| !opened[pos.to_nd_index()].is_opened()),
            );
        }
    }

    opened
}

/// Every safe cell is visible. Unflagged mines do not matter.
pub fn is_won(board: &Array2<i8>, field: &MineField) -> bool {
    iter_coords(field.size()).all(|coords| field[coords] || board[coords.to_nd_index()] >= 0)
}

/// Some mine has been opened.
pub fn is_lost(marks: &Array2<CellMark>, field: &MineField) -> bool {
    iter_coords(field.size()).any(|coords| field[coords] && marks[coords.to_nd_index()].is_opened())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(size: Coord2, mines: &[Coord2]) -> MineField {
        MineField::from_mine_coords(size, mines).unwrap()
    }

    fn blank(size: Coord2) -> Array2<CellMark> {
        Array2::default(size.to_nd_index())
    }

    #[test]
    fn flood_stops_at_numbered_cells() {
        // mine in the far corner; the zero region wraps around its numbers
        let field = field((4, 4), &[(3, 3)]);
        let marks = flood_reveal((0, 0), &field, &blank((4, 4)));

        assert_eq!(marks[[0, 0]], CellMark::Opened);
        assert_eq!(marks[[2, 2]], CellMark::Opened);
        assert_eq!(marks[[3, 2]], CellMark::Opened);
        assert_eq!(marks[[3, 3]], CellMark::Unmarked);
    }

    #[test]
    fn flood_from_numbered_cell_opens_only_it() {
        let field = field((3, 3), &[(0, 0)]);
        let marks = flood_reveal((1, 1), &field, &blank((3, 3)));

        let opened: Vec<_> = iter_coords((3, 3))
            .filter(|&c| marks[c.to_nd_index()] == CellMark::Opened)
            .collect();
        assert_eq!(opened, [(1, 1)]);
    }

    #[test]
    fn flags_block_the_flood() {
        // column x = 2 is a wall of flags
        let field = field((5, 3), &[(4, 0)]);
        let mut marks = blank((5, 3));
        for y in 0..3 {
            marks[[2, y]] = CellMark::Flagged;
        }

        let marks = flood_reveal((0, 0), &field, &marks);

        assert_eq!(marks[[1, 2]], CellMark::Opened);
        assert!((0..3).all(|y| marks[[2, y]] == CellMark::Flagged));
        assert!((0..3).all(|y| marks[[3, y]] == CellMark::Unmarked));
    }

    #[test]
    fn flood_opens_question_marks() {
        let field = field((3, 3), &[]);
        let mut marks = blank((3, 3));
        marks[[2, 2]] = CellMark::Questioned;

        let marks = flood_reveal((0, 0), &field, &marks);
        assert!(marks.iter().all(|&m| m == CellMark::Opened));
    }

    #[test]
    fn flood_leaves_input_untouched() {
        let field = field((3, 3), &[]);
        let before = blank((3, 3));
        let after = flood_reveal((1, 1), &field, &before);

        assert!(before.iter().all(|&m| m == CellMark::Unmarked));
        assert!(after.iter().all(|&m| m == CellMark::Opened));
    }

    #[test]
    fn board_projects_counts_and_mines() {
        let field = field((3, 1), &[(0, 0), (2, 0)]);
        let mut marks = blank((3, 1));
        marks[[0, 0]] = CellMark::DetonatedMine;
        marks[[1, 0]] = CellMark::Opened;
        marks[[2, 0]] = CellMark::Flagged;

        let board = derive_board(&marks, &field);
        assert_eq!(board.as_slice().unwrap(), &[OPENED_MINE, 2, HIDDEN]);
    }

    #[test]
    fn won_ignores_flags_on_mines() {
        let field = field((2, 1), &[(0, 0)]);
        let mut marks = blank((2, 1));
        assert!(!is_won(&derive_board(&marks, &field), &field));

        marks[[1, 0]] = CellMark::Opened;
        assert!(is_won(&derive_board(&marks, &field), &field));
    }

    #[test]
    fn lost_when_any_mine_is_open() {
        let field = field((2, 2), &[(1, 1)]);
        let mut marks = blank((2, 2));
        marks[[0, 0]] = CellMark::Opened;
        marks[[1, 1]] = CellMark::Flagged;
        assert!(!is_lost(&marks, &field));

        marks[[1, 1]] = CellMark::Opened;
        assert!(is_lost(&marks, &field));
        marks[[1, 1]] = CellMark::DetonatedMine;
        assert!(is_lost(&marks, &field));
    }
}
