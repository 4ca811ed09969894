use crate::physics::fallingsand::{
    elements::cell::Cell,
    util::{grid::Grid, vectors::RcVector},
};

use super::tie_break::{Side, TieBreak};

/// The diagonal cells below a grain which it is allowed to slide into
/// Each is Some only if it exists and is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagonals {
    /// Below and one column to the left
    pub left: Option<RcVector>,
    /// Below and one column to the right
    pub right: Option<RcVector>,
}

/// True if the cell exists and nothing is in it.
/// Out of bounds counts as occupied.
fn is_open(grid: &Grid<Cell>, idx: RcVector) -> bool {
    matches!(grid.get(idx), Some(Cell::Empty))
}

/// Works out which diagonals below pos are open.
/// Does not care whether the cell straight down is blocked.
pub fn get_diagonals(grid: &Grid<Cell>, pos: RcVector) -> Diagonals {
    Diagonals {
        left: pos.below_left().filter(|idx| is_open(grid, *idx)),
        right: Some(pos.below_right()).filter(|idx| is_open(grid, *idx)),
    }
}

/// Where the grain at pos wants to go this step, if anywhere
pub fn get_destination(
    grid: &Grid<Cell>,
    pos: RcVector,
    tie_break: &mut impl TieBreak,
) -> Option<RcVector> {
    let below = pos.below();
    if is_open(grid, below) {
        return Some(below);
    }
    match get_diagonals(grid, pos) {
        Diagonals {
            left: Some(left),
            right: Some(right),
        } => match tie_break.choose() {
            Side::Left => Some(left),
            Side::Right => Some(right),
        },
        Diagonals {
            left: Some(left),
            right: None,
        } => Some(left),
        Diagonals {
            left: None,
            right: Some(right),
        } => Some(right),
        Diagonals {
            left: None,
            right: None,
        } => None,
    }
}

/// Default solid element behavior
/// Moves the grain at pos down, or diagonally down, by one cell.
/// Returns where it ended up, or None if it is settled or pos is not sand.
pub fn solid_process(
    grid: &mut Grid<Cell>,
    pos: RcVector,
    tie_break: &mut impl TieBreak,
) -> Option<RcVector> {
    if !matches!(grid.get(pos), Some(Cell::Filled)) {
        return None;
    }
    let dest = get_destination(grid, pos, tie_break)?;
    // dest is known to be empty, so a swap is a move
    grid.swap(pos, dest).ok().map(|_| dest)
}

#[cfg(test)]
mod tests {
    use super::super::tie_break::FixedTieBreak;
    use super::*;

    /// Panics if the side is ever asked for
    struct NeverAsked;
    impl TieBreak for NeverAsked {
        fn choose(&mut self) -> Side {
            panic!("tie break should not have been consulted")
        }
    }

    fn grid_with(num_rows: usize, num_cols: usize, filled: &[(usize, usize)]) -> Grid<Cell> {
        let mut grid = Grid::new_fill(num_rows, num_cols, Cell::Empty);
        for &(row, col) in filled {
            grid.set(RcVector::new(row, col), Cell::Filled).unwrap();
        }
        grid
    }

    #[test]
    fn test_straight_down_takes_priority() {
        let mut grid = grid_with(2, 3, &[(0, 1)]);
        let dest = solid_process(&mut grid, RcVector::new(0, 1), &mut NeverAsked);
        assert_eq!(dest, Some(RcVector::new(1, 1)));
        assert_eq!(grid.get(RcVector::new(0, 1)), Some(&Cell::Empty));
        assert_eq!(grid.get(RcVector::new(1, 1)), Some(&Cell::Filled));
    }

    #[test]
    fn test_both_diagonals_use_tie_break() {
        for side in [Side::Left, Side::Right] {
            let mut grid = grid_with(2, 3, &[(0, 1), (1, 1)]);
            let dest = solid_process(&mut grid, RcVector::new(0, 1), &mut FixedTieBreak(side));
            let expected = match side {
                Side::Left => RcVector::new(1, 0),
                Side::Right => RcVector::new(1, 2),
            };
            assert_eq!(dest, Some(expected));
        }
    }

    #[test]
    fn test_only_left_open() {
        let mut grid = grid_with(2, 3, &[(0, 1), (1, 1), (1, 2)]);
        let dest = solid_process(&mut grid, RcVector::new(0, 1), &mut NeverAsked);
        assert_eq!(dest, Some(RcVector::new(1, 0)));
    }

    #[test]
    fn test_only_right_open() {
        let mut grid = grid_with(2, 3, &[(0, 1), (1, 1), (1, 0)]);
        let dest = solid_process(&mut grid, RcVector::new(0, 1), &mut NeverAsked);
        assert_eq!(dest, Some(RcVector::new(1, 2)));
    }

    #[test]
    fn test_edges_count_as_blocked() {
        // Left edge, only the right diagonal exists
        let mut grid = grid_with(2, 2, &[(0, 0), (1, 0)]);
        assert_eq!(
            get_diagonals(&grid, RcVector::new(0, 0)),
            Diagonals {
                left: None,
                right: Some(RcVector::new(1, 1))
            }
        );
        // Single column, nowhere to go
        let mut column = grid_with(2, 1, &[(0, 0), (1, 0)]);
        assert_eq!(
            solid_process(&mut column, RcVector::new(0, 0), &mut NeverAsked),
            None
        );
        // Right edge, slides left
        grid.set(RcVector::new(0, 0), Cell::Empty).unwrap();
        grid.set(RcVector::new(0, 1), Cell::Filled).unwrap();
        grid.set(RcVector::new(1, 1), Cell::Filled).unwrap();
        grid.set(RcVector::new(1, 0), Cell::Empty).unwrap();
        assert_eq!(
            solid_process(&mut grid, RcVector::new(0, 1), &mut NeverAsked),
            Some(RcVector::new(1, 0))
        );
    }

    #[test]
    fn test_bottom_row_never_moves() {
        let mut grid = grid_with(2, 3, &[(1, 1)]);
        assert_eq!(
            solid_process(&mut grid, RcVector::new(1, 1), &mut NeverAsked),
            None
        );
        assert_eq!(grid.get(RcVector::new(1, 1)), Some(&Cell::Filled));
    }

    #[test]
    fn test_empty_cell_does_nothing() {
        let mut grid = grid_with(2, 3, &[]);
        assert_eq!(
            solid_process(&mut grid, RcVector::new(0, 1), &mut NeverAsked),
            None
        );
    }
}
