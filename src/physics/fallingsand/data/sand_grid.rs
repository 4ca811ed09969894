use bevy::log::trace;
use derive_more::{Display, From};
use itertools::iproduct;

use crate::physics::fallingsand::elements::cell::Cell;
use crate::physics::fallingsand::elements::movement::solid::solid_process;
use crate::physics::fallingsand::elements::movement::tie_break::TieBreak;
use crate::physics::fallingsand::util::grid::{Grid, GridOutOfBoundsError};
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::RcVector;

/// Everything that can go wrong when building or seeding a sand grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum SandGridError {
    /// Grids need at least one row and one column
    #[display(fmt = "grid dimensions must be positive, got {}x{}", rows, cols)]
    #[from(ignore)]
    InvalidDimensions { rows: usize, cols: usize },
    /// Tried to seed sand outside of the grid
    #[display(fmt = "{}", _0)]
    OutOfBounds(GridOutOfBoundsError),
}

impl std::error::Error for SandGridError {}

/// A sand grid is a 2D grid of cells, row 0 at the top
/// Its dimensions never change once it is made
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandGrid {
    grid: Grid<Cell>,
}

/* Initialization */
impl SandGrid {
    /// Creates a new sand grid with every cell empty
    pub fn new_empty(num_rows: usize, num_cols: usize) -> Result<Self, SandGridError> {
        if num_rows == 0 || num_cols == 0 {
            return Err(SandGridError::InvalidDimensions {
                rows: num_rows,
                cols: num_cols,
            });
        }
        Ok(Self {
            grid: Grid::new_fill(num_rows, num_cols, Cell::Empty),
        })
    }
}

/* Getters & Setters */
impl SandGrid {
    pub fn get_num_rows(&self) -> usize {
        self.grid.get_num_rows()
    }
    pub fn get_num_cols(&self) -> usize {
        self.grid.get_num_cols()
    }
    pub fn get_grid(&self) -> &Grid<Cell> {
        &self.grid
    }
    /// Anything outside of the grid reads as empty
    pub fn get(&self, pos: RcVector) -> Cell {
        self.grid.get(pos).copied().unwrap_or_default()
    }
    pub fn checked_get(&self, pos: RcVector) -> Result<Cell, GridOutOfBoundsError> {
        self.grid.checked_get(pos).copied()
    }
    /// Iterate over the cells row by row
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }
    /// The number of grains of sand in the grid
    pub fn count_filled(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_filled()).count()
    }
}

/// Seeding new sand
impl SandGrid {
    /// Returns a copy of this grid with the cell at pos filled
    /// This does not simulate anything.
    pub fn activate(&self, pos: RcVector) -> Result<SandGrid, SandGridError> {
        let mut out = self.clone();
        out.activate_mut(pos)?;
        Ok(out)
    }
    /// Fills the cell at pos in place, leaves the grid untouched on error
    pub fn activate_mut(&mut self, pos: RcVector) -> Result<(), SandGridError> {
        self.grid.set(pos, Cell::Filled)?;
        Ok(())
    }
}

/// Handle processing
impl SandGrid {
    /// Produces the next state of the grid, leaving this one alone
    pub fn step(&self, tie_break: &mut impl TieBreak) -> SandGrid {
        let mut out = self.clone();
        out.process(tie_break);
        out
    }

    /// Do one iteration of processing on the grid, in place
    /// Rows are scanned bottom to top and columns left to right. Moves made
    /// earlier in the scan are visible to the cells processed after them.
    /// Returns the number of grains that moved.
    pub fn process(&mut self, tie_break: &mut impl TieBreak) -> usize {
        let num_rows = self.get_num_rows();
        let num_cols = self.get_num_cols();
        let mut moved = 0;
        for (row, col) in iproduct!((0..num_rows).rev(), 0..num_cols) {
            if solid_process(&mut self.grid, RcVector::new(row, col), tie_break).is_some() {
                moved += 1;
            }
        }
        trace!("Processed {}x{} grid, {} moved", num_rows, num_cols, moved);
        moved
    }
}

/* Drawing */
impl SandGrid {
    /// Draw the texture as the color of each cell, one pixel per cell
    pub fn get_texture(&self) -> RawImage {
        let mut out = Vec::with_capacity(self.grid.total_size() * 4);
        for cell in self.grid.iter() {
            out.extend_from_slice(&cell.get_color());
        }
        RawImage {
            width: self.get_num_cols(),
            height: self.get_num_rows(),
            pixels: out,
        }
    }
}
