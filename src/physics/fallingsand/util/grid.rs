//! A simple 2d grid type
//! Backed by an ndarray in standard (row major) layout, so iteration order
//! is the same as reading the grid top to bottom, left to right.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use ndarray::Array2;

use super::vectors::RcVector;

/// A simple 2d grid type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T>(Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(num_rows: usize, num_cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(Array2::from_elem((num_rows, num_cols), value))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the number of rows in the grid
    pub fn get_num_rows(&self) -> usize {
        self.0.nrows()
    }
    /// Get the number of columns in the grid
    pub fn get_num_cols(&self) -> usize {
        self.0.ncols()
    }
    /// Get the total size of the grid
    pub fn total_size(&self) -> usize {
        self.0.len()
    }
    /// Whether or not the coordinate lands inside the grid
    pub fn contains(&self, idx: RcVector) -> bool {
        idx.row < self.get_num_rows() && idx.col < self.get_num_cols()
    }
}

/// Defines when the user has simply exceeded the bounds of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOutOfBoundsError(pub RcVector);
impl fmt::Display for GridOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} went outside the constraints of grid", self.0)
    }
}
impl std::error::Error for GridOutOfBoundsError {}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
/// Access data using RC coordinates, which are row and column respectively
impl<T> Grid<T> {
    /// Gets the value at the given coordinate, or None if it is out of bounds
    pub fn get(&self, idx: RcVector) -> Option<&T> {
        self.0.get([idx.row, idx.col])
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, idx: RcVector) -> Result<&T, GridOutOfBoundsError> {
        self.get(idx).ok_or(GridOutOfBoundsError(idx))
    }
    /// Gets the value at the given coordinate, mutably
    pub fn get_mut(&mut self, idx: RcVector) -> Result<&mut T, GridOutOfBoundsError> {
        self.0
            .get_mut([idx.row, idx.col])
            .ok_or(GridOutOfBoundsError(idx))
    }
    /// Sets the value at the given coordinate, overwriting the old value
    pub fn set(&mut self, idx: RcVector, value: T) -> Result<(), GridOutOfBoundsError> {
        self.replace(idx, value).map(|_| ())
    }
    /// Like set, but gives you ownership of the original value
    pub fn replace(&mut self, idx: RcVector, replacement: T) -> Result<T, GridOutOfBoundsError> {
        let slot = self.get_mut(idx)?;
        Ok(std::mem::replace(slot, replacement))
    }
    /// Swaps the values at the two coordinates
    pub fn swap(&mut self, a: RcVector, b: RcVector) -> Result<(), GridOutOfBoundsError> {
        for idx in [a, b] {
            if !self.contains(idx) {
                return Err(GridOutOfBoundsError(idx));
            }
        }
        self.0.swap([a.row, a.col], [b.row, b.col]);
        Ok(())
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Get an iterator over the grid, row by row
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix2> {
        self.0.iter()
    }

    /// Iterate over the grid with the coordinate of each value
    pub fn indexed_iter(&self) -> impl Iterator<Item = (RcVector, &T)> {
        self.0
            .indexed_iter()
            .map(|((row, col), value)| (RcVector::new(row, col), value))
    }
}
