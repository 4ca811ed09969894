use std::fmt;

/// My personal coordinate type
/// row is the vertical axis, 0 is the top of the grid and it grows downward
/// col is the horizontal axis, 0 is the left of the grid and it grows rightward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RcVector {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for RcVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row: {}, col: {})", self.row, self.col)
    }
}

impl RcVector {
    pub const ZERO: Self = Self { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Neighbors in the direction of gravity
/// These only guard against going negative, the grid is responsible
/// for checking the upper bounds
impl RcVector {
    /// The cell directly beneath this one
    pub fn below(&self) -> RcVector {
        RcVector::new(self.row + 1, self.col)
    }
    /// The cell beneath and to the left, None on the left edge
    pub fn below_left(&self) -> Option<RcVector> {
        self.col
            .checked_sub(1)
            .map(|col| RcVector::new(self.row + 1, col))
    }
    /// The cell beneath and to the right
    pub fn below_right(&self) -> RcVector {
        RcVector::new(self.row + 1, self.col + 1)
    }
}
