use strum_macros::{Display, EnumIter};

/// The only two states a cell of sand can be in
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Cell {
    /// Literally nothing
    #[default]
    Empty,
    /// A grain of sand
    Filled,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }
    /// RGBA color used when drawing the cell
    pub fn get_color(&self) -> [u8; 4] {
        match self {
            Cell::Empty => [20, 20, 24, 255],
            Cell::Filled => [235, 200, 90, 255],
        }
    }
}
