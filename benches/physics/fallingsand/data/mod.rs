pub mod sand_grid;
