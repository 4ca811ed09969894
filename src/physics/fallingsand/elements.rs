//! This module contains the cell states and the rules for moving them.

pub mod cell;
pub mod movement;
