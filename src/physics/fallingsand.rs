//! Falling sand physics engine.
//! A single binary material on a rectangular grid, and the rules that
//! make it fall.

pub mod data;
pub mod elements;
pub mod util;
