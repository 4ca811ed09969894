pub mod entities;
pub mod gui;
pub mod physics;
