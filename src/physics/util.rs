//! Utilities shared by the physics engine.

pub mod clock;
