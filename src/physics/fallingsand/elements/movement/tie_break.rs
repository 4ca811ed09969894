//! Deciding which way a grain of sand slides when both diagonals are open.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use rand::Rng;
use strum_macros::Display;

/// The side a grain slides towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

/// A source of random left/right decisions
/// Injected into the simulation so that tests can make it deterministic
pub trait TieBreak {
    /// Pick a side, each should be equally likely
    fn choose(&mut self) -> Side;
}

/// The default tie break, backed by any rand generator
#[derive(Debug, Clone)]
pub struct RngTieBreak<R: Rng>(pub R);

impl<R: Rng> TieBreak for RngTieBreak<R> {
    fn choose(&mut self) -> Side {
        if self.0.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Always picks the same side
#[derive(Debug, Clone, Copy)]
pub struct FixedTieBreak(pub Side);

impl TieBreak for FixedTieBreak {
    fn choose(&mut self) -> Side {
        self.0
    }
}
