use std::{fmt::Debug, time::Duration};

use bevy::time::Time;

/// A clock for the simulation
/// Counts ticks of the step function and the simulated time they covered
#[derive(Default, Clone, Copy)]
pub struct Clock {
    time: Time,
    tick: u64,
}

impl Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("elapsed", &self.time.elapsed())
            .field("tick", &self.tick)
            .finish()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get_current_time(&self) -> Duration {
        self.time.elapsed()
    }
    pub fn get_last_delta(&self) -> Duration {
        self.time.delta()
    }
    pub fn get_current_tick(&self) -> u64 {
        self.tick
    }
    /// Record one tick that took `delta` of simulated time
    pub fn update(&mut self, delta: Duration) {
        self.time.advance_by(delta);
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update() {
        let mut clock = Clock::new();
        assert_eq!(clock.get_current_tick(), 0);
        assert_eq!(clock.get_current_time(), Duration::ZERO);
        for _ in 0..3 {
            clock.update(Duration::from_millis(10));
        }
        assert_eq!(clock.get_current_tick(), 3);
        assert_eq!(clock.get_current_time(), Duration::from_millis(30));
        assert_eq!(clock.get_last_delta(), Duration::from_millis(10));
    }
}
