//! Ball dropped from a tower
//!
//! The ball starts at rest at the top of the tower and falls under constant
//! gravity. Heights never go below the ground.

use super::format::display_double;
use crate::config::TowerConfig;

pub const HEIGHT_PROMPT: &str = "Enter the height of the tower in meters: ";

/// Height above ground after `seconds`, clamped at zero
pub fn height_at(start: f64, seconds: u32, gravity: f64) -> f64 {
    let t = f64::from(seconds);
    let fallen = gravity * t * t / 2.0;
    if start - fallen < 0.0 {
        0.0
    } else {
        start - fallen
    }
}

/// Line reported for one second of the fall
pub fn report_line(second: u32, height: f64) -> String {
    if height == 0.0 {
        format!("At {} seconds, the ball is on the ground.", second)
    } else {
        format!(
            "At {} seconds, the ball is at height: {} meters",
            second,
            display_double(height)
        )
    }
}

/// Per-second heights of one drop, from second 0 through `config.seconds`
#[derive(Debug, Clone)]
pub struct Trajectory {
    start: f64,
    gravity: f64,
    /// `None` once the last second has been reported
    next: Option<u32>,
    last: u32,
}

impl Trajectory {
    pub fn new(start: f64, config: &TowerConfig) -> Self {
        Self {
            start,
            gravity: config.gravity,
            next: Some(0),
            last: config.seconds,
        }
    }

    /// Report lines for the whole drop
    pub fn report(self) -> Vec<String> {
        self.map(|(second, height)| report_line(second, height))
            .collect()
    }
}

impl Iterator for Trajectory {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let second = self.next.filter(|&s| s <= self.last)?;
        self.next = if second < self.last { Some(second + 1) } else { None };
        Some((second, height_at(self.start, second, self.gravity)))
    }
}
