//! Centralized Configuration
//!
//! Tunables for the random source and the exercises. Every struct has a
//! `Default` matching the classic exercise constants and a `validate()` that
//! the CLI runs after layering file and environment overrides.

use serde::{Deserialize, Serialize};

use crate::random::seed::parse_seed;
use crate::{Result, TutorError};

// ----------------------------------------------------------------------------
// Random Source Configuration
// ----------------------------------------------------------------------------

/// Seeding configuration for [`crate::RandomSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Fixed seed (64 hex characters). `None` seeds from time and OS entropy.
    pub seed: Option<String>,
}

impl RandomConfig {
    /// Configuration that always reproduces the same sequence
    pub fn fixed(seed: [u8; 32]) -> Self {
        Self {
            seed: Some(hex::encode(seed)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref seed) = self.seed {
            parse_seed(seed)?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Guessing Game Configuration
// ----------------------------------------------------------------------------

/// Bounds and turn limit for the number-guessing game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessConfig {
    /// Smallest number the game may pick
    pub min: i32,
    /// Largest number the game may pick
    pub max: i32,
    /// Guesses allowed per round
    pub max_guesses: u32,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            max_guesses: 10,
        }
    }
}

impl GuessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(TutorError::InvalidConfig(format!(
                "guess.min ({}) must not exceed guess.max ({})",
                self.min, self.max
            )));
        }
        if self.max_guesses == 0 {
            return Err(TutorError::InvalidConfig(
                "guess.max_guesses must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tower Drop Configuration
// ----------------------------------------------------------------------------

/// Longest drop the tower exercise will report, in seconds
pub const MAX_TOWER_SECONDS: u32 = 3600;

/// Physics constants for the falling-ball exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerConfig {
    /// Gravitational acceleration in m/s²
    pub gravity: f64,
    /// Last second to report (reports run from 0 to this value inclusive)
    pub seconds: u32,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            seconds: 5,
        }
    }
}

impl TowerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(TutorError::InvalidConfig(format!(
                "tower.gravity must be a positive number, got {}",
                self.gravity
            )));
        }
        if self.seconds > MAX_TOWER_SECONDS {
            return Err(TutorError::InvalidConfig(format!(
                "tower.seconds must be at most {}, got {}",
                MAX_TOWER_SECONDS, self.seconds
            )));
        }
        Ok(())
    }
}
