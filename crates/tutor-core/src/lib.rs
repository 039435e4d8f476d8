//! Tutor Core
//!
//! Range-bounded random draws backed by an explicitly owned, entropy-seeded
//! generator, plus the pure logic of the console exercises (calculator,
//! tower drop, age comparison and the number-guessing game). Nothing in this
//! crate touches stdin or stdout; the CLI crate drives the exercises.

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

pub mod config;
pub mod errors;
pub mod exercises;
pub mod random;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use config::{GuessConfig, RandomConfig, TowerConfig};
pub use errors::{Result, TutorError};
pub use random::RandomSource;
