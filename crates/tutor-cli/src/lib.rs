//! Tutor CLI library
//!
//! Console plumbing and interactive drivers for the tutor exercises:
//! argument parsing, layered configuration, a token reader over any
//! `BufRead`, and one driver per exercise.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;

pub use cli::{Cli, Commands};
pub use commands::CommandDispatcher;
pub use config::AppConfig;
pub use console::Console;
pub use error::{CliError, Result};

// Re-export commonly used types
pub use tutor_core::{GuessConfig, RandomConfig, RandomSource, TowerConfig};
