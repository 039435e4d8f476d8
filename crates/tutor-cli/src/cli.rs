//! Command-line interface definitions and parsing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Read three numbers and echo them back
    Echo,
    /// Apply +, -, * or / to two numbers
    Calc,
    /// Report the height of a ball dropped from a tower
    #[command(name = "drop")]
    Tower {
        /// Tower height in meters (prompted for when omitted)
        #[arg(long)]
        height: Option<f64>,
        /// Gravitational acceleration in m/s²
        #[arg(long)]
        gravity: Option<f64>,
    },
    /// Ask for two people and say who is older
    Older,
    /// Play the number-guessing game
    Guess {
        /// Fixed seed (64 hex chars) for a reproducible game
        #[arg(short, long)]
        seed: Option<String>,
    },
    /// Draw numbers from an inclusive range
    Roll {
        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        min: i64,
        /// Upper bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        max: i64,
        /// How many numbers to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Fixed seed (64 hex chars) for a reproducible sequence
        #[arg(short, long)]
        seed: Option<String>,
    },
    /// Print the effective configuration as TOML
    Config,
}
