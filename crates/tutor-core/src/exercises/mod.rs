//! Console exercises
//!
//! Pure logic and output wording for each exercise. Reading input and
//! writing the transcript is the CLI's job; everything here takes values and
//! returns values or the exact line to print.

pub mod ages;
pub mod calculator;
pub mod echo;
pub mod format;
pub mod guess;
pub mod tower;

pub use ages::Person;
pub use calculator::Operator;
pub use format::display_double;
pub use guess::{GuessRound, RoundState, Verdict};
pub use tower::Trajectory;
