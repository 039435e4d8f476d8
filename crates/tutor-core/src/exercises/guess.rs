//! Number-guessing game
//!
//! One [`GuessRound`] per game: the target is drawn from the injected
//! [`RandomSource`] when the round starts, and the player gets a fixed number
//! of guesses. The round ends on a correct guess or when guesses run out.

use rand_core::RngCore;
use tracing::debug;

use crate::config::GuessConfig;
use crate::random::RandomSource;
use crate::Result;

pub const PLAY_AGAIN_PROMPT: &str = "Would you like to play again (y/n)? ";

/// Outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooHigh,
    TooLow,
}

impl Verdict {
    pub fn evaluate(target: i32, guess: i32) -> Self {
        match guess.cmp(&target) {
            core::cmp::Ordering::Equal => Self::Correct,
            core::cmp::Ordering::Greater => Self::TooHigh,
            core::cmp::Ordering::Less => Self::TooLow,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Correct => "Correct! You win!",
            Self::TooHigh => "Your guess is too high.",
            Self::TooLow => "Your guess is too low.",
        }
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    /// Won on the given guess number (1-based)
    Won { on_guess: u32 },
    Lost,
}

#[derive(Debug, Clone)]
pub struct GuessRound {
    target: i32,
    max_guesses: u32,
    taken: u32,
    state: RoundState,
}

impl GuessRound {
    /// Start a round, drawing the target from `[config.min, config.max]`.
    ///
    /// Fails with [`crate::TutorError::InvalidRange`] if `config.min > config.max`.
    pub fn start<R: RngCore>(
        source: &mut RandomSource<R>,
        config: &GuessConfig,
    ) -> Result<Self> {
        let target = source.try_get(config.min, config.max)?;
        debug!(min = config.min, max = config.max, "Drew target for new round");
        Ok(Self::with_target(target, config.max_guesses))
    }

    /// Round with a known target
    pub fn with_target(target: i32, max_guesses: u32) -> Self {
        Self {
            target,
            max_guesses,
            taken: 0,
            state: if max_guesses == 0 {
                RoundState::Lost
            } else {
                RoundState::InProgress
            },
        }
    }

    /// Record a guess. Returns `None` once the round is over.
    pub fn submit(&mut self, guess: i32) -> Option<Verdict> {
        if self.is_over() {
            return None;
        }

        self.taken += 1;
        let verdict = Verdict::evaluate(self.target, guess);
        if verdict == Verdict::Correct {
            self.state = RoundState::Won {
                on_guess: self.taken,
            };
        } else if self.taken >= self.max_guesses {
            self.state = RoundState::Lost;
        }
        debug!(guess, taken = self.taken, ?verdict, "Evaluated guess");
        Some(verdict)
    }

    /// 1-based number of the next guess
    pub fn next_guess_number(&self) -> u32 {
        self.taken + 1
    }

    pub fn guesses_taken(&self) -> u32 {
        self.taken
    }

    pub fn guesses_left(&self) -> u32 {
        self.max_guesses.saturating_sub(self.taken)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != RoundState::InProgress
    }

    pub fn target(&self) -> i32 {
        self.target
    }
}

pub fn intro_message(config: &GuessConfig) -> String {
    format!(
        "Let's play a game. I'm thinking of a number between {} and {}. You have {} tries to guess what it is.",
        config.min, config.max, config.max_guesses
    )
}

pub fn guess_prompt(number: u32) -> String {
    format!("Guess #{}: ", number)
}

pub fn lose_message(target: i32) -> String {
    format!("Sorry, you lose. The correct number was {}.", target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [u8; 32] = [9u8; 32];

    #[test]
    fn test_verdicts() {
        assert_eq!(Verdict::evaluate(50, 50), Verdict::Correct);
        assert_eq!(Verdict::evaluate(50, 75), Verdict::TooHigh);
        assert_eq!(Verdict::evaluate(50, 25), Verdict::TooLow);
        assert_eq!(Verdict::TooHigh.message(), "Your guess is too high.");
    }

    #[test]
    fn test_win_ends_round() {
        let mut round = GuessRound::with_target(42, 10);
        assert_eq!(round.submit(10), Some(Verdict::TooLow));
        assert_eq!(round.submit(90), Some(Verdict::TooHigh));
        assert_eq!(round.next_guess_number(), 3);
        assert_eq!(round.submit(42), Some(Verdict::Correct));
        assert_eq!(round.state(), RoundState::Won { on_guess: 3 });
        assert_eq!(round.submit(42), None);
        assert_eq!(round.guesses_taken(), 3);
    }

    #[test]
    fn test_running_out_of_guesses_loses() {
        let mut round = GuessRound::with_target(7, 3);
        for _ in 0..3 {
            assert!(!round.is_over());
            round.submit(1);
        }
        assert_eq!(round.state(), RoundState::Lost);
        assert_eq!(round.guesses_left(), 0);
        assert_eq!(round.submit(7), None);
    }

    #[test]
    fn test_correct_on_last_guess_wins() {
        let mut round = GuessRound::with_target(7, 2);
        round.submit(1);
        assert_eq!(round.submit(7), Some(Verdict::Correct));
        assert_eq!(round.state(), RoundState::Won { on_guess: 2 });
    }

    #[test]
    fn test_start_draws_target_within_bounds() {
        let config = GuessConfig {
            min: 3,
            max: 8,
            max_guesses: 4,
        };
        let mut source = RandomSource::from_seed(SEED);
        let mut mirror = RandomSource::from_seed(SEED);
        for _ in 0..100 {
            let round = GuessRound::start(&mut source, &config).unwrap();
            assert!((3..=8).contains(&round.target()));
            assert_eq!(round.target(), mirror.get(3, 8));
            assert_eq!(round.guesses_left(), 4);
        }
    }

    #[test]
    fn test_start_rejects_inverted_bounds() {
        let config = GuessConfig {
            min: 100,
            max: 1,
            max_guesses: 10,
        };
        let mut source = RandomSource::from_seed(SEED);
        assert_eq!(
            GuessRound::start(&mut source, &config).unwrap_err(),
            crate::TutorError::invalid_range(100, 1)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            intro_message(&GuessConfig::default()),
            "Let's play a game. I'm thinking of a number between 1 and 100. You have 10 tries to guess what it is."
        );
        assert_eq!(guess_prompt(4), "Guess #4: ");
        assert_eq!(lose_message(17), "Sorry, you lose. The correct number was 17.");
    }
}
