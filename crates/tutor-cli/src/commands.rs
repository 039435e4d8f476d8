//! Command execution
//!
//! One driver per exercise. Drivers are generic over the console's reader
//! and writer so tests can run them against in-memory transcripts.

use std::io::{self, BufRead, Write};

use rand_core::RngCore;
use tracing::{debug, info};

use tutor_core::exercises::{
    ages::{self, Person},
    calculator::{self, Operator},
    echo,
    guess::{self, GuessRound, RoundState},
    tower::{self, Trajectory},
};
use tutor_core::{GuessConfig, RandomConfig, RandomSource, TowerConfig};

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::console::Console;
use crate::error::{CliError, Result};

/// Dispatches parsed commands to their drivers
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Run a command against stdin/stdout
    pub fn execute(command: Commands, config: &AppConfig) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut console = Console::new(stdin.lock(), stdout.lock());
        Self::execute_with(command, config, &mut console)
    }

    /// Run a command against any console
    pub fn execute_with<R: BufRead, W: Write>(
        command: Commands,
        config: &AppConfig,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        debug!(?command, "Executing command");
        match command {
            Commands::Echo => run_echo(console),
            Commands::Calc => run_calculator(console),
            Commands::Tower { height, gravity } => {
                let mut tower_config = config.tower.clone();
                if let Some(g) = gravity {
                    tower_config.gravity = g;
                    tower_config.validate()?;
                }
                run_tower(console, height, &tower_config)
            }
            Commands::Older => run_older(console),
            Commands::Guess { seed } => {
                let mut source = seeded_source(&config.random, seed)?;
                let summary = run_guess(console, &mut source, &config.guess)?;
                info!(
                    rounds = summary.rounds_played,
                    won = summary.rounds_won,
                    "Guessing session finished"
                );
                Ok(())
            }
            Commands::Roll {
                min,
                max,
                count,
                seed,
            } => {
                let mut source = seeded_source(&config.random, seed)?;
                run_roll(console, &mut source, min, max, count)
            }
            Commands::Config => console.say(config.to_toml()?.trim_end()),
        }
    }
}

/// Source seeded from the command line seed, the configured seed, or entropy
fn seeded_source(random: &RandomConfig, seed: Option<String>) -> Result<RandomSource> {
    let random = match seed {
        Some(seed) => RandomConfig { seed: Some(seed) },
        None => random.clone(),
    };
    Ok(RandomSource::from_config(&random)?)
}

// ----------------------------------------------------------------------------
// Exercise Drivers
// ----------------------------------------------------------------------------

pub fn run_echo<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.prompt(echo::PROMPT)?;
    let mut values = [0i64; 3];
    for value in values.iter_mut() {
        *value = console.read("an integer")?;
    }
    console.say(&echo::entered_message(values))
}

/// Unknown operators print nothing
pub fn run_calculator<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.prompt(calculator::VALUE_PROMPT)?;
    let x: f64 = console.read("a double value")?;
    console.prompt(calculator::VALUE_PROMPT)?;
    let y: f64 = console.read("a double value")?;
    console.prompt(calculator::OPERATOR_PROMPT)?;
    let symbol = console.read_char()?;

    match Operator::parse(symbol) {
        Some(op) => console.say(&op.describe(x, y)),
        None => {
            debug!(%symbol, "Ignoring unknown operator");
            Ok(())
        }
    }
}

pub fn run_tower<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    height: Option<f64>,
    config: &TowerConfig,
) -> Result<()> {
    let start = match height {
        Some(h) => h,
        None => {
            console.prompt(tower::HEIGHT_PROMPT)?;
            console.read("a height in meters")?
        }
    };

    for line in Trajectory::new(start, config).report() {
        console.say(&line)?;
    }
    Ok(())
}

pub fn run_older<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let first = read_person(console, 1)?;
    let second = read_person(console, 2)?;
    console.say(&ages::older_message(&first, &second))
}

fn read_person<R: BufRead, W: Write>(console: &mut Console<R, W>, index: u32) -> Result<Person> {
    console.prompt(&ages::name_prompt(index))?;
    let name = console.read_line()?;
    console.prompt(&ages::age_prompt(&name))?;
    let age = console.read("an age")?;
    Ok(Person::new(name, age))
}

/// Tally of one guessing session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub rounds_won: u32,
}

/// Play rounds until the player declines another or input runs out
pub fn run_guess<R: BufRead, W: Write, G: RngCore>(
    console: &mut Console<R, W>,
    source: &mut RandomSource<G>,
    config: &GuessConfig,
) -> Result<GameSummary> {
    let mut summary = GameSummary::default();

    loop {
        let mut round = GuessRound::start(source, config)?;
        console.say(&guess::intro_message(config))?;
        summary.rounds_played += 1;

        while !round.is_over() {
            console.prompt(&guess::guess_prompt(round.next_guess_number()))?;
            let value: i32 = match console.read("a whole number") {
                Ok(value) => value,
                Err(CliError::EndOfInput) => return Ok(summary),
                Err(e) => return Err(e),
            };
            if let Some(verdict) = round.submit(value) {
                console.say(verdict.message())?;
            }
        }

        match round.state() {
            RoundState::Won { .. } => summary.rounds_won += 1,
            RoundState::Lost => console.say(&guess::lose_message(round.target()))?,
            RoundState::InProgress => {}
        }

        console.prompt(guess::PLAY_AGAIN_PROMPT)?;
        match console.read_char() {
            Ok('y') => continue,
            Ok(_) | Err(CliError::EndOfInput) => return Ok(summary),
            Err(e) => return Err(e),
        }
    }
}

/// Print `count` draws from `[min, max]`, one per line
pub fn run_roll<R: BufRead, W: Write, G: RngCore>(
    console: &mut Console<R, W>,
    source: &mut RandomSource<G>,
    min: i64,
    max: i64,
    count: usize,
) -> Result<()> {
    for _ in 0..count {
        let value = source.try_get(min, max)?;
        console.say(&value.to_string())?;
    }
    Ok(())
}
