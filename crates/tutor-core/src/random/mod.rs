//! Random Source
//!
//! [`RandomSource`] owns one pseudo-random generator for as long as its owner
//! keeps it and hands out uniformly distributed values from inclusive
//! ranges, drawn with `rand`'s [`Rng::gen_range`]. There is no process-wide
//! instance: whoever needs randomness constructs a source (from entropy, from
//! a fixed seed, or around any [`RngCore`]) and passes it where it is needed.
//!
//! # Range contract
//!
//! `min > max` is a caller bug. [`RandomSource::get`] panics on it,
//! [`RandomSource::try_get`] reports it as [`TutorError::InvalidRange`].
//!
//! # Cross-type draws
//!
//! [`RandomSource::get_as`] converts both bounds to the result type with
//! [`TryFrom`] before drawing. A bound that does not fit the result type is
//! an error; it is never truncated or wrapped.

pub mod seed;

use core::any::type_name;
use core::fmt;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::config::RandomConfig;
use crate::{Result, TutorError};

pub use seed::{parse_seed, SeedMaterial, ENTROPY_WORDS, SEED_LEN};

// ----------------------------------------------------------------------------
// Random Source
// ----------------------------------------------------------------------------

/// Owner of a single generator instance, handing out inclusive range draws
pub struct RandomSource<R = ChaCha20Rng> {
    rng: R,
}

impl RandomSource<ChaCha20Rng> {
    /// Seed from the clock and the OS entropy source.
    ///
    /// If the OS source cannot be read the seed falls back to the clock
    /// alone and a warning is logged.
    pub fn from_entropy() -> Self {
        match Self::try_from_entropy() {
            Ok(source) => source,
            Err(e) => {
                warn!(error = %e, "OS entropy unavailable, seeding from clock only");
                Self::from_material(&SeedMaterial::clock_only())
            }
        }
    }

    /// Seed from the clock and the OS entropy source, failing if the OS
    /// source cannot be read
    pub fn try_from_entropy() -> Result<Self> {
        let material = SeedMaterial::gather()?;
        Ok(Self::from_material(&material))
    }

    /// Seed with a fixed value; the same seed always yields the same draws
    pub fn from_seed(seed: [u8; SEED_LEN]) -> Self {
        debug!(seed = %hex::encode(seed), "Seeding random source with fixed seed");
        Self {
            rng: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Use the configured fixed seed if there is one, entropy otherwise
    pub fn from_config(config: &RandomConfig) -> Result<Self> {
        match config.seed {
            Some(ref seed) => Ok(Self::from_seed(parse_seed(seed)?)),
            None => Ok(Self::from_entropy()),
        }
    }

    fn from_material(material: &SeedMaterial) -> Self {
        debug!(
            time_nanos = %material.time_nanos,
            entropy_words = ENTROPY_WORDS,
            "Seeding random source"
        );
        Self {
            rng: ChaCha20Rng::from_seed(material.mix()),
        }
    }
}

impl Default for RandomSource<ChaCha20Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RngCore> RandomSource<R> {
    /// Wrap an existing generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform value in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn get<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd + fmt::Display,
    {
        assert!(
            min <= max,
            "RandomSource::get called with min {} greater than max {}",
            min,
            max
        );
        self.rng.gen_range(min..=max)
    }

    /// Uniform value in `[min, max]`, or [`TutorError::InvalidRange`] if
    /// `min > max`
    pub fn try_get<T>(&mut self, min: T, max: T) -> Result<T>
    where
        T: SampleUniform + PartialOrd + fmt::Display,
    {
        if min > max {
            return Err(TutorError::invalid_range(min, max));
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Uniform `T` between bounds of possibly different numeric types.
    ///
    /// Both bounds are converted to `T` first; a bound outside `T`'s range
    /// yields [`TutorError::BoundOutOfRange`]. An inverted range after
    /// conversion yields [`TutorError::InvalidRange`].
    ///
    /// ```
    /// use tutor_core::RandomSource;
    ///
    /// let mut source = RandomSource::from_seed([1u8; 32]);
    /// let index = source.get_as::<usize, _, _>(0i32, 6u8).unwrap();
    /// assert!(index <= 6);
    ///
    /// assert!(source.get_as::<u8, _, _>(0i32, 300i32).is_err());
    /// ```
    pub fn get_as<T, A, B>(&mut self, min: A, max: B) -> Result<T>
    where
        T: SampleUniform + PartialOrd + fmt::Display + TryFrom<A> + TryFrom<B>,
        A: Copy + fmt::Display,
        B: Copy + fmt::Display,
    {
        let lo = <T as TryFrom<A>>::try_from(min)
            .map_err(|_| TutorError::bound_out_of_range(min, type_name::<T>()))?;
        let hi = <T as TryFrom<B>>::try_from(max)
            .map_err(|_| TutorError::bound_out_of_range(max, type_name::<T>()))?;
        self.try_get(lo, hi)
    }

    /// Raw 64-bit word, advancing the generator
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R> fmt::Debug for RandomSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Generator state stays out of logs
        f.debug_struct("RandomSource")
            .field("rng", &type_name::<R>())
            .finish()
    }
}
