//! Seed gathering and mixing
//!
//! A seed is assembled from the wall clock at nanosecond resolution and
//! [`ENTROPY_WORDS`] independent 32-bit reads from the OS entropy source.
//! The material is hashed with SHA-256 into a 32-byte ChaCha seed so two
//! processes started within the same clock tick still diverge.

use std::time::{SystemTime, UNIX_EPOCH};

use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::{Result, TutorError};

/// Number of 32-bit words read from the OS entropy source per seed
pub const ENTROPY_WORDS: usize = 7;

/// Length of a generator seed in bytes
pub const SEED_LEN: usize = 32;

/// Raw inputs to a seed, kept separate from mixing so tests can pin them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedMaterial {
    pub time_nanos: u128,
    pub entropy: [u32; ENTROPY_WORDS],
}

impl SeedMaterial {
    /// Read the clock and the OS entropy source
    pub fn gather() -> Result<Self> {
        let mut entropy = [0u32; ENTROPY_WORDS];
        for word in entropy.iter_mut() {
            let mut bytes = [0u8; 4];
            OsRng
                .try_fill_bytes(&mut bytes)
                .map_err(|e| TutorError::Entropy(e.to_string()))?;
            *word = u32::from_le_bytes(bytes);
        }

        Ok(Self {
            time_nanos: clock_nanos(),
            entropy,
        })
    }

    /// Clock-only material, used when the OS entropy source is unavailable
    pub fn clock_only() -> Self {
        Self {
            time_nanos: clock_nanos(),
            entropy: [0; ENTROPY_WORDS],
        }
    }

    /// Collapse the material into a single generator seed
    pub fn mix(&self) -> [u8; SEED_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(self.time_nanos.to_le_bytes());
        for word in &self.entropy {
            hasher.update(word.to_le_bytes());
        }
        hasher.finalize().into()
    }
}

fn clock_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}

/// Parse a seed from its hex form (exactly 64 hex characters)
pub fn parse_seed(seed: &str) -> Result<[u8; SEED_LEN]> {
    let bytes = hex::decode(seed.trim())
        .map_err(|_| TutorError::InvalidSeed(format!("Invalid seed hex format: {}", seed)))?;

    if bytes.len() != SEED_LEN {
        return Err(TutorError::InvalidSeed(format!(
            "Seed must be exactly {} bytes ({} hex chars), got {} bytes",
            SEED_LEN,
            SEED_LEN * 2,
            bytes.len()
        )));
    }

    let mut out = [0u8; SEED_LEN];
    out.copy_from_slice(&bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_is_deterministic() {
        let material = SeedMaterial {
            time_nanos: 1_700_000_000_000_000_000,
            entropy: [1, 2, 3, 4, 5, 6, 7],
        };
        assert_eq!(material.mix(), material.mix());
    }

    #[test]
    fn test_mix_depends_on_every_input() {
        let base = SeedMaterial {
            time_nanos: 42,
            entropy: [0; ENTROPY_WORDS],
        };
        let later = SeedMaterial {
            time_nanos: 43,
            ..base
        };
        assert_ne!(base.mix(), later.mix());

        for i in 0..ENTROPY_WORDS {
            let mut tweaked = base;
            tweaked.entropy[i] = 1;
            assert_ne!(base.mix(), tweaked.mix(), "entropy word {} ignored", i);
        }
    }

    #[test]
    fn test_gather_reads_entropy() {
        let a = SeedMaterial::gather().unwrap();
        let b = SeedMaterial::gather().unwrap();
        assert_ne!(a.entropy, b.entropy);
        assert_ne!(a.mix(), b.mix());
    }

    #[test]
    fn test_parse_seed() {
        let hex_seed = "00".repeat(31) + "ff";
        let seed = parse_seed(&hex_seed).unwrap();
        assert_eq!(seed[31], 0xff);
        assert!(seed[..31].iter().all(|b| *b == 0));

        assert!(matches!(parse_seed("zz"), Err(TutorError::InvalidSeed(_))));
        assert!(matches!(parse_seed("abcd"), Err(TutorError::InvalidSeed(_))));
        assert!(parse_seed(&"ab".repeat(33)).is_err());
    }
}
