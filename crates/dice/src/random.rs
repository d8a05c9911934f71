// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random sources for rolling dice.
use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Arc;

use crate::{DiceError, Result};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a uniform integer in the inclusive range `min..=max`.
    ///
    /// Fails with [DiceError::InvalidRange] if `min > max`, and with
    /// [DiceError::RandomnessUnavailable] if the source cannot produce a value.
    fn next_int(&mut self, min: u8, max: u8) -> Result<u8>;
}

/// A cryptographically secure random source.
///
/// The generator is seeded once from the operating system and reused for all
/// draws. A copy would repeat the same draws so this type is not `Clone`, use
/// [SharedRandom] to draw from one generator in many places:
///
/// ```compile_fail
/// # use pokerdice_dice::*;
/// let rng = SecureRandom::new()?;
/// let copy = rng.clone();
/// # Ok::<(), DiceError>(())
/// ```
#[derive(Debug)]
pub struct SecureRandom {
    rng: StdRng,
}

impl SecureRandom {
    /// Creates a source seeded from the operating system entropy.
    pub fn new() -> Result<Self> {
        let rng = StdRng::try_from_os_rng()
            .map_err(|e| DiceError::RandomnessUnavailable(e.to_string()))?;
        Ok(Self { rng })
    }

    /// Creates a source with a fixed seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SecureRandom {
    fn next_int(&mut self, min: u8, max: u8) -> Result<u8> {
        if min > max {
            return Err(DiceError::InvalidRange { min, max });
        }

        Ok(self.rng.random_range(min..=max))
    }
}

/// A random source that can be shared across threads.
///
/// All clones draw from the same generator, draws are serialized by a mutex.
#[derive(Debug)]
pub struct SharedRandom<R>(Arc<Mutex<R>>);

impl<R: RandomSource> SharedRandom<R> {
    /// Wraps a random source for sharing.
    pub fn new(source: R) -> Self {
        Self(Arc::new(Mutex::new(source)))
    }
}

impl<R> Clone for SharedRandom<R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<R: RandomSource> RandomSource for SharedRandom<R> {
    fn next_int(&mut self, min: u8, max: u8) -> Result<u8> {
        self.0.lock().next_int(min, max)
    }
}
