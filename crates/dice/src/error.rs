// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dice errors.
use thiserror::Error;

/// Errors returned by dice operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The dice do not form a valid hand.
    #[error("invalid hand {0:?}: expected 5 dice with values in 1..=6")]
    InvalidHand(Vec<u8>),
    /// The reroll request is malformed.
    #[error("invalid reroll {0:?}: expected 1 to 5 dice with values in 1..=6")]
    InvalidReroll(Vec<u8>),
    /// A random draw was requested with an empty range.
    #[error("invalid range {min}..={max}")]
    InvalidRange {
        /// Lower bound.
        min: u8,
        /// Upper bound.
        max: u8,
    },
    /// The random generator could not be seeded or could not draw.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}

/// Dice result type.
pub type Result<T> = std::result::Result<T, DiceError>;
