// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round errors.
use thiserror::Error;

use crate::DiceError;

/// Errors returned by round operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The priority does not belong to any combination.
    #[error("invalid priority {0}: expected 1..=9")]
    InvalidPriority(u8),
    /// Scores cannot be negative.
    #[error("invalid score {0}: scores cannot be negative")]
    NegativeScore(i32),
    /// A dice error.
    #[error(transparent)]
    Dice(#[from] DiceError),
}

/// Round result type.
pub type Result<T> = std::result::Result<T, RoundError>;
