// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdice dice types.
//!
//! This crate defines a five dice [Hand] that is always sorted, and a
//! [DiceRoller] to roll a new hand and to roll again some of its dice:
//!
//! ```
//! # use pokerdice_dice::*;
//! let mut roller = DiceRoller::new(SecureRandom::new()?);
//! let mut hand = roller.roll()?;
//! assert!(hand.dice().is_sorted());
//!
//! // Roll again the first die.
//! let face = hand.dice()[0];
//! let outcome = roller.reroll(&mut hand, &RerollRequest::new([face])?)?;
//! assert_eq!(outcome.rerolled, 1);
//! # Ok::<(), DiceError>(())
//! ```
//!
//! Dice are drawn from a [RandomSource], the [SecureRandom] source uses a
//! cryptographically secure generator seeded once from the operating system,
//! use [SharedRandom] to share one generator across threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod error;
pub use error::{DiceError, Result};

mod hand;
pub use hand::{Hand, RerollRequest};

mod random;
pub use random::{RandomSource, SecureRandom, SharedRandom};

mod roller;
pub use roller::{DiceRoller, RerollOutcome};
