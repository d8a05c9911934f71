// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdice hand evaluator.
//!
//! Classifies a five dice hand into one of nine combinations, from
//! [Combination::Nothing] to [Combination::Poker], and computes a score used
//! to break ties between hands with the same combination.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and compare it with other hands:
//!
//! ```
//! # use pokerdice_eval::*;
//! let v1 = HandValue::eval(&Hand::new(&[2, 2, 5, 5, 6])?);
//! let v2 = HandValue::eval(&Hand::new(&[6, 6, 1, 2, 3])?);
//! assert_eq!(v1.combination(), Combination::TwoPair);
//! assert_eq!(v2.combination(), Combination::Pair);
//! assert!(v1 > v2);
//! # Ok::<(), DiceError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combination;
pub use combination::Combination;

pub mod eval;
pub use eval::HandValue;

// Reexport dice types.
pub use pokerdice_dice::{
    DiceError, DiceRoller, Hand, RandomSource, RerollOutcome, RerollRequest, Result, SecureRandom,
    SharedRandom,
};
