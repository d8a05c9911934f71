// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdice round results.
//!
//! Binds the players final hands to a [RoundResult] and ranks them from the
//! strongest to the weakest:
//!
//! ```
//! # use pokerdice_core::*;
//! let standings = Standings::new([
//!     (PlayerId::new(1), Hand::new(&[6, 6, 1, 2, 3])?),
//!     (PlayerId::new(2), Hand::new(&[2, 2, 5, 5, 6])?),
//! ]);
//!
//! let winner = standings.winner().unwrap();
//! assert_eq!(winner.player_id, PlayerId::new(2));
//! assert_eq!(winner.result.combination(), Combination::TwoPair);
//! # Ok::<(), RoundError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod error;
pub use error::{Result, RoundError};

pub mod result;
pub use result::{RoundResult, rank};

pub mod standings;
pub use standings::{PlayerId, Standing, Standings};

// Reexport evaluator types.
pub use pokerdice_eval::{
    Combination, DiceError, DiceRoller, Hand, HandValue, RandomSource, RerollOutcome,
    RerollRequest, SecureRandom, SharedRandom,
};
