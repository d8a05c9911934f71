// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dice combinations.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dice hand combination from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Combination {
    /// No other combination.
    Nothing = 0,
    /// Two dice with the same face.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three dice with the same face.
    Set,
    /// 1 2 3 4 5
    SmallStraight,
    /// 2 3 4 5 6
    LargeStraight,
    /// A set and a pair.
    FullHouse,
    /// Four dice with the same face.
    Square,
    /// Five dice with the same face.
    Poker,
}

/// Combinations attributes indexed by the combination discriminant.
const ATTRIBUTES: [(u8, &str); 9] = [
    (1, "Nothing"),
    (2, "Pair"),
    (3, "Two Pair"),
    (4, "Set"),
    (5, "Small Straight"),
    (6, "Large Straight"),
    (7, "Full House"),
    (8, "Square"),
    (9, "Poker"),
];

impl Combination {
    /// Returns all combinations from the weakest to the strongest.
    pub fn all() -> impl DoubleEndedIterator<Item = Combination> {
        use Combination::*;
        [
            Nothing,
            Pair,
            TwoPair,
            Set,
            SmallStraight,
            LargeStraight,
            FullHouse,
            Square,
            Poker,
        ]
        .into_iter()
    }

    /// The combination priority, a stronger combination has a higher priority.
    pub fn priority(&self) -> u8 {
        ATTRIBUTES[*self as usize].0
    }

    /// The combination display label.
    pub fn label(&self) -> &'static str {
        ATTRIBUTES[*self as usize].1
    }

    /// Returns the combination with the given priority.
    pub fn from_priority(priority: u8) -> Option<Combination> {
        Self::all().find(|c| c.priority() == priority)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
