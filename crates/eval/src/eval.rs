// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dice hand evaluator.
//!
//! A hand is classified into exactly one [Combination] checking combinations
//! from the strongest to the weakest and stopping at the first match, then a
//! score is computed to break ties between hands with the same combination.
use serde::{Deserialize, Serialize};

use crate::{Combination, Hand, Result};

const LARGE_STRAIGHT: [u8; Hand::SIZE] = [2, 3, 4, 5, 6];
const SMALL_STRAIGHT: [u8; Hand::SIZE] = [1, 2, 3, 4, 5];

/// The value of a hand.
///
/// Values compare by combination first and by score for equal combinations,
/// a stronger hand has a greater value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    combination: Combination,
    score: u32,
}

impl HandValue {
    /// Evaluates a hand.
    pub fn eval(hand: &Hand) -> Self {
        let combination = classify(hand);
        Self {
            combination,
            score: score(combination, hand),
        }
    }

    /// Evaluates raw dice values in any order.
    ///
    /// Fails with [DiceError::InvalidHand](crate::DiceError::InvalidHand) if
    /// the dice do not form a valid hand.
    pub fn try_eval(dice: &[u8]) -> Result<Self> {
        Hand::new(dice).map(|hand| Self::eval(&hand))
    }

    /// The hand combination.
    pub fn combination(&self) -> Combination {
        self.combination
    }

    /// The hand combination priority.
    pub fn priority(&self) -> u8 {
        self.combination.priority()
    }

    /// The tie-break score within the combination.
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Returns the combination for a hand.
pub fn classify(hand: &Hand) -> Combination {
    let dice = hand.dice();
    let counts = hand.counts();
    let (run, _) = longest_run(dice);

    let distinct = counts.iter().filter(|&&c| c > 0).count();
    let pairs = counts.iter().filter(|&&c| c == 2).count();

    if run == 5 {
        Combination::Poker
    } else if run == 4 {
        Combination::Square
    } else if distinct == 2 && counts.iter().all(|&c| c == 0 || c > 1) {
        Combination::FullHouse
    } else if dice == &LARGE_STRAIGHT {
        Combination::LargeStraight
    } else if dice == &SMALL_STRAIGHT {
        Combination::SmallStraight
    } else if run == 3 {
        Combination::Set
    } else if pairs == 2 {
        Combination::TwoPair
    } else if run == 2 {
        Combination::Pair
    } else {
        Combination::Nothing
    }
}

/// Returns the tie-break score of a hand for its combination.
///
/// The score only compares hands with the same combination, `combination`
/// must be the one returned by [classify] for this hand:
///
/// - Poker, Square, Set and Pair: the repeated face times the number of dice
///   showing it.
/// - Two Pair: the sum of the two paired faces times 2.
/// - Full House and straights: the sum of all dice.
/// - Nothing: 0.
pub(crate) fn score(combination: Combination, hand: &Hand) -> u32 {
    match combination {
        Combination::Poker | Combination::Square | Combination::Set | Combination::Pair => {
            let (run, face) = longest_run(hand.dice());
            face as u32 * run as u32
        }
        Combination::TwoPair => {
            let paired = hand
                .counts()
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == 2)
                .map(|(face, _)| face as u32)
                .sum::<u32>();
            paired * 2
        }
        Combination::FullHouse | Combination::LargeStraight | Combination::SmallStraight => {
            hand.sum()
        }
        Combination::Nothing => 0,
    }
}

/// Returns the length and the face of the longest run of equal dice.
///
/// The dice must be sorted so that equal faces are adjacent.
fn longest_run(dice: &[u8; Hand::SIZE]) -> (usize, u8) {
    let mut best = (1, dice[0]);
    let mut len = 1;

    for w in dice.windows(2) {
        if w[0] == w[1] {
            len += 1;
            if len > best.0 {
                best = (len, w[1]);
            }
        } else {
            len = 1;
        }
    }

    best
}
