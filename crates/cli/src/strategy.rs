// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Reroll strategy for simulated players.
use pokerdice_core::{Combination, Hand, HandValue, RerollRequest};

/// Returns the dice a simulated player rolls again, if any.
///
/// Hands with a straight or better are kept. Otherwise the player keeps the
/// repeated faces and rolls again the single ones, with no repeated faces the
/// highest die is kept.
pub fn reroll_request(hand: &Hand) -> Option<RerollRequest> {
    let value = HandValue::eval(hand);
    if value.combination() >= Combination::SmallStraight {
        return None;
    }

    let counts = hand.counts();
    let mut singles = hand
        .dice()
        .iter()
        .copied()
        .filter(|&d| counts[d as usize] == 1)
        .collect::<Vec<_>>();

    if value.combination() == Combination::Nothing {
        // Dice are sorted, keep the last one.
        singles.pop();
    }

    RerollRequest::new(singles).ok()
}
