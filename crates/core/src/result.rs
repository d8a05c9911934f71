// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round results and ranking.
use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, fmt};

use crate::{Combination, HandValue, Result, RoundError};

/// The result of a player hand at the end of a round.
///
/// Results compare by combination priority first and by score for equal
/// priorities, a stronger result is greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    combination: Combination,
    score: u32,
}

impl RoundResult {
    /// Creates a result from a combination priority and a score.
    ///
    /// Fails if the priority does not belong to a combination or if the score
    /// is negative.
    pub fn new(priority: u8, score: i32) -> Result<Self> {
        let combination =
            Combination::from_priority(priority).ok_or(RoundError::InvalidPriority(priority))?;
        let score = u32::try_from(score).map_err(|_| RoundError::NegativeScore(score))?;
        Ok(Self { combination, score })
    }

    /// Creates a result from an evaluated hand.
    pub fn from_value(value: HandValue) -> Self {
        Self {
            combination: value.combination(),
            score: value.score(),
        }
    }

    /// The result combination.
    pub fn combination(&self) -> Combination {
        self.combination
    }

    /// The result priority.
    pub fn priority(&self) -> u8 {
        self.combination.priority()
    }

    /// The result tie-break score.
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl From<HandValue> for RoundResult {
    fn from(value: HandValue) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.combination, self.score)
    }
}

/// Sorts results from the strongest to the weakest.
///
/// Results with the same priority and score keep their input order.
pub fn rank(mut results: Vec<RoundResult>) -> Vec<RoundResult> {
    rank_by_key(&mut results, |r| *r);
    results
}

/// Sorts items by their result from the strongest to the weakest.
///
/// Items with equal results keep their relative order.
pub fn rank_by_key<T, F>(items: &mut [T], mut key: F)
where
    F: FnMut(&T) -> RoundResult,
{
    items.sort_by_key(|item| Reverse(key(item)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(combination: Combination, score: u32) -> RoundResult {
        RoundResult { combination, score }
    }

    #[test]
    fn new_result() {
        let r = RoundResult::new(9, 5).unwrap();
        assert_eq!(r.combination(), Combination::Poker);
        assert_eq!(r.priority(), 9);
        assert_eq!(r.score(), 5);

        assert_eq!(RoundResult::new(0, 5), Err(RoundError::InvalidPriority(0)));
        assert_eq!(
            RoundResult::new(10, 5),
            Err(RoundError::InvalidPriority(10))
        );
        assert_eq!(RoundResult::new(2, -1), Err(RoundError::NegativeScore(-1)));
    }

    #[test]
    fn from_value() {
        let v = HandValue::try_eval(&[2, 5, 2, 6, 5]).unwrap();
        let r = RoundResult::from(v);
        assert_eq!(r.combination(), Combination::TwoPair);
        assert_eq!(r.score(), 14);
        assert_eq!(r.to_string(), "Two Pair (14)");
    }

    #[test]
    fn rank_priority_then_score() {
        let ranked = rank(vec![
            result(Combination::Poker, 5),
            result(Combination::Square, 8),
            result(Combination::Poker, 6),
        ]);

        assert_eq!(
            ranked,
            vec![
                result(Combination::Poker, 6),
                result(Combination::Poker, 5),
                result(Combination::Square, 8),
            ]
        );
    }

    #[test]
    fn rank_priority_beats_score() {
        let ranked = rank(vec![
            result(Combination::Nothing, 0),
            result(Combination::Pair, 12),
            result(Combination::TwoPair, 6),
            result(Combination::SmallStraight, 15),
            result(Combination::Set, 18),
        ]);

        let priorities = ranked.iter().map(|r| r.priority()).collect::<Vec<_>>();
        assert_eq!(priorities, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn rank_is_stable() {
        let mut items = vec![
            ("a", result(Combination::Pair, 4)),
            ("b", result(Combination::Set, 9)),
            ("c", result(Combination::Pair, 4)),
            ("d", result(Combination::Set, 9)),
            ("e", result(Combination::Pair, 12)),
        ];

        rank_by_key(&mut items, |(_, r)| *r);
        let names = items.iter().map(|(n, _)| *n).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "d", "e", "a", "c"]);
    }
}
