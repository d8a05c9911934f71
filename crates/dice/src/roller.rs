// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rolling and rerolling hands.
use log::{debug, trace};

use crate::{Hand, RandomSource, RerollRequest, Result};

/// The outcome of a reroll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RerollOutcome {
    /// Number of dice that have been rolled again.
    pub rerolled: usize,
    /// Requested faces that had no matching die in the hand.
    pub skipped: Vec<u8>,
}

impl RerollOutcome {
    /// Checks if all requested faces have been rerolled.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Rolls hands using a random source.
#[derive(Debug)]
pub struct DiceRoller<R> {
    rng: R,
}

impl<R: RandomSource> DiceRoller<R> {
    /// Creates a roller that draws from the given source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Rolls five dice.
    pub fn roll(&mut self) -> Result<Hand> {
        let mut dice = [0; Hand::SIZE];
        for d in dice.iter_mut() {
            *d = self.draw()?;
        }

        let hand = Hand::new(&dice)?;
        debug!("Rolled {hand}");
        Ok(hand)
    }

    /// Rolls again the dice showing the requested faces.
    ///
    /// Each requested face takes the leftmost die showing that face that has
    /// not been taken by a previous entry, faces without a matching die are
    /// skipped and reported in the outcome. The hand is sorted when this
    /// function returns.
    ///
    /// On error the hand is left unchanged.
    pub fn reroll(&mut self, hand: &mut Hand, request: &RerollRequest) -> Result<RerollOutcome> {
        let dice = *hand.dice();
        let mut taken = [false; Hand::SIZE];
        let mut updates = Vec::with_capacity(request.faces().len());
        let mut outcome = RerollOutcome::default();

        for &face in request.faces() {
            let pos = (0..Hand::SIZE).find(|&pos| !taken[pos] && dice[pos] == face);
            match pos {
                Some(pos) => {
                    taken[pos] = true;
                    updates.push((pos, self.draw()?));
                    outcome.rerolled += 1;
                }
                None => {
                    debug!("Reroll of {face} skipped, no matching die in {hand}");
                    outcome.skipped.push(face);
                }
            }
        }

        hand.set_sorted(&updates);
        trace!("Rerolled {dice:?} into {hand}");
        Ok(outcome)
    }

    fn draw(&mut self) -> Result<u8> {
        self.rng.next_int(Hand::MIN_FACE, Hand::MAX_FACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiceError, SecureRandom};
    use std::collections::VecDeque;

    /// Returns the scripted values in order.
    struct Scripted(VecDeque<u8>);

    impl Scripted {
        fn new(values: &[u8]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn next_int(&mut self, min: u8, max: u8) -> Result<u8> {
            let v = self
                .0
                .pop_front()
                .ok_or_else(|| DiceError::RandomnessUnavailable("script exhausted".into()))?;
            assert!((min..=max).contains(&v));
            Ok(v)
        }
    }

    fn hand(dice: &[u8]) -> Hand {
        Hand::new(dice).unwrap()
    }

    #[test]
    fn roll_is_sorted() {
        let mut roller = DiceRoller::new(Scripted::new(&[6, 1, 5, 2, 2]));
        assert_eq!(roller.roll().unwrap(), hand(&[1, 2, 2, 5, 6]));

        let mut roller = DiceRoller::new(SecureRandom::with_seed(13));
        for _ in 0..100 {
            let h = roller.roll().unwrap();
            assert!(h.dice().is_sorted());
            assert!(h.dice().iter().all(|&d| Hand::is_face(d)));
        }
    }

    #[test]
    fn roll_propagates_randomness_errors() {
        let mut roller = DiceRoller::new(Scripted::new(&[1, 2]));
        assert!(matches!(
            roller.roll(),
            Err(DiceError::RandomnessUnavailable(_))
        ));
    }

    #[test]
    fn reroll_duplicate_faces() {
        let mut h = hand(&[1, 1, 2, 5, 6]);
        let mut roller = DiceRoller::new(Scripted::new(&[4, 3]));

        let req = RerollRequest::new([1, 1]).unwrap();
        let outcome = roller.reroll(&mut h, &req).unwrap();

        assert_eq!(h, hand(&[2, 3, 4, 5, 6]));
        assert_eq!(outcome.rerolled, 2);
        assert!(outcome.is_complete());
    }

    #[test]
    fn reroll_skips_missing_faces() {
        let mut h = hand(&[1, 1, 2, 5, 6]);
        let mut roller = DiceRoller::new(Scripted::new(&[]));

        let req = RerollRequest::new([3]).unwrap();
        let outcome = roller.reroll(&mut h, &req).unwrap();

        assert_eq!(h, hand(&[1, 1, 2, 5, 6]));
        assert_eq!(outcome.rerolled, 0);
        assert_eq!(outcome.skipped, vec![3]);
        assert!(!outcome.is_complete());
    }

    #[test]
    fn reroll_more_faces_than_dice() {
        // Only one die shows 5, the second 5 has nothing to take.
        let mut h = hand(&[1, 1, 2, 5, 6]);
        let mut roller = DiceRoller::new(Scripted::new(&[6]));

        let req = RerollRequest::new([5, 5]).unwrap();
        let outcome = roller.reroll(&mut h, &req).unwrap();

        assert_eq!(h, hand(&[1, 1, 2, 6, 6]));
        assert_eq!(outcome.rerolled, 1);
        assert_eq!(outcome.skipped, vec![5]);
    }

    #[test]
    fn reroll_matches_original_dice() {
        // The new value for the 1 is a 6, the 6 in the request must take the
        // original 6 and not the die just rolled.
        let mut h = hand(&[1, 2, 3, 4, 6]);
        let mut roller = DiceRoller::new(Scripted::new(&[6, 5]));

        let req = RerollRequest::new([1, 6, 6]).unwrap();
        let outcome = roller.reroll(&mut h, &req).unwrap();

        assert_eq!(h, hand(&[2, 3, 4, 5, 6]));
        assert_eq!(outcome.rerolled, 2);
        assert_eq!(outcome.skipped, vec![6]);
    }

    #[test]
    fn reroll_unmatched_does_not_consume() {
        // A missing face must not prevent later faces from matching.
        let mut h = hand(&[1, 1, 2, 5, 6]);
        let mut roller = DiceRoller::new(Scripted::new(&[2]));

        let req = RerollRequest::new([3, 5]).unwrap();
        let outcome = roller.reroll(&mut h, &req).unwrap();

        assert_eq!(h, hand(&[1, 1, 2, 2, 6]));
        assert_eq!(outcome.rerolled, 1);
        assert_eq!(outcome.skipped, vec![3]);
    }

    #[test]
    fn reroll_error_leaves_hand() {
        let mut h = hand(&[1, 1, 2, 5, 6]);
        let mut roller = DiceRoller::new(Scripted::new(&[3]));

        let req = RerollRequest::new([1, 2]).unwrap();
        assert!(matches!(
            roller.reroll(&mut h, &req),
            Err(DiceError::RandomnessUnavailable(_))
        ));
        assert_eq!(h, hand(&[1, 1, 2, 5, 6]));
    }
}
