// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dice hand definitions.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DiceError, Result};

/// A five dice hand.
///
/// The dice are validated on creation and always kept sorted in ascending
/// order, any function that changes the dice restores the ordering before
/// returning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Hand([u8; Hand::SIZE]);

impl Hand {
    /// The number of dice in a hand.
    pub const SIZE: usize = 5;

    /// The lowest die face.
    pub const MIN_FACE: u8 = 1;

    /// The highest die face.
    pub const MAX_FACE: u8 = 6;

    /// Creates a hand from the given dice in any order.
    ///
    /// Fails with [DiceError::InvalidHand] if there are not exactly 5 dice or
    /// if a value is not in 1..=6.
    pub fn new(dice: &[u8]) -> Result<Self> {
        let mut hand: [u8; Self::SIZE] = dice
            .try_into()
            .map_err(|_| DiceError::InvalidHand(dice.to_vec()))?;

        if !hand.iter().all(|&d| Self::is_face(d)) {
            return Err(DiceError::InvalidHand(dice.to_vec()));
        }

        hand.sort_unstable();
        Ok(Self(hand))
    }

    /// Checks if a value is a valid die face.
    #[inline]
    pub fn is_face(value: u8) -> bool {
        (Self::MIN_FACE..=Self::MAX_FACE).contains(&value)
    }

    /// Returns the sorted dice.
    pub fn dice(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// Returns the sum of all dice.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| d as u32).sum()
    }

    /// Returns how many dice show each face, indexed by face value.
    ///
    /// Index 0 is unused and always zero.
    pub fn counts(&self) -> [u8; 7] {
        let mut counts = [0; 7];
        for &d in &self.0 {
            counts[d as usize] += 1;
        }
        counts
    }

    /// Replaces the dice at the given positions and restores the ordering.
    pub(crate) fn set_sorted(&mut self, updates: &[(usize, u8)]) {
        for &(pos, value) in updates {
            debug_assert!(Self::is_face(value));
            self.0[pos] = value;
        }
        self.0.sort_unstable();
    }

    /// Calls the `f` closure for each of the 6^5 ordered rolls.
    ///
    /// Rolls with the same dice in a different order produce the same hand so
    /// each hand is visited as many times as there are ways of rolling it.
    pub fn for_each_roll<F>(mut f: F)
    where
        F: FnMut(Hand),
    {
        let faces = Self::MIN_FACE..=Self::MAX_FACE;
        for d1 in faces.clone() {
            for d2 in faces.clone() {
                for d3 in faces.clone() {
                    for d4 in faces.clone() {
                        for d5 in faces.clone() {
                            let mut dice = [d1, d2, d3, d4, d5];
                            dice.sort_unstable();
                            f(Hand(dice));
                        }
                    }
                }
            }
        }
    }
}

impl TryFrom<Vec<u8>> for Hand {
    type Error = DiceError;

    fn try_from(dice: Vec<u8>) -> Result<Self> {
        Hand::new(&dice)
    }
}

impl From<Hand> for Vec<u8> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d1, d2, d3, d4, d5] = self.0;
        write!(f, "{d1} {d2} {d3} {d4} {d5}")
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}

/// The face values a player wants to roll again.
///
/// Duplicates are meaningful, a request for `4 4` rerolls two dice showing 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RerollRequest(Vec<u8>);

impl RerollRequest {
    /// Creates a reroll request.
    ///
    /// Fails with [DiceError::InvalidReroll] if the request is empty, has more
    /// than 5 faces, or has a value not in 1..=6.
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let faces = faces.into_iter().collect::<Vec<_>>();
        let valid = (1..=Hand::SIZE).contains(&faces.len())
            && faces.iter().all(|&f| Hand::is_face(f));

        if valid {
            Ok(Self(faces))
        } else {
            Err(DiceError::InvalidReroll(faces))
        }
    }

    /// The requested faces in request order.
    pub fn faces(&self) -> &[u8] {
        &self.0
    }
}
