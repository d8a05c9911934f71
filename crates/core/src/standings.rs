// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round standings.
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::{Hand, HandValue, Result, RoundResult, result::rank_by_key};

/// A unique player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Creates a player id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The integer id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player final position in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// The player id.
    pub player_id: PlayerId,
    /// The player final hand.
    pub hand: Hand,
    /// The hand result.
    pub result: RoundResult,
}

/// A player hand as read from serialized standings.
///
/// The serialized result is ignored, it is computed again from the hand.
#[derive(Deserialize)]
struct PlayerHand {
    player_id: PlayerId,
    hand: Hand,
}

/// The players in a round from the strongest hand to the weakest.
///
/// Deserialized standings are evaluated and ranked again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings(Vec<Standing>);

impl Standings {
    /// Evaluates the players final hands and ranks them.
    ///
    /// Players with equal results keep the order in which they are given.
    pub fn new<I>(hands: I) -> Self
    where
        I: IntoIterator<Item = (PlayerId, Hand)>,
    {
        let mut standings = hands
            .into_iter()
            .map(|(player_id, hand)| Standing {
                player_id,
                hand,
                result: RoundResult::from_value(HandValue::eval(&hand)),
            })
            .collect::<Vec<_>>();

        rank_by_key(&mut standings, |s| s.result);

        for (pos, s) in standings.iter().enumerate() {
            debug!("#{} player {} {} {}", pos + 1, s.player_id, s.hand, s.result);
        }

        Self(standings)
    }

    /// Evaluates and ranks the players raw dice.
    ///
    /// Fails with [DiceError::InvalidHand](crate::DiceError::InvalidHand) if
    /// any player dice do not form a valid hand.
    pub fn try_new<I, D>(dice: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PlayerId, D)>,
        D: AsRef<[u8]>,
    {
        let hands = dice
            .into_iter()
            .map(|(player_id, dice)| Ok((player_id, Hand::new(dice.as_ref())?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(hands))
    }

    /// Returns the round winner.
    ///
    /// A round needs at least two players to have a winner, when more players
    /// have the best result the first one given wins.
    pub fn winner(&self) -> Option<&Standing> {
        if self.0.len() < 2 {
            None
        } else {
            self.0.first()
        }
    }

    /// Returns the standing for a player.
    pub fn get(&self, player_id: PlayerId) -> Option<&Standing> {
        self.0.iter().find(|s| s.player_id == player_id)
    }

    /// Returns an iterator over the standings from the first position.
    pub fn iter(&self) -> impl Iterator<Item = &Standing> {
        self.0.iter()
    }

    /// Returns the number of players.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if there are no players.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the standings as a vector.
    pub fn into_vec(self) -> Vec<Standing> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Standings {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hands = Vec::<PlayerHand>::deserialize(deserializer)?;
        Ok(Self::new(hands.into_iter().map(|p| (p.player_id, p.hand))))
    }
}
