// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pay table.
use serde::{Deserialize, Serialize};

use super::HandType;

/// Payout multipliers per hand type.
///
/// The Royal Flush pays a fixed jackpot when the bet is the maximum number of
/// coins and its multiplier times the bet otherwise. Missing fields take the
/// default 9/6 Jacks or Better values when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayTable {
    /// Royal Flush multiplier for bets below the max coins.
    pub royal_flush: u32,
    /// Straight Flush multiplier.
    pub straight_flush: u32,
    /// Four of a Kind multiplier.
    pub four_of_a_kind: u32,
    /// Full House multiplier.
    pub full_house: u32,
    /// Flush multiplier.
    pub flush: u32,
    /// Straight multiplier.
    pub straight: u32,
    /// Three of a Kind multiplier.
    pub three_of_a_kind: u32,
    /// Two Pair multiplier.
    pub two_pair: u32,
    /// Jacks or Better multiplier.
    pub jacks_or_better: u32,
    /// High Card multiplier.
    pub high_card: u32,
    /// The maximum number of coins per hand.
    pub max_coins: u32,
    /// The Royal Flush payout at max coins.
    pub royal_jackpot: u32,
}

impl PayTable {
    /// The payout multiplier for a hand type.
    pub fn multiplier(&self, hand_type: HandType) -> u32 {
        match hand_type {
            HandType::RoyalFlush => self.royal_flush,
            HandType::StraightFlush => self.straight_flush,
            HandType::FourOfAKind => self.four_of_a_kind,
            HandType::FullHouse => self.full_house,
            HandType::Flush => self.flush,
            HandType::Straight => self.straight,
            HandType::ThreeOfAKind => self.three_of_a_kind,
            HandType::TwoPair => self.two_pair,
            HandType::JacksOrBetter => self.jacks_or_better,
            HandType::HighCard => self.high_card,
        }
    }

    /// The payout for a hand type and a bet.
    pub fn payout(&self, hand_type: HandType, bet: u32) -> u32 {
        if hand_type == HandType::RoyalFlush && bet == self.max_coins {
            self.royal_jackpot
        } else {
            self.multiplier(hand_type).saturating_mul(bet)
        }
    }
}

impl Default for PayTable {
    fn default() -> Self {
        Self {
            royal_flush: 250,
            straight_flush: 50,
            four_of_a_kind: 25,
            full_house: 9,
            flush: 6,
            straight: 4,
            three_of_a_kind: 3,
            two_pair: 2,
            jacks_or_better: 1,
            high_card: 0,
            max_coins: 5,
            royal_jackpot: 4000,
        }
    }
}
