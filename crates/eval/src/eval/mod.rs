// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better hand classifier.
//!
//! The classifier checks the hand types predicates from the [Royal
//! Flush](HandType::RoyalFlush) down to [Jacks or
//! Better](HandType::JacksOrBetter) and returns the first one that matches,
//! falling back to [High Card](HandType::HighCard). The payout is computed with
//! a [PayTable], [evaluate] uses the default 9/6 table:
//!
//! ```
//! # use jacks_eval::{Card, HandType, evaluate};
//! let cards = ["Th", "Jh", "Qh", "Kh", "Ah"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let result = evaluate(&cards, 5).unwrap();
//! assert_eq!(result.hand_type, HandType::RoyalFlush);
//! assert_eq!(result.payout, 4000);
//! assert_eq!(evaluate(&cards, 3).unwrap().payout, 750);
//! ```
use serde::Serialize;

use jacks_cards::Card;

use crate::{Result, hand::Hand};

mod hand_type;
pub use hand_type::HandType;

mod pay_table;
pub use pay_table::PayTable;

/// The outcome of a completed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    /// The best hand type.
    pub hand_type: HandType,
    /// The payout in coins.
    pub payout: u32,
    /// The cards that make a pairs based hand in dealing order, `None` when all
    /// cards are part of the hand or the hand doesn't pay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_cards: Option<Vec<Card>>,
}

impl HandResult {
    /// Classifies a hand and computes its payout.
    pub fn eval(hand: &Hand, bet: u32, table: &PayTable) -> HandResult {
        let (hand_type, holds) = HandType::classify(hand);
        let winning_cards = hand_type.is_grouping().then(|| hand.cards_at(holds));

        HandResult {
            hand_type,
            payout: table.payout(hand_type, bet),
            winning_cards,
        }
    }
}

impl PayTable {
    /// Classifies five cards and computes the payout for `bet` coins.
    pub fn evaluate(&self, cards: &[Card], bet: u32) -> Result<HandResult> {
        let hand = Hand::new(cards)?;
        Ok(HandResult::eval(&hand, bet, self))
    }
}

/// Classifies five cards with the default pay table.
pub fn evaluate(cards: &[Card], bet: u32) -> Result<HandResult> {
    PayTable::default().evaluate(cards, bet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, hand::cards};
    use jacks_cards::Deck;

    #[test]
    fn evaluate_invalid_size() {
        assert_eq!(
            evaluate(&cards("Th Jh Qh Kh"), 1),
            Err(Error::InvalidHandSize(4))
        );
        assert_eq!(
            evaluate(&cards("Th Jh Qh Kh Ah 2c"), 5),
            Err(Error::InvalidHandSize(6))
        );
    }

    #[test]
    fn evaluate_royal_flush() {
        let hand = cards("Th Jh Qh Kh Ah");

        let result = evaluate(&hand, 5).unwrap();
        assert_eq!(result.hand_type, HandType::RoyalFlush);
        assert_eq!(result.payout, 4000);
        assert_eq!(result.winning_cards, None);

        assert_eq!(evaluate(&hand, 3).unwrap().payout, 750);
        assert_eq!(evaluate(&hand, 1).unwrap().payout, 250);
    }

    #[test]
    fn evaluate_winning_cards() {
        let result = evaluate(&cards("2c Kd 9s 2d 9h"), 2).unwrap();
        assert_eq!(result.hand_type, HandType::TwoPair);
        assert_eq!(result.payout, 4);
        assert_eq!(result.winning_cards, Some(cards("2c 9s 2d 9h")));

        let result = evaluate(&cards("Qs 4d 7c Qd 2h"), 3).unwrap();
        assert_eq!(result.hand_type, HandType::JacksOrBetter);
        assert_eq!(result.payout, 3);
        assert_eq!(result.winning_cards, Some(cards("Qs Qd")));

        let result = evaluate(&cards("5d 5c Jh 5s Jd"), 1).unwrap();
        assert_eq!(result.hand_type, HandType::FullHouse);
        assert_eq!(result.payout, 9);
        assert_eq!(result.winning_cards, Some(cards("5d 5c Jh 5s Jd")));

        let result = evaluate(&cards("2h 5h 8h Jh Kh"), 1).unwrap();
        assert_eq!(result.hand_type, HandType::Flush);
        assert_eq!(result.winning_cards, None);

        let result = evaluate(&cards("Tc Td 6s 8h 9d"), 5).unwrap();
        assert_eq!(result.hand_type, HandType::HighCard);
        assert_eq!(result.payout, 0);
        assert_eq!(result.winning_cards, None);
    }

    #[test]
    fn evaluate_custom_table() {
        let table = PayTable {
            full_house: 8,
            flush: 5,
            ..PayTable::default()
        };

        let result = table.evaluate(&cards("5d 5c Jh 5s Jd"), 5).unwrap();
        assert_eq!(result.payout, 40);

        let result = table.evaluate(&cards("2h 5h 8h Jh Kh"), 2).unwrap();
        assert_eq!(result.payout, 10);
    }

    #[test]
    fn evaluate_is_pure() {
        let hand = cards("7s 8s 9s Ts 2d");
        assert_eq!(evaluate(&hand, 2), evaluate(&hand, 2));
    }

    #[test]
    fn evaluate_result_serialize() {
        let result = evaluate(&cards("4s Jc 7h Jd 9d"), 1).unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"hand_type":"JacksOrBetter","payout":1,"winning_cards":["J♣","J♦"]}"#
        );

        let result = evaluate(&cards("5c 6d 7h 8s 9c"), 1).unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"hand_type":"Straight","payout":4}"#
        );
    }

    #[test]
    fn evaluate_all_hands() {
        let table = PayTable::default();
        let mut counts = [0usize; HandType::COUNT];

        Deck::default().for_each(5, |cards| {
            let hand = Hand::new(cards).unwrap();
            let result = HandResult::eval(&hand, 1, &table);
            counts[result.hand_type as usize] += 1;

            if let Some(winning) = &result.winning_cards {
                assert!(winning.iter().all(|c| cards.contains(c)));
            }
        });

        assert_eq!(counts[HandType::RoyalFlush as usize], 4);
        assert_eq!(counts[HandType::StraightFlush as usize], 36);
        assert_eq!(counts[HandType::FourOfAKind as usize], 624);
        assert_eq!(counts[HandType::FullHouse as usize], 3_744);
        assert_eq!(counts[HandType::Flush as usize], 5_108);
        assert_eq!(counts[HandType::Straight as usize], 10_200);
        assert_eq!(counts[HandType::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandType::TwoPair as usize], 123_552);
        assert_eq!(counts[HandType::JacksOrBetter as usize], 337_920);
        assert_eq!(counts[HandType::HighCard as usize], 2_062_860);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}
