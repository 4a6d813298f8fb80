// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better hold advisor.
//!
//! The advisor checks a list of hold rules from the strongest to the weakest
//! and recommends the positions of the first rule that applies, when no rule
//! applies it recommends to discard all cards:
//!
//! ```
//! # use jacks_eval::{Card, Strategy, recommend};
//! let cards = ["Ts", "Js", "Qs", "Ks", "2h"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let result = recommend(&cards).unwrap();
//! assert_eq!(result.strategy, Strategy::FourToRoyalFlush);
//! assert_eq!(result.hold_indices.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! ```
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;

use jacks_cards::Card;

use crate::{
    Result,
    hand::{Hand, Holds},
};

mod rules;
use rules::RULES;

/// A hold strategy, ordered from the strongest to the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Hold a dealt royal flush.
    RoyalFlush = 0,
    /// Hold a dealt straight flush.
    StraightFlush,
    /// Hold four cards of the same rank.
    FourOfAKind,
    /// Hold four suited royal cards.
    FourToRoyalFlush,
    /// Hold a dealt full house.
    FullHouse,
    /// Hold a dealt flush.
    Flush,
    /// Hold a dealt straight.
    Straight,
    /// Hold three cards of the same rank.
    ThreeOfAKind,
    /// Hold four suited cards with a run of three.
    FourToStraightFlush,
    /// Hold two pairs.
    TwoPair,
    /// Hold a pair of Jacks or better.
    HighPair,
    /// Hold three suited royal cards.
    ThreeToRoyalFlush,
    /// Hold four suited cards.
    FourToFlush,
    /// Hold a pair of Tens or lower.
    LowPair,
    /// Hold four consecutive cards open at both ends.
    FourToOutsideStraight,
    /// Hold two suited high cards.
    TwoSuitedHighCards,
    /// Hold three suited cards within a five values span.
    ThreeToStraightFlush,
    /// Hold the two lowest high cards.
    TwoUnsuitedHighCards,
    /// Hold a suited ten with a face card.
    SuitedTenWithFace,
    /// Hold a single high card.
    OneHighCard,
    /// Draw five new cards.
    DiscardEverything,
}

impl Strategy {
    /// The number of strategies.
    pub const COUNT: usize = 21;

    /// Returns all strategies from the strongest to the weakest.
    pub fn strategies() -> impl DoubleEndedIterator<Item = Strategy> {
        use Strategy::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FourToRoyalFlush,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            FourToStraightFlush,
            TwoPair,
            HighPair,
            ThreeToRoyalFlush,
            FourToFlush,
            LowPair,
            FourToOutsideStraight,
            TwoSuitedHighCards,
            ThreeToStraightFlush,
            TwoUnsuitedHighCards,
            SuitedTenWithFace,
            OneHighCard,
            DiscardEverything,
        ]
        .into_iter()
    }

    /// The strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RoyalFlush => "Royal flush",
            Strategy::StraightFlush => "Straight flush",
            Strategy::FourOfAKind => "Four of a kind",
            Strategy::FourToRoyalFlush => "4 to a royal flush",
            Strategy::FullHouse => "Full house",
            Strategy::Flush => "Flush",
            Strategy::Straight => "Straight",
            Strategy::ThreeOfAKind => "Three of a kind",
            Strategy::FourToStraightFlush => "4 to a straight flush",
            Strategy::TwoPair => "Two pair",
            Strategy::HighPair => "High pair",
            Strategy::ThreeToRoyalFlush => "3 to a royal flush",
            Strategy::FourToFlush => "4 to a flush",
            Strategy::LowPair => "Low pair",
            Strategy::FourToOutsideStraight => "4 to an outside straight",
            Strategy::TwoSuitedHighCards => "2 suited high cards",
            Strategy::ThreeToStraightFlush => "3 to a straight flush",
            Strategy::TwoUnsuitedHighCards => "2 unsuited high cards",
            Strategy::SuitedTenWithFace => "Suited 10/J, 10/Q, or 10/K",
            Strategy::OneHighCard => "One high card",
            Strategy::DiscardEverything => "Discard everything",
        }
    }

    /// A short explanation of what to hold.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::RoyalFlush
            | Strategy::StraightFlush
            | Strategy::FullHouse
            | Strategy::Flush
            | Strategy::Straight => "Hold all cards",
            Strategy::FourOfAKind => "Hold all four cards",
            Strategy::FourToRoyalFlush => "Hold the four royal flush cards",
            Strategy::ThreeOfAKind => "Hold the three matching cards",
            Strategy::FourToStraightFlush => "Hold the four straight flush cards",
            Strategy::TwoPair => "Hold both pairs",
            Strategy::HighPair => "Hold the pair of Jacks or better",
            Strategy::ThreeToRoyalFlush => "Hold the three royal flush cards",
            Strategy::FourToFlush => "Hold the four suited cards",
            Strategy::LowPair => "Hold the pair",
            Strategy::FourToOutsideStraight => "Hold the four straight cards",
            Strategy::TwoSuitedHighCards => "Hold the two suited high cards",
            Strategy::ThreeToStraightFlush => "Hold the three straight flush cards",
            Strategy::TwoUnsuitedHighCards => "Hold the two high cards",
            Strategy::SuitedTenWithFace => "Hold the suited ten and face card",
            Strategy::OneHighCard => "Hold the high card",
            Strategy::DiscardEverything => "Draw 5 new cards",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A hold recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyResult {
    /// The positions to hold.
    pub hold_indices: Holds,
    /// The strategy that produced the holds.
    pub strategy: Strategy,
}

impl StrategyResult {
    /// Recommends the positions to hold for a hand.
    pub fn for_hand(hand: &Hand) -> StrategyResult {
        let (strategy, hold_indices) = RULES
            .iter()
            .find_map(|(strategy, rule)| {
                rule(hand)
                    .filter(|holds| !holds.is_empty())
                    .map(|holds| (*strategy, holds))
            })
            .unwrap_or((Strategy::DiscardEverything, Holds::NONE));

        log::trace!("{hand}: {strategy} {hold_indices:?}");

        StrategyResult {
            hold_indices,
            strategy,
        }
    }

    /// The strategy name.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// The strategy description.
    pub fn description(&self) -> &'static str {
        self.strategy.description()
    }
}

impl Serialize for StrategyResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("StrategyResult", 3)?;
        s.serialize_field("hold_indices", &self.hold_indices)?;
        s.serialize_field("strategy_name", self.strategy_name())?;
        s.serialize_field("description", self.description())?;
        s.end()
    }
}

/// Recommends the positions to hold for five cards.
pub fn recommend(cards: &[Card]) -> Result<StrategyResult> {
    let hand = Hand::new(cards)?;
    Ok(StrategyResult::for_hand(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        hand::{cards, holds},
    };
    use ahash::HashSet;
    use jacks_cards::Deck;

    fn check(s: &str, strategy: Strategy, positions: &[usize]) {
        let result = recommend(&cards(s)).unwrap();
        assert_eq!(result.strategy, strategy, "{s}");
        assert_eq!(result.hold_indices, holds(positions), "{s}");
    }

    #[test]
    fn recommend_invalid_size() {
        assert_eq!(recommend(&[]), Err(Error::InvalidHandSize(0)));
        assert_eq!(
            recommend(&cards("Ts Js Qs Ks")),
            Err(Error::InvalidHandSize(4))
        );
    }

    #[test]
    fn recommend_made_hands() {
        use Strategy::*;

        check("Th Jh Qh Kh Ah", RoyalFlush, &[0, 1, 2, 3, 4]);
        check("9s Ts Js Qs Ks", StraightFlush, &[0, 1, 2, 3, 4]);
        check("As 2s 3s 4s 5s", StraightFlush, &[0, 1, 2, 3, 4]);
        check("7c 7d 7h 7s Kd", FourOfAKind, &[0, 1, 2, 3]);
        check("3c 3d 3h 9s 9d", FullHouse, &[0, 1, 2, 3, 4]);
        check("2h 5h 8h Jh Kh", Flush, &[0, 1, 2, 3, 4]);
        check("5c 6d 7h 8s 9c", Straight, &[0, 1, 2, 3, 4]);
        check("Ac 2d 3h 4s 5c", Straight, &[0, 1, 2, 3, 4]);
        check("8c 8d 8h Ks 2d", ThreeOfAKind, &[0, 1, 2]);
        check("2c 2d 9s 9h Kd", TwoPair, &[0, 1, 2, 3]);
        check("Jc Jd 4s 7h 9d", HighPair, &[0, 1]);
        check("4c 4d 8s Jh 2c", LowPair, &[0, 1]);
    }

    #[test]
    fn recommend_draws() {
        use Strategy::*;

        check("Ts Js Qs Ks 2h", FourToRoyalFlush, &[0, 1, 2, 3]);
        check("5h 6h 7h 9h Kc", FourToStraightFlush, &[0, 1, 2, 3]);
        check("Th Jh Qh 4c 7s", ThreeToRoyalFlush, &[0, 1, 2]);
        check("2s 6s 9s Ks 4d", FourToFlush, &[0, 1, 2, 3]);
        check("5c 6d 7h 8s Kc", FourToOutsideStraight, &[0, 1, 2, 3]);
        check("Jh Qh 3c 6d 8s", TwoSuitedHighCards, &[0, 1]);
        check("5s 7s 8s Kd 2c", ThreeToStraightFlush, &[0, 1, 2]);
        check("Jc Qd 3h 6s 8c", TwoUnsuitedHighCards, &[0, 1]);
        check("Th Jh 3c 6d 8s", SuitedTenWithFace, &[0, 1]);
        check("3c Kh 6d Th 8s", SuitedTenWithFace, &[1, 3]);
        check("Kd 2c 5h 8s 9c", OneHighCard, &[0]);
        check("2c 4d 6s 8h 9d", DiscardEverything, &[]);
        check("2c 3d 4h 5s 9c", DiscardEverything, &[]);
    }

    #[test]
    fn recommend_priorities() {
        use Strategy::*;

        // A royal draw beats a made flush.
        check("Ts Js Qs Ks 2s", FourToRoyalFlush, &[0, 1, 2, 3]);
        // A straight flush draw beats a low pair.
        check("2d 3d 4d 9d 9c", FourToStraightFlush, &[0, 1, 2, 3]);
        // A high pair beats a royal draw of three.
        check("Qh Kh Ah Qc 3d", HighPair, &[0, 3]);
        // A flush draw beats a low pair.
        check("4s 4d 8s Js 2s", FourToFlush, &[0, 2, 3, 4]);
        // Broadway draws are not outside straights.
        check("Jc Qd Kh As 3c", TwoUnsuitedHighCards, &[0, 1]);
        // Two suited high cards beat three to a straight flush.
        check("Jh Qh 9h 2c 5d", TwoSuitedHighCards, &[0, 1]);
        // The two lowest unsuited high cards.
        check("Ah Kd Qc 3s 7h", TwoUnsuitedHighCards, &[1, 2]);
        // Duplicated cards.
        check("As As As As As", FourOfAKind, &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn recommend_is_pure() {
        let hand = cards("Th Jh Qh 4c 7s");
        assert_eq!(recommend(&hand), recommend(&hand));
    }

    #[test]
    fn strategy_order() {
        let strategies = Strategy::strategies().collect::<Vec<_>>();
        assert_eq!(strategies.len(), Strategy::COUNT);
        assert!(strategies.windows(2).all(|w| w[0] < w[1]));
        assert!(
            strategies
                .iter()
                .enumerate()
                .all(|(idx, s)| *s as usize == idx)
        );
    }

    #[test]
    fn strategy_labels() {
        let result = recommend(&cards("2c 2d 9s 9h Kd")).unwrap();
        assert_eq!(result.strategy_name(), "Two pair");
        assert_eq!(result.description(), "Hold both pairs");
        assert_eq!(Strategy::DiscardEverything.to_string(), "Discard everything");
        assert_eq!(
            Strategy::SuitedTenWithFace.name(),
            "Suited 10/J, 10/Q, or 10/K"
        );
    }

    #[test]
    fn strategy_result_serialize() {
        let result = recommend(&cards("Jc Jd 4s 7h 9d")).unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"hold_indices":[0,1],"strategy_name":"High pair","description":"Hold the pair of Jacks or better"}"#
        );

        let result = recommend(&cards("2c 4d 6s 8h 9d")).unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"hold_indices":[],"strategy_name":"Discard everything","description":"Draw 5 new cards"}"#
        );
    }

    #[test]
    fn recommend_all_hands() {
        let mut seen = HashSet::default();

        Deck::default().for_each(5, |cards| {
            let hand = Hand::new(cards).unwrap();
            let result = StrategyResult::for_hand(&hand);
            seen.insert(result.strategy);

            let held = result.hold_indices.len();
            match result.strategy {
                Strategy::DiscardEverything => assert_eq!(held, 0),
                Strategy::OneHighCard => assert_eq!(held, 1),
                Strategy::HighPair
                | Strategy::LowPair
                | Strategy::TwoSuitedHighCards
                | Strategy::TwoUnsuitedHighCards
                | Strategy::SuitedTenWithFace => assert_eq!(held, 2),
                Strategy::ThreeOfAKind
                | Strategy::ThreeToRoyalFlush
                | Strategy::ThreeToStraightFlush => assert_eq!(held, 3),
                Strategy::FourOfAKind
                | Strategy::FourToRoyalFlush
                | Strategy::FourToStraightFlush
                | Strategy::TwoPair
                | Strategy::FourToFlush
                | Strategy::FourToOutsideStraight => assert_eq!(held, 4),
                _ => assert_eq!(result.hold_indices, Holds::ALL),
            }

            // A hand with a high card is never discarded.
            if cards.iter().any(|c| c.rank().is_high()) {
                assert_ne!(result.strategy, Strategy::DiscardEverything);
            }
        });

        assert_eq!(seen.len(), Strategy::COUNT);
    }
}
