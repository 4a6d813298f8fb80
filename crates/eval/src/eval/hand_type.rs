// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and their predicates.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hand::{Hand, Holds};

/// The hand category, ordered from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandType {
    /// No paying category.
    HighCard = 0,
    /// A single pair of Jacks, Queens, Kings or Aces.
    JacksOrBetter,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive values.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight and a flush.
    StraightFlush,
    /// Ten to Ace straight flush.
    RoyalFlush,
}

impl HandType {
    /// The number of hand types.
    pub const COUNT: usize = 10;

    /// Returns all hand types from the highest to the lowest.
    pub fn types() -> impl DoubleEndedIterator<Item = HandType> {
        use HandType::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            JacksOrBetter,
            HighCard,
        ]
        .into_iter()
    }

    /// The display label.
    pub fn label(&self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::JacksOrBetter => "Jacks or Better",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
            HandType::RoyalFlush => "Royal Flush",
        }
    }

    /// Checks if this type is made of same rank groups, only these types
    /// report the winning cards.
    pub fn is_grouping(&self) -> bool {
        matches!(
            self,
            HandType::JacksOrBetter
                | HandType::TwoPair
                | HandType::ThreeOfAKind
                | HandType::FullHouse
                | HandType::FourOfAKind
        )
    }

    /// Classifies a hand, returns the hand type and the positions of the
    /// scoring cards.
    ///
    /// Predicates are checked from the highest to the lowest type and the first
    /// match wins, a straight flush also matches the flush and the straight
    /// predicates.
    pub fn classify(hand: &Hand) -> (HandType, Holds) {
        PREDICATES
            .iter()
            .find_map(|(hand_type, pred)| pred(hand).map(|holds| (*hand_type, holds)))
            .unwrap_or((HandType::HighCard, Holds::NONE))
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

type Predicate = fn(&Hand) -> Option<Holds>;

/// The paying types predicates in priority order.
const PREDICATES: [(HandType, Predicate); 9] = [
    (HandType::RoyalFlush, royal_flush),
    (HandType::StraightFlush, straight_flush),
    (HandType::FourOfAKind, four_of_a_kind),
    (HandType::FullHouse, full_house),
    (HandType::Flush, flush),
    (HandType::Straight, straight),
    (HandType::ThreeOfAKind, three_of_a_kind),
    (HandType::TwoPair, two_pair),
    (HandType::JacksOrBetter, jacks_or_better),
];

fn royal_flush(hand: &Hand) -> Option<Holds> {
    (hand.is_flush() && hand.is_straight() && hand.is_broadway()).then_some(Holds::ALL)
}

fn straight_flush(hand: &Hand) -> Option<Holds> {
    (hand.is_flush() && hand.is_straight()).then_some(Holds::ALL)
}

fn four_of_a_kind(hand: &Hand) -> Option<Holds> {
    // A five cards group is only possible with duplicated cards.
    hand.rank_groups()
        .map(|(_, holds)| holds)
        .find(|holds| holds.len() >= 4)
}

fn full_house(hand: &Hand) -> Option<Holds> {
    let trips = hand.rank_group_of(3)?;
    let pair = hand.rank_group_of(2)?;
    Some(trips | pair)
}

fn flush(hand: &Hand) -> Option<Holds> {
    hand.is_flush().then_some(Holds::ALL)
}

fn straight(hand: &Hand) -> Option<Holds> {
    hand.is_straight().then_some(Holds::ALL)
}

fn three_of_a_kind(hand: &Hand) -> Option<Holds> {
    hand.rank_group_of(3)
}

fn two_pair(hand: &Hand) -> Option<Holds> {
    let mut pairs = hand.pairs();
    let (_, first) = pairs.next()?;
    let (_, second) = pairs.next()?;
    Some(first | second)
}

fn jacks_or_better(hand: &Hand) -> Option<Holds> {
    hand.pairs()
        .find(|(rank, _)| rank.is_high())
        .map(|(_, holds)| holds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{cards, holds};
    use jacks_cards::Deck;

    fn classify(s: &str) -> (HandType, Holds) {
        HandType::classify(&Hand::new(&cards(s)).unwrap())
    }

    #[test]
    fn hand_type_order() {
        let types = HandType::types().collect::<Vec<_>>();
        assert_eq!(types.len(), HandType::COUNT);
        assert!(types.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(PREDICATES.len(), HandType::COUNT - 1);
        assert!(PREDICATES.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn classify_made_hands() {
        use HandType::*;

        assert_eq!(classify("Th Jh Qh Kh Ah"), (RoyalFlush, Holds::ALL));
        assert_eq!(classify("Ah Kh Th Qh Jh"), (RoyalFlush, Holds::ALL));
        assert_eq!(classify("9s Ts Js Qs Ks"), (StraightFlush, Holds::ALL));
        assert_eq!(classify("7c 7d Kd 7h 7s"), (FourOfAKind, holds(&[0, 1, 3, 4])));
        assert_eq!(classify("3c 9d 3h 9s 3d"), (FullHouse, Holds::ALL));
        assert_eq!(classify("2h 5h 8h Jh Kh"), (Flush, Holds::ALL));
        assert_eq!(classify("5c 6d 7h 8s 9c"), (Straight, Holds::ALL));
        assert_eq!(classify("Td Jc Qh Ks Ah"), (Straight, Holds::ALL));
        assert_eq!(classify("8c Ks 8d 2d 8h"), (ThreeOfAKind, holds(&[0, 2, 4])));
        assert_eq!(classify("2c Kd 9s 2d 9h"), (TwoPair, holds(&[0, 2, 3, 4])));
        assert_eq!(classify("4s Jc 7h Jd 9d"), (JacksOrBetter, holds(&[1, 3])));
        assert_eq!(classify("As 4s 7h Ad 9d"), (JacksOrBetter, holds(&[0, 3])));
    }

    #[test]
    fn classify_high_card() {
        assert_eq!(classify("2c 4d 6s 8h 9d"), (HandType::HighCard, Holds::NONE));
        assert_eq!(classify("Tc Td 6s 8h 9d"), (HandType::HighCard, Holds::NONE));
        assert_eq!(classify("Qs Ks As 2h 3d"), (HandType::HighCard, Holds::NONE));
    }

    #[test]
    fn classify_wheel() {
        assert_eq!(classify("As 2s 3h 4d 5c").0, HandType::Straight);
        assert_eq!(classify("5c 4c 3c 2c Ac").0, HandType::StraightFlush);
        assert_eq!(classify("As 2s 3h 4d 6c").0, HandType::HighCard);
    }

    #[test]
    fn classify_duplicated_cards() {
        assert_eq!(classify("As As As As As"), (HandType::FourOfAKind, Holds::ALL));
        assert_eq!(classify("Kd Kd 4c 7s 9h"), (HandType::JacksOrBetter, holds(&[0, 1])));
        assert_eq!(classify("5h 5h 5h 5h 9h").0, HandType::FourOfAKind);
    }

    #[test]
    fn classify_picks_highest_matching_predicate() {
        Deck::default().for_each(5, |cards| {
            let hand = Hand::new(cards).unwrap();

            let best = PREDICATES
                .iter()
                .filter(|(_, pred)| pred(&hand).is_some())
                .map(|(hand_type, _)| *hand_type)
                .max()
                .unwrap_or(HandType::HighCard);
            assert_eq!(HandType::classify(&hand).0, best);

            assert!(!(four_of_a_kind(&hand).is_some() && full_house(&hand).is_some()));
        });
    }
}
