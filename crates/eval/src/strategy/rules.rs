// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold rules.
//!
//! Each rule looks at a hand and returns the positions to hold if it applies.
//! Suit groups are visited from hearts to spades, cards within a group in
//! position order, and value sorts keep the position order for equal values.
use jacks_cards::{Card, Rank};

use super::Strategy;
use crate::hand::{Hand, Holds};

/// A hold rule.
pub(super) type Rule = fn(&Hand) -> Option<Holds>;

/// The hold rules in priority order.
pub(super) const RULES: [(Strategy, Rule); 20] = [
    (Strategy::RoyalFlush, royal_flush),
    (Strategy::StraightFlush, straight_flush),
    (Strategy::FourOfAKind, four_of_a_kind),
    (Strategy::FourToRoyalFlush, four_to_royal_flush),
    (Strategy::FullHouse, full_house),
    (Strategy::Flush, flush),
    (Strategy::Straight, straight),
    (Strategy::ThreeOfAKind, three_of_a_kind),
    (Strategy::FourToStraightFlush, four_to_straight_flush),
    (Strategy::TwoPair, two_pair),
    (Strategy::HighPair, high_pair),
    (Strategy::ThreeToRoyalFlush, three_to_royal_flush),
    (Strategy::FourToFlush, four_to_flush),
    (Strategy::LowPair, low_pair),
    (Strategy::FourToOutsideStraight, four_to_outside_straight),
    (Strategy::TwoSuitedHighCards, two_suited_high_cards),
    (Strategy::ThreeToStraightFlush, three_to_straight_flush),
    (Strategy::TwoUnsuitedHighCards, two_unsuited_high_cards),
    (Strategy::SuitedTenWithFace, suited_ten_with_face),
    (Strategy::OneHighCard, one_high_card),
];

fn is_high(card: Card) -> bool {
    card.rank().is_high()
}

fn is_royal(card: Card) -> bool {
    card.rank().is_royal()
}

/// The suit groups with at least `n` cards.
fn suited(hand: &Hand, n: usize) -> impl Iterator<Item = Holds> + '_ {
    hand.suit_groups()
        .map(|(_, holds)| holds)
        .filter(move |holds| holds.len() >= n)
}

/// The length of the longest run of consecutive values.
fn longest_run(hand: &Hand, positions: &[usize]) -> usize {
    let mut run = 1;
    let mut longest = 1;

    for w in positions.windows(2) {
        if hand.value(w[1]) == hand.value(w[0]) + 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    longest
}

/// The only pair in the hand if its rank tier matches `high`.
fn single_pair(hand: &Hand, high: bool) -> Option<Holds> {
    let mut pairs = hand.pairs();
    let (rank, holds) = pairs.next()?;
    if pairs.next().is_some() || rank.is_high() != high {
        return None;
    }

    Some(holds)
}

fn royal_flush(hand: &Hand) -> Option<Holds> {
    (hand.is_flush() && hand.is_straight() && hand.is_broadway()).then_some(Holds::ALL)
}

fn straight_flush(hand: &Hand) -> Option<Holds> {
    (hand.is_flush() && hand.is_straight() && !hand.is_broadway()).then_some(Holds::ALL)
}

fn four_of_a_kind(hand: &Hand) -> Option<Holds> {
    hand.rank_groups()
        .map(|(_, holds)| holds)
        .find(|holds| holds.len() >= 4)
}

fn four_to_royal_flush(hand: &Hand) -> Option<Holds> {
    suited(hand, 4)
        .map(|holds| hand.select(holds, is_royal))
        .find(|royals| royals.len() == 4)
}

fn full_house(hand: &Hand) -> Option<Holds> {
    (hand.rank_group_of(3).is_some() && hand.rank_group_of(2).is_some()).then_some(Holds::ALL)
}

fn flush(hand: &Hand) -> Option<Holds> {
    (hand.is_flush() && !hand.is_straight()).then_some(Holds::ALL)
}

fn straight(hand: &Hand) -> Option<Holds> {
    (hand.is_straight() && !hand.is_flush()).then_some(Holds::ALL)
}

fn three_of_a_kind(hand: &Hand) -> Option<Holds> {
    if hand.rank_group_of(2).is_some() {
        return None;
    }

    hand.rank_group_of(3)
}

fn four_to_straight_flush(hand: &Hand) -> Option<Holds> {
    suited(hand, 4).find_map(|holds| {
        hand.sorted_by_value(holds)
            .windows(4)
            .find(|w| longest_run(hand, w) >= 3)
            .map(|w| w.iter().copied().collect())
    })
}

fn two_pair(hand: &Hand) -> Option<Holds> {
    let pairs = hand.pairs().map(|(_, holds)| holds).collect::<Vec<_>>();
    (pairs.len() == 2).then(|| pairs[0] | pairs[1])
}

fn high_pair(hand: &Hand) -> Option<Holds> {
    single_pair(hand, true)
}

fn three_to_royal_flush(hand: &Hand) -> Option<Holds> {
    suited(hand, 3)
        .map(|holds| hand.select(holds, is_royal))
        .find(|royals| royals.len() >= 3)
        .map(|royals| royals.first(3))
}

fn four_to_flush(hand: &Hand) -> Option<Holds> {
    hand.suit_groups()
        .map(|(_, holds)| holds)
        .find(|holds| holds.len() == 4)
}

fn low_pair(hand: &Hand) -> Option<Holds> {
    single_pair(hand, false)
}

fn four_to_outside_straight(hand: &Hand) -> Option<Holds> {
    hand.sorted_by_value(Holds::ALL)
        .windows(4)
        .find(|w| {
            longest_run(hand, w) == 4 && hand.value(w[0]) > 2 && hand.value(w[3]) < 14
        })
        .map(|w| w.iter().copied().collect())
}

fn two_suited_high_cards(hand: &Hand) -> Option<Holds> {
    suited(hand, 2)
        .map(|holds| hand.select(holds, is_high))
        .find(|highs| highs.len() >= 2)
        .map(|highs| highs.first(2))
}

fn three_to_straight_flush(hand: &Hand) -> Option<Holds> {
    suited(hand, 3).find_map(|holds| {
        hand.sorted_by_value(holds)
            .windows(3)
            .find(|w| hand.value(w[2]) - hand.value(w[0]) <= 4)
            .map(|w| w.iter().copied().collect())
    })
}

fn two_unsuited_high_cards(hand: &Hand) -> Option<Holds> {
    let highs = hand.select(Holds::ALL, is_high);
    if highs.len() < 2 {
        return None;
    }

    // Suited high cards are handled by a stronger rule.
    if suited(hand, 2).any(|holds| hand.select(holds, is_high).len() >= 2) {
        return None;
    }

    // With more than two, hold the two lowest.
    let lowest = hand.sorted_by_value(highs);
    Some(lowest.into_iter().take(2).collect())
}

fn suited_ten_with_face(hand: &Hand) -> Option<Holds> {
    suited(hand, 2).find_map(|holds| {
        let ten = hand.select(holds, |c| c.rank() == Rank::Ten).first(1);
        let face = hand.select(holds, |c| c.rank().is_face()).first(1);
        (!ten.is_empty() && !face.is_empty()).then(|| ten | face)
    })
}

fn one_high_card(hand: &Hand) -> Option<Holds> {
    Some(hand.select(Holds::ALL, is_high).first(1)).filter(|holds| !holds.is_empty())
}
