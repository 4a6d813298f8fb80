// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand view.
//!
//! A [Hand] keeps the cards in the order they were dealt together with their
//! rank and suit groupings. Groupings are stored as [Holds] position sets in
//! arrays indexed by rank and suit ordinal, so that iterating groups always
//! visits ranks from deuce to ace and suits from hearts to spades.
use serde::Serialize;
use std::{fmt, ops};

use jacks_cards::{Card, Rank, Suit};

use crate::{Error, Result};

/// A set of hand positions in `0..5`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Vec<usize>")]
pub struct Holds(u8);

impl Holds {
    /// The empty set.
    pub const NONE: Holds = Holds(0);

    /// All five positions.
    pub const ALL: Holds = Holds(0x1f);

    /// Adds a position to the set, positions outside `0..5` are ignored.
    pub fn insert(&mut self, pos: usize) {
        if pos < Hand::SIZE {
            self.0 |= 1 << pos;
        }
    }

    /// Removes a position from the set.
    pub fn remove(&mut self, pos: usize) {
        if pos < Hand::SIZE {
            self.0 &= !(1 << pos);
        }
    }

    /// Checks if a position is in the set.
    pub fn contains(self, pos: usize) -> bool {
        pos < Hand::SIZE && self.0 & (1 << pos) != 0
    }

    /// The number of positions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the positions in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..Hand::SIZE).filter(move |&pos| self.contains(pos))
    }

    /// Keeps the first `n` positions.
    pub fn first(self, n: usize) -> Holds {
        self.iter().take(n).collect()
    }

    /// The set as a per position mask.
    pub fn to_mask(self) -> [bool; Hand::SIZE] {
        std::array::from_fn(|pos| self.contains(pos))
    }
}

impl FromIterator<usize> for Holds {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut holds = Holds::NONE;
        iter.into_iter().for_each(|pos| holds.insert(pos));
        holds
    }
}

impl From<[bool; Hand::SIZE]> for Holds {
    fn from(mask: [bool; Hand::SIZE]) -> Self {
        (0..Hand::SIZE).filter(|&pos| mask[pos]).collect()
    }
}

impl From<Holds> for Vec<usize> {
    fn from(holds: Holds) -> Self {
        holds.iter().collect()
    }
}

impl ops::BitOr for Holds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Holds(self.0 | rhs.0)
    }
}

impl fmt::Debug for Holds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An immutable five cards hand.
#[derive(Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
    ranks: [Holds; Rank::COUNT],
    suits: [Holds; Suit::COUNT],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, fails if `cards` doesn't contain exactly five cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| Error::InvalidHandSize(cards.len()))?;

        let mut ranks = [Holds::NONE; Rank::COUNT];
        let mut suits = [Holds::NONE; Suit::COUNT];
        for (pos, card) in cards.iter().enumerate() {
            ranks[card.rank() as usize].insert(pos);
            suits[card.suit() as usize].insert(pos);
        }

        Ok(Self {
            cards,
            ranks,
            suits,
        })
    }

    /// The hand cards in dealing order.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// The card at a position.
    ///
    /// Panics if `pos` is not in `0..5`.
    #[inline]
    pub fn card(&self, pos: usize) -> Card {
        self.cards[pos]
    }

    /// The value of the card at a position.
    #[inline]
    pub fn value(&self, pos: usize) -> u8 {
        self.cards[pos].value()
    }

    /// The cards at the given positions.
    pub fn cards_at(&self, holds: Holds) -> Vec<Card> {
        holds.iter().map(|pos| self.cards[pos]).collect()
    }

    /// Non empty rank groups from deuce to ace.
    pub fn rank_groups(&self) -> impl Iterator<Item = (Rank, Holds)> + '_ {
        Rank::ranks()
            .map(|rank| (rank, self.ranks[rank as usize]))
            .filter(|(_, holds)| !holds.is_empty())
    }

    /// Non empty suit groups from hearts to spades.
    pub fn suit_groups(&self) -> impl Iterator<Item = (Suit, Holds)> + '_ {
        Suit::suits()
            .map(|suit| (suit, self.suits[suit as usize]))
            .filter(|(_, holds)| !holds.is_empty())
    }

    /// The first rank group with `n` cards.
    pub fn rank_group_of(&self, n: usize) -> Option<Holds> {
        self.rank_groups()
            .map(|(_, holds)| holds)
            .find(|holds| holds.len() == n)
    }

    /// The rank groups with exactly two cards.
    pub fn pairs(&self) -> impl Iterator<Item = (Rank, Holds)> + '_ {
        self.rank_groups().filter(|(_, holds)| holds.len() == 2)
    }

    /// The positions in `holds` whose card satisfies `pred`.
    pub fn select<P>(&self, holds: Holds, pred: P) -> Holds
    where
        P: Fn(Card) -> bool,
    {
        holds.iter().filter(|&pos| pred(self.cards[pos])).collect()
    }

    /// The positions in `holds` sorted by card value, equal values keep their
    /// position order.
    pub fn sorted_by_value(&self, holds: Holds) -> Vec<usize> {
        let mut positions = holds.iter().collect::<Vec<_>>();
        positions.sort_by_key(|&pos| self.value(pos));
        positions
    }

    /// Checks if all the cards have the same suit.
    pub fn is_flush(&self) -> bool {
        self.suits.iter().any(|holds| holds.len() == Hand::SIZE)
    }

    /// Checks if the cards values are five consecutive values, an ace counts
    /// low only in the A-2-3-4-5 wheel.
    pub fn is_straight(&self) -> bool {
        let mut values = self.cards.map(|c| c.value());
        values.sort_unstable();

        values == [2, 3, 4, 5, 14] || values.windows(2).all(|w| w[1] == w[0] + 1)
    }

    /// Checks if the ranks are exactly Ten, Jack, Queen, King and Ace.
    pub fn is_broadway(&self) -> bool {
        [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .iter()
            .all(|&rank| self.ranks[rank as usize].len() == 1)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = Error;

    fn try_from(cards: &[Card]) -> Result<Self> {
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}

/// Parses a whitespace separated list of cards, used by tests.
#[cfg(test)]
pub(crate) fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| c.parse().unwrap())
        .collect()
}

/// Builds a positions set, used by tests.
#[cfg(test)]
pub(crate) fn holds(positions: &[usize]) -> Holds {
    positions.iter().copied().collect()
}
