// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a video poker game.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

pub use jacks_cards::{Card, Deck, Rank, Suit};
pub use jacks_eval::{
    Error, HandResult, HandType, Holds, PayTable, Strategy, StrategyResult, evaluate, recommend,
};

/// Credits amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Credits(u32);

impl Credits {
    /// The zero credits.
    pub const ZERO: Credits = Credits(0);

    /// Creates credits with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Credits {
    fn from(val: u32) -> Self {
        Credits(val)
    }
}

impl From<Credits> for u32 {
    fn from(val: Credits) -> Self {
        val.0
    }
}

impl ops::Add for Credits {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Credits(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Credits {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub for Credits {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Credits {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_groups(f, self.0)
    }
}

/// Writes an amount with comma separated thousands groups.
fn write_groups(f: &mut fmt::Formatter<'_>, amount: u32) -> fmt::Result {
    if amount >= 1_000 {
        write_groups(f, amount / 1_000)?;
        write!(f, ",{:03}", amount % 1_000)
    } else {
        write!(f, "{amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_formatting() {
        assert_eq!(Credits(0).to_string(), "0");
        assert_eq!(Credits(100).to_string(), "100");
        assert_eq!(Credits(4_000).to_string(), "4,000");
        assert_eq!(Credits(12_045).to_string(), "12,045");
        assert_eq!(Credits(1_000_000).to_string(), "1,000,000");
        assert_eq!(Credits(1_000_001).to_string(), "1,000,001");
        assert_eq!(Credits(2_000_000_000).to_string(), "2,000,000,000");
        assert_eq!(Credits(4_294_967_295).to_string(), "4,294,967,295");
    }

    #[test]
    fn credits_saturate() {
        let mut credits = Credits::new(3);
        credits -= Credits::new(5);
        assert_eq!(credits, Credits::ZERO);
        assert_eq!(Credits::new(u32::MAX) + Credits::new(1), Credits::new(u32::MAX));
        assert!(Credits::new(5) >= Credits::from(5));
    }
}
