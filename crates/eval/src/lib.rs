// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better video poker evaluator.
//!
//! This crate has two independent views over a five cards hand: the
//! [classifier](evaluate) that finds the best paying [HandType] and its payout,
//! and the [advisor](recommend) that tells which positions to hold before the
//! draw. Both are pure functions that fail only when the hand doesn't have
//! exactly five cards:
//!
//! ```
//! # use jacks_eval::*;
//! let cards = "2c 2d 9s 9h Kd"
//!     .split_whitespace()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let result = evaluate(&cards, 1).unwrap();
//! assert_eq!(result.hand_type, HandType::TwoPair);
//! assert_eq!(result.payout, 2);
//!
//! let advice = recommend(&cards).unwrap();
//! assert_eq!(advice.strategy, Strategy::TwoPair);
//! assert_eq!(advice.hold_indices.to_mask(), [true, true, true, true, false]);
//!
//! assert!(evaluate(&cards[..4], 1).is_err());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::{Error, Result};

pub mod hand;
pub use hand::{Hand, Holds};

pub mod eval;
pub use eval::{HandResult, HandType, PayTable, evaluate};

pub mod strategy;
pub use strategy::{Strategy, StrategyResult, recommend};

// Reexport cards types.
pub use jacks_cards::{Card, Deck, Rank, Suit};
