// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.

/// Errors returned by the classifier and the hold advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input does not contain exactly five cards.
    #[error("a hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, Error>;
