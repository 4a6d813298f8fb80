// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks video poker game state shared by the game clients.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game_state;
pub mod poker;
