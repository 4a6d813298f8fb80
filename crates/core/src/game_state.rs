// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker game state.
//!
//! A game moves through three phases: the player sets a bet, the dealt hand
//! waits for the player holds, and after the draw the result is shown until
//! the next hand is dealt.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::poker::{Card, Credits, Deck, HandResult, Holds, PayTable, StrategyResult};

/// The number of cards in a hand.
const HAND_SIZE: usize = 5;

/// The game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a bet and a deal.
    Betting,
    /// Waiting for the player holds and a draw.
    Holding,
    /// The hand has been paid.
    Result,
}

/// Game errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// The action is not allowed in this phase.
    #[error("{action} not allowed in the {phase:?} phase")]
    WrongPhase {
        /// The requested action.
        action: &'static str,
        /// The current phase.
        phase: Phase,
    },
    /// Not enough credits.
    #[error("insufficient credits {credits} for bet {bet}")]
    InsufficientCredits {
        /// The available credits.
        credits: Credits,
        /// The requested bet.
        bet: u32,
    },
    /// The bet is out of range.
    #[error("invalid bet {0}")]
    InvalidBet(u32),
    /// The hand position is out of range.
    #[error("invalid position {0}")]
    InvalidPosition(usize),
    /// Evaluation error.
    #[error(transparent)]
    Eval(#[from] jacks_eval::Error),
}

/// Game result type.
pub type Result<T> = std::result::Result<T, GameError>;

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The initial credits.
    pub credits: u32,
    /// The pay table used to pay the final hand.
    pub pay_table: PayTable,
    /// A seed for a reproducible shuffle.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credits: 100,
            pay_table: PayTable::default(),
            seed: None,
        }
    }
}

/// A single player video poker game.
#[derive(Debug)]
pub struct GameState {
    config: Config,
    rng: StdRng,
    deck: Deck,
    phase: Phase,
    credits: Credits,
    bet: u32,
    cards: Vec<Card>,
    holds: Holds,
    player_holds: Option<Holds>,
    advice: Option<StrategyResult>,
    result: Option<HandResult>,
    last_win: Credits,
}

impl GameState {
    /// Creates a new game.
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let deck = Deck::new_and_shuffled(&mut rng);
        let credits = Credits::new(config.credits);

        Self {
            config,
            rng,
            deck,
            phase: Phase::Betting,
            credits,
            bet: 1,
            cards: Vec::default(),
            holds: Holds::NONE,
            player_holds: None,
            advice: None,
            result: None,
            last_win: Credits::ZERO,
        }
    }

    /// The game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player credits.
    pub fn credits(&self) -> Credits {
        self.credits
    }

    /// The current bet in coins.
    pub fn bet(&self) -> u32 {
        self.bet
    }

    /// The cards in hand, empty before the first deal.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The positions currently held.
    pub fn holds(&self) -> Holds {
        self.holds
    }

    /// The advisor recommendation for the dealt hand.
    pub fn advice(&self) -> Option<&StrategyResult> {
        self.advice.as_ref()
    }

    /// The final hand result.
    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    /// The last hand payout.
    pub fn last_win(&self) -> Credits {
        self.last_win
    }

    /// The game pay table.
    pub fn pay_table(&self) -> &PayTable {
        &self.config.pay_table
    }

    /// The number of cards left in the deck.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// Sets the bet.
    pub fn set_bet(&mut self, bet: u32) -> Result<()> {
        self.check_phase("bet", &[Phase::Betting, Phase::Result])?;

        if !(1..=self.config.pay_table.max_coins).contains(&bet) {
            return Err(GameError::InvalidBet(bet));
        }

        self.check_credits(bet)?;
        self.bet = bet;
        Ok(())
    }

    /// Increments the bet by one coin, wrapping to one after the max coins.
    pub fn bet_one(&mut self) -> Result<()> {
        let bet = if self.bet < self.config.pay_table.max_coins {
            self.bet + 1
        } else {
            1
        };

        self.set_bet(bet)
    }

    /// Sets the max bet and deals if no hand is in progress.
    pub fn bet_max(&mut self) -> Result<()> {
        self.set_bet(self.config.pay_table.max_coins)?;

        if self.phase == Phase::Betting {
            self.deal()?;
        }

        Ok(())
    }

    /// Pays the bet and deals a new hand.
    pub fn deal(&mut self) -> Result<()> {
        self.check_phase("deal", &[Phase::Betting, Phase::Result])?;
        self.check_credits(self.bet)?;

        self.credits -= Credits::new(self.bet);
        self.holds = Holds::NONE;
        self.player_holds = None;
        self.result = None;
        self.last_win = Credits::ZERO;

        if self.deck.count() < HAND_SIZE {
            debug!("Deck has {} cards, reshuffling", self.deck.count());
            self.deck = Deck::new_and_shuffled(&mut self.rng);
        }

        self.cards = self.deck.deal_n(HAND_SIZE);
        let advice = jacks_eval::recommend(&self.cards)?;
        debug!(
            "Dealt {:?} advice {} {:?}",
            self.cards, advice.strategy, advice.hold_indices
        );

        self.advice = Some(advice);
        self.phase = Phase::Holding;
        Ok(())
    }

    /// Toggles the hold of a card.
    pub fn toggle_hold(&mut self, pos: usize) -> Result<()> {
        self.check_hold(pos)?;

        if self.holds.contains(pos) {
            self.holds.remove(pos);
        } else {
            self.holds.insert(pos);
        }

        Ok(())
    }

    /// Holds a card.
    pub fn hold(&mut self, pos: usize) -> Result<()> {
        self.check_hold(pos)?;
        self.holds.insert(pos);
        Ok(())
    }

    /// Releases a held card.
    pub fn unhold(&mut self, pos: usize) -> Result<()> {
        self.check_hold(pos)?;
        self.holds.remove(pos);
        Ok(())
    }

    /// Replaces the cards that are not held and pays the final hand.
    pub fn draw(&mut self) -> Result<()> {
        self.check_phase("draw", &[Phase::Holding])?;

        self.player_holds = Some(self.holds);
        let replace = (0..HAND_SIZE)
            .filter(|&pos| !self.holds.contains(pos))
            .collect::<Vec<_>>();

        if self.deck.count() < replace.len() {
            debug!("Deck has {} cards, rebuilding", self.deck.count());
            self.deck = Deck::new_and_shuffled(&mut self.rng);
            for card in &self.cards {
                self.deck.remove(*card);
            }
        }

        let drawn = self.deck.deal_n(replace.len());
        for (pos, card) in replace.into_iter().zip(drawn) {
            self.cards[pos] = card;
        }

        let result = self.config.pay_table.evaluate(&self.cards, self.bet)?;
        self.last_win = Credits::new(result.payout);
        self.credits += self.last_win;

        info!(
            "Hand {:?} {} pays {} credits {}",
            self.cards, result.hand_type, result.payout, self.credits
        );

        self.result = Some(result);
        self.phase = Phase::Result;
        Ok(())
    }

    /// Starts the next hand after a result.
    ///
    /// The game restarts when the player has no credits left, deals with the
    /// same bet when the credits cover it, and goes back to betting otherwise.
    pub fn new_hand(&mut self) -> Result<()> {
        self.check_phase("new hand", &[Phase::Result])?;

        if self.credits == Credits::ZERO {
            info!("No credits left, restarting");
            self.bet = 1;
            self.reset_credits();
            Ok(())
        } else if self.credits.amount() >= self.bet {
            self.deal()
        } else {
            self.reset_hand();
            self.phase = Phase::Betting;
            Ok(())
        }
    }

    /// Checks if the player held the advised cards.
    pub fn is_optimal_play(&self) -> bool {
        match (self.player_holds, &self.advice) {
            (Some(holds), Some(advice)) => holds == advice.hold_indices,
            _ => false,
        }
    }

    /// Restores the initial credits and goes back to betting.
    pub fn reset_credits(&mut self) {
        self.credits = Credits::new(self.config.credits);
        self.phase = Phase::Betting;
        self.reset_hand();
    }

    fn reset_hand(&mut self) {
        self.cards.clear();
        self.holds = Holds::NONE;
        self.player_holds = None;
        self.advice = None;
        self.result = None;
        self.last_win = Credits::ZERO;
        self.deck = Deck::new_and_shuffled(&mut self.rng);
    }

    fn check_phase(&self, action: &'static str, phases: &[Phase]) -> Result<()> {
        if phases.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn check_credits(&self, bet: u32) -> Result<()> {
        if self.credits.amount() >= bet {
            Ok(())
        } else {
            Err(GameError::InsufficientCredits {
                credits: self.credits,
                bet,
            })
        }
    }

    fn check_hold(&self, pos: usize) -> Result<()> {
        self.check_phase("hold", &[Phase::Holding])?;

        if pos >= HAND_SIZE {
            return Err(GameError::InvalidPosition(pos));
        }

        Ok(())
    }
}
