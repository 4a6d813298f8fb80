// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io;

use jacks_core::{
    game_state::{GameState, Phase},
    poker::{Card, HandResult, HandType},
};

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Hold(usize),
    BetOne,
    BetMax,
    DealDraw,
    ToggleHints,
    ResetCredits,
    Quit,
}

impl Command {
    fn from_key(code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Char(c @ '1'..='5') => Some(Command::Hold(c as usize - '1' as usize)),
            KeyCode::Char('b') => Some(Command::BetOne),
            KeyCode::Char('m') => Some(Command::BetMax),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Command::DealDraw),
            KeyCode::Char('h') => Some(Command::ToggleHints),
            KeyCode::Char('r') => Some(Command::ResetCredits),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Runs the terminal loop.
pub fn run(mut state: GameState, hints: bool) -> Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = game_loop(&mut stdout, &mut state, hints);

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

fn game_loop(w: &mut impl io::Write, state: &mut GameState, mut hints: bool) -> Result<()> {
    let mut status = String::new();

    loop {
        print_game(w, state, hints, &status)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(cmd) = Command::from_key(key.code) else {
            continue;
        };

        let res = match cmd {
            Command::Hold(pos) => state.toggle_hold(pos),
            Command::BetOne => state.bet_one(),
            Command::BetMax => state.bet_max(),
            Command::DealDraw => match state.phase() {
                Phase::Betting => state.deal(),
                Phase::Holding => state.draw(),
                Phase::Result => state.new_hand(),
            },
            Command::ToggleHints => {
                hints = !hints;
                Ok(())
            }
            Command::ResetCredits => {
                state.reset_credits();
                Ok(())
            }
            Command::Quit => break,
        };

        status = match res {
            Ok(()) => String::new(),
            Err(e) => {
                log::debug!("{cmd:?}: {e}");
                e.to_string()
            }
        };
    }

    Ok(())
}

fn print_game(w: &mut impl io::Write, state: &GameState, hints: bool, status: &str) -> Result<()> {
    queue!(w, Clear(ClearType::All))?;

    print_text(w, 0, "JACKS OR BETTER".bold().yellow())?;

    // The pay table with the winning row highlighted.
    let winner = state.result().map(|r| r.hand_type);
    for (row, hand_type) in (2..).zip(HandType::types().filter(|t| *t != HandType::HighCard)) {
        let payout = state.pay_table().payout(hand_type, state.bet());
        let text = format!("{:<18}{:>6}", hand_type.label(), payout);
        let text = if winner == Some(hand_type) {
            text.as_str().black().on_yellow()
        } else {
            text.as_str().dark_green()
        };
        print_text(w, row, text)?;
    }

    print_cards(w, 12, state, hints)?;

    let message = match state.phase() {
        Phase::Betting => "Place your bet and deal".to_string(),
        Phase::Holding => "Select the cards to hold and draw".to_string(),
        Phase::Result => result_message(state.result()),
    };
    print_text(w, 16, message.as_str().white())?;

    if hints {
        if let Some(advice) = state.advice() {
            let hint = match state.phase() {
                Phase::Result if state.is_optimal_play() => "Optimal play!".to_string(),
                Phase::Result => format!("Optimal was {}", advice.strategy_name()),
                _ => format!("{}: {}", advice.strategy_name(), advice.description()),
            };
            print_text(w, 17, hint.as_str().cyan())?;
        }
    }

    let credits = format!("CREDITS {:<10} BET {}", state.credits(), state.bet());
    print_text(w, 19, credits.as_str().yellow())?;
    print_text(w, 20, status.red())?;
    print_text(
        w,
        22,
        "1-5 hold  b bet one  m bet max  space deal/draw  h hints  r reset  q quit".dark_grey(),
    )?;

    w.flush()?;

    Ok(())
}

fn result_message(result: Option<&HandResult>) -> String {
    match result {
        Some(r) if r.payout > 0 => format!("{}, WIN {}", r.hand_type, r.payout),
        _ => "No win".to_string(),
    }
}

fn print_cards(w: &mut impl io::Write, row: u16, state: &GameState, hints: bool) -> Result<()> {
    if state.cards().is_empty() {
        for pos in 0..5 {
            queue!(
                w,
                cursor::MoveTo(pos * 6, row),
                style::PrintStyledContent("▒▒▒".dark_blue())
            )?;
        }

        return Ok(());
    }

    let advised = state
        .advice()
        .filter(|_| hints && state.phase() == Phase::Holding)
        .map(|a| a.hold_indices);

    for (pos, card) in state.cards().iter().enumerate() {
        let col = pos as u16 * 6;
        queue!(
            w,
            cursor::MoveTo(col, row),
            style::PrintStyledContent(card_text(*card))
        )?;

        if state.holds().contains(pos) {
            queue!(
                w,
                cursor::MoveTo(col, row + 1),
                style::PrintStyledContent("HELD".yellow())
            )?;
        }

        let label = format!("{}", pos + 1);
        let label = if advised.is_some_and(|h| h.contains(pos)) {
            label.as_str().black().on_cyan()
        } else {
            label.as_str().dark_grey()
        };
        queue!(
            w,
            cursor::MoveTo(col, row + 2),
            style::PrintStyledContent(label)
        )?;
    }

    Ok(())
}

fn card_text(card: Card) -> style::StyledContent<String> {
    let text = card.to_string();
    if card.suit().is_red() {
        text.red()
    } else {
        text.white()
    }
}

fn print_text<D: std::fmt::Display>(
    w: &mut impl io::Write,
    row: u16,
    text: style::StyledContent<D>,
) -> Result<()> {
    queue!(w, cursor::MoveTo(0, row), style::PrintStyledContent(text))?;
    Ok(())
}
