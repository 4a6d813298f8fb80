// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks video poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};

use jacks_core::{
    game_state::{Config, GameState},
    poker::{Card, PayTable},
};

pub mod terminal;

#[derive(Debug, Parser)]
#[clap(name = "jacks", about = "Jacks or Better video poker")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays a game in the terminal.
    Play {
        /// The initial credits.
        #[clap(long, short, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        credits: u32,
        /// A seed for a reproducible game.
        #[clap(long, short)]
        seed: Option<u64>,
        /// A JSON pay table file.
        #[clap(long, short)]
        pay_table: Option<PathBuf>,
        /// Shows the hold advice.
        #[clap(long)]
        hints: bool,
    },
    /// Evaluates a hand and recommends the holds.
    Eval {
        /// The bet in coins.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        bet: u32,
        /// A JSON pay table file.
        #[clap(long, short)]
        pay_table: Option<PathBuf>,
        /// Prints the results as JSON.
        #[clap(long)]
        json: bool,
        /// The cards, for example: Th Jh Qh Kh Ah.
        #[clap(required = true)]
        cards: Vec<Card>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log only warnings while the terminal owns the screen.
    let level = match cli.command {
        Command::Play { .. } => log::LevelFilter::Warn,
        Command::Eval { .. } => log::LevelFilter::Info,
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Play {
            credits,
            seed,
            pay_table,
            hints,
        } => {
            let config = Config {
                credits,
                pay_table: load_pay_table(pay_table)?,
                seed,
            };

            terminal::run(GameState::new(config), hints)
        }
        Command::Eval {
            bet,
            pay_table,
            json,
            cards,
        } => eval(&cards, bet, &load_pay_table(pay_table)?, json),
    }
}

fn load_pay_table(path: Option<PathBuf>) -> Result<PayTable> {
    let Some(path) = path else {
        return Ok(PayTable::default());
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read pay table {}", path.display()))?;
    let table = serde_json::from_str(&text)
        .with_context(|| format!("Invalid pay table {}", path.display()))?;

    log::info!("Loaded pay table {}", path.display());
    Ok(table)
}

fn eval(cards: &[Card], bet: u32, table: &PayTable, json: bool) -> Result<()> {
    if json {
        let value = eval_json(cards, bet, table)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let result = table.evaluate(cards, bet)?;
    let advice = jacks_core::poker::recommend(cards)?;

    let hand = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    println!("Hand:    {}", hand.join(" "));
    println!("Result:  {} pays {}", result.hand_type, result.payout);

    if let Some(winning) = &result.winning_cards {
        let winning = winning.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        println!("Winning: {}", winning.join(" "));
    }

    let holds = advice
        .hold_indices
        .iter()
        .map(|pos| hand[pos].as_str())
        .collect::<Vec<_>>();
    println!(
        "Advice:  {} ({}) {}",
        advice.strategy_name(),
        advice.description(),
        holds.join(" ")
    );

    Ok(())
}

fn eval_json(cards: &[Card], bet: u32, table: &PayTable) -> Result<serde_json::Value> {
    let result = table.evaluate(cards, bet)?;
    let advice = jacks_core::poker::recommend(cards)?;

    Ok(serde_json::json!({
        "result": result,
        "advice": advice,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn eval_json_royal_flush() {
        let hand = cards("Th Jh Qh Kh Ah");
        let value = eval_json(&hand, 5, &PayTable::default()).unwrap();

        let result = PayTable::default().evaluate(&hand, 5).unwrap();
        assert_eq!(value["result"], serde_json::to_value(&result).unwrap());
        assert_eq!(value["result"]["payout"], json!(4000));

        let advice = &value["advice"];
        assert_eq!(advice["hold_indices"], json!([0, 1, 2, 3, 4]));
        assert_eq!(advice["strategy_name"], json!("Royal flush"));
        assert!(advice["description"].is_string());
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn eval_json_pair_payout() {
        let value = eval_json(&cards("Jh Jc 3d 6s 9h"), 2, &PayTable::default()).unwrap();
        assert_eq!(value["result"]["payout"], json!(2));
        assert_eq!(value["advice"]["hold_indices"], json!([0, 1]));
    }

    #[test]
    fn eval_rejects_hand_size() {
        let table = PayTable::default();
        assert!(eval_json(&cards("Th Jh Qh Kh"), 1, &table).is_err());
        assert!(eval_json(&cards("2h 3h 4h 5h 6h 7h"), 1, &table).is_err());
        assert!(eval(&cards("Th Jh Qh Kh"), 1, &table, false).is_err());
    }
}
