// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands        2598960
// Elapsed:           0.412s
// Hands/sec:         6308155
//
// Royal Flush:       4
// Straight Flush:    36
// Four of a Kind:    624
// Full House:        3744
// Flush:             5108
// Straight:          10200
// Three of a Kind:   54912
// Two Pair:          123552
// Jacks or Better:   337920
// High Card:         2062860
// Return:            0.3360
// ```
//
// The return is the average payout per coin with no draw.

use std::time::Instant;

use jacks_eval::{Deck, Hand, HandResult, HandType, PayTable, Strategy, StrategyResult};

fn main() {
    // Classify all 2.6M hands and recommend their holds.
    let now = Instant::now();
    let table = PayTable::default();
    let mut counts = [0usize; HandType::COUNT];
    let mut strategies = [0usize; Strategy::COUNT];
    let mut paid = 0u64;

    Deck::default().for_each(5, |cards| {
        let Ok(hand) = Hand::new(cards) else {
            return;
        };

        let result = HandResult::eval(&hand, 1, &table);
        counts[result.hand_type as usize] += 1;
        paid += u64::from(result.payout);

        let advice = StrategyResult::for_hand(&hand);
        strategies[advice.strategy as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands        {total}");
    println!("Elapsed:           {:.3}s", elapsed);
    println!("Hands/sec:         {:.0}\n", total as f64 / elapsed);

    for hand_type in HandType::types() {
        let label = format!("{hand_type}:");
        println!("{label:<18} {}", counts[hand_type as usize]);
    }

    println!("{:<18} {:.4}\n", "Return:", paid as f64 / total as f64);

    for (idx, strategy) in Strategy::strategies().enumerate() {
        let count = strategies[strategy as usize];
        println!("{:>2} {:<28} {count}", idx + 1, strategy.name());
    }
}
