// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all
// ...
// Total rolls      7776
// Elapsed:         0.000s
//
// Nothing:         480
// Pair:            3600
// Two Pair:        1800
// Set:             1200
// Small Straight:  120
// Large Straight:  120
// Full House:      300
// Square:          150
// Poker:           6
// ```

use std::time::Instant;

use pokerdice_eval::*;

fn main() {
    // Evaluate all 6^5 rolls.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Hand::for_each_roll(|hand| {
        let combination = HandValue::eval(&hand).combination();
        counts[combination as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total rolls      {total}");
    println!("Elapsed:         {:.3}s\n", elapsed);

    for combination in Combination::all() {
        let label = format!("{combination}:");
        println!("{label:<17}{}", counts[combination as usize]);
    }
}
