// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example rank_freq -- --samples 10000000
// ```
use clap::Parser;
use rand::prelude::*;
use std::time::Instant;

use equity_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of 7 cards hands to sample.
    #[clap(long, short, default_value_t = 1_000_000)]
    samples: usize,
    /// The random seed.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let pool = CardPool::excluding(&[]);
    let mut hand = Vec::with_capacity(7);
    let mut counts = [0usize; 9];

    let now = Instant::now();
    for _ in 0..cli.samples {
        hand.clear();
        pool.sample(&mut rng, 7, &mut hand).expect("a full deck has 7 cards");
        let rank = HandScore::eval(&hand).rank();
        counts[rank as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    let pct = |rank: HandRank| 100.0 * counts[rank as usize] as f64 / total as f64;

    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {:.2}%", pct(HandRank::HighCard));
    println!("One  Pair:       {:.2}%", pct(HandRank::OnePair));
    println!("Two Pairs:       {:.2}%", pct(HandRank::TwoPair));
    println!("Three of a Kind: {:.2}%", pct(HandRank::ThreeOfAKind));
    println!("Straight:        {:.2}%", pct(HandRank::Straight));
    println!("Flush:           {:.2}%", pct(HandRank::Flush));
    println!("Full House:      {:.2}%", pct(HandRank::FullHouse));
    println!("Four of a Kind:  {:.2}%", pct(HandRank::FourOfAKind));
    println!("Straight Flush:  {:.2}%", pct(HandRank::StraightFlush));
}
