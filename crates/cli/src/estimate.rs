// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! One shot equity estimation.
use anyhow::Result;
use clap::Args;
use log::info;
use std::{io, time::Instant};

use equity_sim::{Card, CardPool, Config, Estimator, HoldemEvaluator, Player};

use crate::report;

/// Estimate command arguments.
#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// A player name and hole cards, for example `alice:AsKd`.
    #[clap(long = "player", short, required = true, value_parser = parse_player)]
    players: Vec<Player>,
    /// The board cards, for example `Ts7s2c`.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Number of board completions.
    #[clap(long, short = 'n', default_value_t = 100_000,
           value_parser = clap::value_parser!(u64).range(1..))]
    iterations: u64,
    /// Number of parallel tasks, defaults to the available cores.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=1024))]
    tasks: Option<u16>,
    /// Seed for reproducible estimations.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Prints the result as JSON.
    #[clap(long)]
    json: bool,
}

/// Runs the estimate command.
pub fn run(args: EstimateArgs) -> Result<()> {
    let board = Card::parse_many(&args.board)?;

    let mut used = args
        .players
        .iter()
        .flat_map(|p| p.hand().iter().copied())
        .collect::<Vec<_>>();
    used.extend_from_slice(&board);
    let pool = CardPool::excluding(&used);

    let mut config = Config {
        seed: args.seed,
        ..Config::default()
    };
    if let Some(tasks) = args.tasks {
        config.tasks = tasks as usize;
    }

    let estimator = Estimator::with_config(HoldemEvaluator, config);

    let now = Instant::now();
    let res = estimator.estimate(&args.players, &board, &pool, args.iterations)?;
    info!(
        "Estimated {} players with {} iterations in {:.3}s",
        args.players.len(),
        res.iterations(),
        now.elapsed().as_secs_f64()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&res)?);
    } else {
        if !board.is_empty() {
            println!("Board: {}", report::cards_to_string(&board));
        }
        report::write_table(&mut io::stdout().lock(), &res)?;
    }

    Ok(())
}

/// Parses a `NAME:CARDS` player argument.
fn parse_player(s: &str) -> Result<Player, String> {
    let (name, cards) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:CARDS, got '{s}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing player name in '{s}'"));
    }

    let hand = Card::parse_many(cards).map_err(|e| e.to_string())?;
    Ok(Player::with_hand(name, hand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_argument() {
        let player = parse_player("alice:AsKd").unwrap();
        assert_eq!(player.name(), "alice");
        assert_eq!(player.hand(), Card::parse_many("As Kd").unwrap().as_slice());

        let player = parse_player(" bob : 10h 9h").unwrap();
        assert_eq!(player.name(), "bob");
        assert_eq!(player.hand().len(), 2);

        assert!(parse_player("alice").is_err());
        assert!(parse_player(":AsKd").is_err());
        assert!(parse_player("alice:AsXd").is_err());
    }
}
