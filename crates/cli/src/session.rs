// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Street by street equity session.
use anyhow::Result;
use clap::Args;
use log::info;
use rand::{SeedableRng, rngs::SmallRng};
use std::io;

use equity_sim::{
    Card, Config, Deck, EquityResult, Estimator, HandEvaluator, HoldemEvaluator, Player,
};

use crate::report;

/// Session command arguments.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Number of players.
    #[clap(long, short, default_value_t = 7,
           value_parser = clap::value_parser!(u8).range(2..=23))]
    players: u8,
    /// Seed for the deck shuffle and the estimations.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of parallel tasks, defaults to the available cores.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=1024))]
    tasks: Option<u16>,
    /// Number of iterations before the flop.
    #[clap(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    preflop: u64,
    /// Number of iterations after the flop.
    #[clap(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    flop: u64,
    /// Number of iterations after the turn.
    #[clap(long, default_value_t = 5_000, value_parser = clap::value_parser!(u64).range(1..))]
    turn: u64,
    /// Number of iterations after the river.
    #[clap(long, default_value_t = 2_000, value_parser = clap::value_parser!(u64).range(1..))]
    river: u64,
}

/// A betting round with the cards it deals to the board.
#[derive(Debug, Clone, Copy)]
struct Street {
    name: &'static str,
    cards: usize,
    iterations: u64,
}

/// Runs the session command.
pub fn run(args: SessionArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut config = Config {
        seed: args.seed,
        ..Config::default()
    };
    if let Some(tasks) = args.tasks {
        config.tasks = tasks as usize;
    }

    let mut session = Session::new(Deck::new_and_shuffled(&mut rng), args.players as usize)?;
    let estimator = Estimator::with_config(HoldemEvaluator, config);

    let streets = [
        Street {
            name: "Preflop",
            cards: 0,
            iterations: args.preflop,
        },
        Street {
            name: "Flop",
            cards: 3,
            iterations: args.flop,
        },
        Street {
            name: "Turn",
            cards: 1,
            iterations: args.turn,
        },
        Street {
            name: "River",
            cards: 1,
            iterations: args.river,
        },
    ];

    for player in &session.players {
        println!("{}: {}", player.name(), report::cards_to_string(player.hand()));
    }

    for street in streets {
        let res = session.play_street(&estimator, street)?;
        println!();
        println!("{} [{}]", street.name, report::cards_to_string(&session.board));
        report::write_table(&mut io::stdout(), &res)?;
    }

    Ok(())
}

/// The dealt state of a session.
struct Session {
    deck: Deck,
    players: Vec<Player>,
    board: Vec<Card>,
}

impl Session {
    /// Deals two hole cards to each player from the deck.
    fn new(mut deck: Deck, players: usize) -> Result<Self> {
        let players = (1..=players)
            .map(|idx| -> Result<Player> {
                let mut player = Player::new(format!("player{idx}"));
                player.receive_cards(deck.deal(2)?);
                Ok(player)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            deck,
            players,
            board: Vec::with_capacity(5),
        })
    }

    /// Deals the street cards and estimates the players equity.
    fn play_street<E: HandEvaluator>(
        &mut self,
        estimator: &Estimator<E>,
        street: Street,
    ) -> Result<EquityResult> {
        self.board.extend(self.deck.deal(street.cards)?);

        let pool = self.deck.snapshot();
        let res = estimator.estimate(&self.players, &self.board, &pool, street.iterations)?;
        info!(
            "{} estimated with {} iterations and {} remaining cards",
            street.name,
            street.iterations,
            pool.len()
        );

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            tasks: 2,
            seed: Some(11),
        }
    }

    #[test]
    fn session_deals_players_and_board() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut session = Session::new(Deck::new_and_shuffled(&mut rng), 7).unwrap();
        assert_eq!(session.players.len(), 7);
        assert_eq!(session.players[6].name(), "player7");
        assert!(session.players.iter().all(|p| p.hand().len() == 2));
        assert_eq!(session.deck.count(), 52 - 14);

        let estimator = Estimator::with_config(HoldemEvaluator, config());
        let street = Street {
            name: "Flop",
            cards: 3,
            iterations: 100,
        };
        let res = session.play_street(&estimator, street).unwrap();
        assert_eq!(session.board.len(), 3);
        assert_eq!(session.deck.count(), 52 - 17);
        assert_eq!(res.players().len(), 7);

        let total = res.players().iter().map(|p| p.win_rate).sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn session_river_is_exact() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut session = Session::new(Deck::new_and_shuffled(&mut rng), 4).unwrap();
        let estimator = Estimator::with_config(HoldemEvaluator, config());

        let street = Street {
            name: "Board",
            cards: 5,
            iterations: 1,
        };
        let one = session.play_street(&estimator, street).unwrap();

        let street = Street {
            name: "River",
            cards: 0,
            iterations: 500,
        };
        let many = session.play_street(&estimator, street).unwrap();

        let rates = |res: &EquityResult| {
            res.players().iter().map(|p| p.win_rate).collect::<Vec<_>>()
        };
        assert_eq!(rates(&one), rates(&many));
    }

    #[test]
    fn too_many_players() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(Session::new(Deck::new_and_shuffled(&mut rng), 27).is_err());
    }
}
