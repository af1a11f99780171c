// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimator.
use ahash::AHashSet;
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{ops::Range, panic, thread};

use equity_cards::{Card, CardPool};
use equity_eval::{HandEvaluator, eval::BOARD_CARDS};

use crate::{EquityError, EquityResult, Player, Tally, aggregate};

/// Estimator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of parallel tasks running iterations.
    pub tasks: usize,
    /// The seed for the random board completions, if `None` a random seed is
    /// used for each estimation.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks: thread::available_parallelism().map_or(1, |n| n.get()),
            seed: None,
        }
    }
}

/// The inputs shared by all iterations.
struct Job<'a> {
    players: &'a [Player],
    board: &'a [Card],
    pool: &'a CardPool,
    seed: u64,
}

/// Estimates players equity by completing the board at random.
///
/// Each iteration samples the missing board cards from the pool, scores each
/// player hand, and credits the players with the best score, a pot split by
/// `w` players credits `1 / w` to each winner.
#[derive(Debug, Clone)]
pub struct Estimator<E> {
    evaluator: E,
    config: Config,
}

impl<E: HandEvaluator> Estimator<E> {
    /// Creates an estimator with the default configuration.
    pub fn new(evaluator: E) -> Self {
        Self::with_config(evaluator, Config::default())
    }

    /// Creates an estimator with the given configuration.
    pub fn with_config(evaluator: E, config: Config) -> Self {
        Self { evaluator, config }
    }

    /// The estimator configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Estimates the players equity running `iterations` board completions.
    ///
    /// The `pool` must contain the cards that are not in the players hands or
    /// in the board. The board can have 0 to 5 cards, when the board is
    /// complete all iterations evaluate the same board.
    pub fn estimate(
        &self,
        players: &[Player],
        board: &[Card],
        pool: &CardPool,
        iterations: u64,
    ) -> Result<EquityResult, EquityError> {
        if iterations == 0 {
            return Err(EquityError::InvalidIterationCount);
        }

        if players.is_empty() {
            return Err(EquityError::NoPlayers);
        }

        let missing = BOARD_CARDS
            .checked_sub(board.len())
            .ok_or(EquityError::InvalidBoardSize(board.len()))?;

        check_cards(players, board, pool)?;

        if missing > pool.len() {
            return Err(EquityError::InsufficientCards {
                requested: missing,
                available: pool.len(),
            });
        }

        let job = Job {
            players,
            board,
            pool,
            seed: self.config.seed.unwrap_or_else(|| rand::rng().random()),
        };

        let tasks = (self.config.tasks.max(1) as u64).min(iterations);
        debug!(
            "Estimating {} players with board [{}], {} pool cards, {iterations} iterations, \
             {tasks} tasks, seed {}",
            players.len(),
            cards_to_string(board),
            pool.len(),
            job.seed,
        );

        let tally = if tasks == 1 {
            self.run(&job, 0..iterations)?
        } else {
            self.par_run(&job, iterations, tasks)?
        };

        aggregate(players, &tally)
    }

    /// Splits the iterations among `tasks` scoped threads and merges their
    /// tallies.
    fn par_run(&self, job: &Job<'_>, iterations: u64, tasks: u64) -> Result<Tally, EquityError> {
        let per_task = iterations.div_ceil(tasks);

        thread::scope(|s| {
            let handles = (0..tasks)
                .map(|task_id| {
                    let start = (task_id * per_task).min(iterations);
                    let end = (start + per_task).min(iterations);
                    s.spawn(move || self.run(job, start..end))
                })
                .collect::<Vec<_>>();

            let mut tally = Tally::new(job.players.len());
            for handle in handles {
                let task_tally = handle
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))?;
                tally.merge(&task_tally);
            }

            Ok(tally)
        })
    }

    /// Runs the iterations in the given range.
    fn run(&self, job: &Job<'_>, iterations: Range<u64>) -> Result<Tally, EquityError> {
        let missing = BOARD_CARDS - job.board.len();

        let mut tally = Tally::new(job.players.len());
        let mut board = Vec::with_capacity(BOARD_CARDS);
        let mut scores = Vec::with_capacity(job.players.len());
        let mut winners = Vec::with_capacity(job.players.len());

        for iteration in iterations {
            board.clear();
            board.extend_from_slice(job.board);
            if missing > 0 {
                let mut rng = iteration_rng(job.seed, iteration);
                job.pool.sample(&mut rng, missing, &mut board)?;
            }

            scores.clear();
            for player in job.players {
                scores.push(self.evaluator.evaluate(player.hand(), &board)?);
            }

            let Some(&best) = scores.iter().min() else {
                return Err(EquityError::NoPlayers);
            };

            winners.clear();
            winners.extend(
                scores
                    .iter()
                    .enumerate()
                    .filter(|(_, score)| **score == best)
                    .map(|(idx, _)| idx),
            );

            tally.record(&winners);
        }

        Ok(tally)
    }
}

/// Creates the random generator for an iteration.
///
/// Each iteration has its own generator so that results for a given seed don't
/// depend on how iterations are split among tasks.
fn iteration_rng(seed: u64, iteration: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ iteration.wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Checks that each card is used once in the hands, board, and pool.
fn check_cards(players: &[Player], board: &[Card], pool: &CardPool) -> Result<(), EquityError> {
    let mut seen = AHashSet::with_capacity(players.len() * 2 + board.len());
    let dealt = players.iter().flat_map(|p| p.hand()).chain(board);

    for &card in dealt {
        if !seen.insert(card) || pool.contains(card) {
            return Err(EquityError::DuplicateCard(card));
        }
    }

    Ok(())
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
