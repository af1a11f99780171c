// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em equity estimation CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::error;
use std::process::ExitCode;

pub mod estimate;
pub mod report;
pub mod session;

#[derive(Debug, Parser)]
#[command(name = "equity", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimates the equity of the given hands.
    Estimate(estimate::EstimateArgs),
    /// Deals a game street by street and estimates the equity at each street.
    Session(session::SessionArgs),
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Estimate(args) => estimate::run(args),
        Command::Session(args) => session::run(args),
    };

    if let Err(e) = res {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
