// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity results output.
use std::io::{self, Write};

use equity_sim::{Card, EquityResult};

/// Writes the players rates as a table with percentages.
pub fn write_table<W: Write>(w: &mut W, res: &EquityResult) -> io::Result<()> {
    let width = res
        .players()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or_default()
        .max(6);

    writeln!(w, "{:<width$} {:>8} {:>8}", "Player", "Win", "Tie")?;
    for p in res {
        writeln!(
            w,
            "{:<width$} {:>7.2}% {:>7.2}%",
            p.name,
            p.win_rate * 100.0,
            p.tie_rate * 100.0
        )?;
    }

    Ok(())
}

/// Formats cards separated by spaces.
pub fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
