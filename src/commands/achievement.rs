// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::core::{achievements, streak, summary};
use crate::store;
use crate::utils::{maybe_print_json, period_from, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(conn, sub)?,
        Some(("sticky", sub)) => sticky(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub)?;
    let income = store::incomes_for(conn, period)?;
    let expenses = store::expenses_for(conn, period)?;
    let bills = store::bills_for(conn, period)?;
    let savings = store::savings_for(conn, period)?;
    let summary = summary::summarize(&income, &expenses, &bills, &savings);
    // Read-only view: show the stored streak without advancing it.
    let streak = streak::StreakState::load(conn)?.count;
    let mut badges = achievements::evaluate(&income, &expenses, &bills, &savings, &summary, streak);
    achievements::apply_sticky(conn, &mut badges)?;

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &badges)? {
        let rows = badges
            .iter()
            .map(|b| {
                let state = if b.unlocked { "unlocked" } else { "locked" };
                vec![b.id.to_string(), b.title.to_string(), state.to_string()]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Title", "State"], rows));
    }
    Ok(())
}

fn sticky(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let on = sub.get_one::<String>("mode").unwrap().as_str() == "on";
    achievements::set_sticky(conn, on)?;
    println!(
        "Achievements are now {}",
        if on { "sticky (never re-lock)" } else { "recomputed each view" }
    );
    Ok(())
}
