// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::core::metrics::goal_progress;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, period_from, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        Some(("set-amount", sub)) => set_amount(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let goal = sub.get_one::<String>("goal").unwrap();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let current = parse_decimal(sub.get_one::<String>("current").unwrap())?;
    let period = period_from(sub)?;
    let id = store::add_saving(conn, goal, target, current, period)?;
    println!("Created goal #{}: '{}' {} / {} ({})", id, goal, current, target, period);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub)?;
    let records = store::savings_for(conn, period)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &records)? {
        let rows = records
            .iter()
            .map(|r| {
                // Progress is shown unclamped; an over-funded goal reads >100%.
                vec![
                    r.id.to_string(),
                    r.goal.clone(),
                    fmt_money(&r.current_amount),
                    fmt_money(&r.target_amount),
                    format!("{:.0}%", goal_progress(r)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Goal", "Saved", "Target", "Progress"], rows)
        );
    }
    Ok(())
}

fn set_amount(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    store::set_saving_amount(conn, id, amount)?;
    println!("Goal #{} saved amount set to {}", id, amount);
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
    store::delete_saving(conn, id)?;
    println!("Deleted goal #{}", id);
    Ok(())
}
