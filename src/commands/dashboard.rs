// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::core::{achievements, metrics, streak, summary};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, period_from, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub)?;
    let income = store::incomes_for(conn, period)?;
    let expenses = store::expenses_for(conn, period)?;
    let bills = store::bills_for(conn, period)?;
    let savings = store::savings_for(conn, period)?;

    let summary = summary::summarize(&income, &expenses, &bills, &savings);
    let derived = metrics::derive(&summary, &savings);
    // Viewing the dashboard counts as today's visit.
    let streak = streak::advance(conn, chrono::Local::now().date_naive())?;
    let mut badges = achievements::evaluate(&income, &expenses, &bills, &savings, &summary, streak);
    achievements::apply_sticky(conn, &mut badges)?;

    let payload = json!({
        "period": period.to_string(),
        "summary": summary,
        "metrics": derived,
        "streak": streak,
        "achievements": badges,
    });
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        return Ok(());
    }

    println!("Period {}", period);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Bills paid", "Savings", "Balance"],
            vec![vec![
                fmt_money(&summary.total_income),
                fmt_money(&summary.total_expenses),
                fmt_money(&summary.total_bills),
                fmt_money(&summary.total_savings),
                fmt_money(&summary.balance),
            ]],
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Streak", "Savings rate", "Goals progress"],
            vec![vec![
                format!("{} days", streak),
                format!("{}%", derived.savings_rate),
                format!("{:.0}% across {} goals", derived.average_goal_progress, savings.len()),
            ]],
        )
    );
    let unlocked: Vec<Vec<String>> = badges
        .iter()
        .filter(|b| b.unlocked)
        .map(|b| vec![b.title.to_string(), b.description.to_string()])
        .collect();
    if unlocked.is_empty() {
        println!("No achievements yet; start tracking to unlock them.");
    } else {
        println!("{}", pretty_table(&["Achievement", ""], unlocked));
    }
    Ok(())
}
