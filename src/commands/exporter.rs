// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::utils::period_from;
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub)?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let income = store::incomes_for(conn, period)?;
    let expenses = store::expenses_for(conn, period)?;
    let bills = store::bills_for(conn, period)?;
    let savings = store::savings_for(conn, period)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["kind", "id", "label", "amount", "date", "extra"])?;
            for r in &income {
                wtr.write_record([
                    "income".to_string(),
                    r.id.to_string(),
                    r.source.clone(),
                    r.amount.to_string(),
                    r.date.to_string(),
                    String::new(),
                ])?;
            }
            for r in &expenses {
                wtr.write_record([
                    "expense".to_string(),
                    r.id.to_string(),
                    r.description.clone(),
                    r.amount.to_string(),
                    r.date.to_string(),
                    r.category.to_string(),
                ])?;
            }
            for r in &bills {
                wtr.write_record([
                    "bill".to_string(),
                    r.id.to_string(),
                    r.name.clone(),
                    r.amount.to_string(),
                    r.due_date.to_string(),
                    r.status.to_string(),
                ])?;
            }
            for r in &savings {
                wtr.write_record([
                    "saving".to_string(),
                    r.id.to_string(),
                    r.goal.clone(),
                    r.current_amount.to_string(),
                    String::new(),
                    format!("target={}", r.target_amount),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let doc = json!({
                "period": period.to_string(),
                "income": income,
                "expenses": expenses,
                "bills": bills,
                "savings": savings,
            });
            std::fs::write(out, serde_json::to_string_pretty(&doc)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} to {}", period, out);
    Ok(())
}
