// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Savings goals with a non-positive target: progress divides by it.
    let mut stmt = conn.prepare("SELECT id, goal, target_amount FROM savings")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let goal: String = r.get(1)?;
        let target: String = r.get(2)?;
        match Decimal::from_str(&target) {
            Ok(t) if t > Decimal::ZERO => {}
            _ => rows.push(vec![
                "zero_target_goal".into(),
                format!("#{} '{}' target={}", id, goal, target),
            ]),
        }
    }

    // 2) Negative amounts anywhere.
    for (table, col) in [
        ("income", "amount"),
        ("expenses", "amount"),
        ("bills", "amount"),
        ("savings", "current_amount"),
    ] {
        let mut stmt = conn.prepare(&format!("SELECT id, {} FROM {}", col, table))?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let id: i64 = r.get(0)?;
            let amount: String = r.get(1)?;
            match Decimal::from_str(&amount) {
                Ok(a) if a >= Decimal::ZERO => {}
                _ => rows.push(vec![
                    "negative_amount".into(),
                    format!("{} #{} {}", table, id, amount),
                ]),
            }
        }
    }

    // 3) Record dates outside their owning period.
    for (table, datecol) in [("income", "date"), ("expenses", "date"), ("bills", "due_date")] {
        let mut stmt = conn.prepare(&format!(
            "SELECT id, {}, month, year FROM {}",
            datecol, table
        ))?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let id: i64 = r.get(0)?;
            let date: String = r.get(1)?;
            let month: u32 = r.get(2)?;
            let year: i32 = r.get(3)?;
            let parsed = crate::utils::parse_date(&date)?;
            let period = crate::models::Period::new(month, year)?;
            if !period.contains(parsed) {
                rows.push(vec![
                    "date_outside_period".into(),
                    format!("{} #{} {} not in {}", table, id, date, period),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
