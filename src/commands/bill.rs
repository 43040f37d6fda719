// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::BillStatus;
use crate::store;
use crate::utils::{date_from, fmt_money, maybe_print_json, parse_decimal, period_from, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        Some(("pay", sub)) => set_status(conn, sub, BillStatus::Paid)?,
        Some(("unpay", sub)) => set_status(conn, sub, BillStatus::Pending)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let due_date = date_from(sub, "due")?;
    let status: BillStatus = sub.get_one::<String>("status").unwrap().parse()?;
    let period = period_from(sub)?;
    let id = store::add_bill(conn, name, amount, due_date, status, period)?;
    println!("Recorded bill #{}: '{}' {} due {} ({})", id, name, amount, due_date, status);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub)?;
    let records = store::bills_for(conn, period)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &records)? {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.name.clone(),
                    fmt_money(&r.amount),
                    r.due_date.to_string(),
                    r.status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Amount", "Due", "Status"], rows)
        );
    }
    Ok(())
}

fn set_status(conn: &Connection, sub: &clap::ArgMatches, status: BillStatus) -> Result<()> {
    let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
    store::set_bill_status(conn, id, status)?;
    println!("Bill #{} is now {}", id, status);
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
    store::delete_bill(conn, id)?;
    println!("Deleted bill #{}", id);
    Ok(())
}
