// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::models::{BillStatus, ExpenseCategory, Period};
use fintrack::{cli, commands, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    fintrack::db::init_schema(&mut conn).unwrap();
    let period = Period::new(8, 2025).unwrap();
    let d = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
    let dec = |s: &str| s.parse::<Decimal>().unwrap();
    store::add_income(&conn, "Salary", dec("2000"), d, period).unwrap();
    store::add_expense(&conn, ExpenseCategory::Food, dec("45.50"), "Groceries", d, period)
        .unwrap();
    store::add_bill(&conn, "Rent", dec("900"), d, BillStatus::Paid, period).unwrap();
    store::add_saving(&conn, "Trip", dec("1000"), dec("250"), period).unwrap();
    conn
}

fn export_args(dir: &std::path::Path, format: &str, file: &str) -> clap::ArgMatches {
    let out = dir.join(file);
    cli::build_cli().get_matches_from([
        "fintrack",
        "export",
        "--period",
        "2025-08",
        "--format",
        format,
        "--out",
        out.to_str().unwrap(),
    ])
}

#[test]
fn csv_export_writes_all_four_kinds() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let matches = export_args(dir.path(), "csv", "out.csv");
    let ("export", sub) = matches.subcommand().unwrap() else {
        panic!("expected export subcommand");
    };
    commands::exporter::handle(&conn, sub).unwrap();

    let body = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next().unwrap(), "kind,id,label,amount,date,extra");
    let rest: Vec<&str> = lines.collect();
    assert_eq!(rest.len(), 4);
    assert!(rest.iter().any(|l| l.starts_with("income,") && l.contains("Salary")));
    assert!(rest.iter().any(|l| l.starts_with("expense,") && l.contains("Food")));
    assert!(rest.iter().any(|l| l.starts_with("bill,") && l.contains("paid")));
    assert!(rest.iter().any(|l| l.starts_with("saving,") && l.contains("target=1000")));
}

#[test]
fn json_export_groups_by_record_type() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let matches = export_args(dir.path(), "json", "out.json");
    let ("export", sub) = matches.subcommand().unwrap() else {
        panic!("expected export subcommand");
    };
    commands::exporter::handle(&conn, sub).unwrap();

    let body = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(doc["period"], "2025-08");
    assert_eq!(doc["income"].as_array().unwrap().len(), 1);
    assert_eq!(doc["expenses"][0]["category"], "Food");
    assert_eq!(doc["bills"][0]["status"], "paid");
    assert_eq!(doc["savings"][0]["goal"], "Trip");
}
