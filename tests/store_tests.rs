// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::models::{BillStatus, ExpenseCategory, Period};
use fintrack::store;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    fintrack::db::init_schema(&mut conn).unwrap();
    conn
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn aug() -> Period {
    Period::new(8, 2025).unwrap()
}

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, day).unwrap()
}

#[test]
fn income_roundtrip_and_delete() {
    let conn = setup();
    let id = store::add_income(&conn, "Salary", dec("2500.50"), d(1), aug()).unwrap();
    let list = store::incomes_for(&conn, aug()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, id);
    assert_eq!(list[0].source, "Salary");
    assert_eq!(list[0].amount, dec("2500.50"));

    store::delete_income(&conn, id).unwrap();
    assert!(store::incomes_for(&conn, aug()).unwrap().is_empty());
    assert!(store::delete_income(&conn, id).is_err());
}

#[test]
fn listing_is_scoped_to_the_period() {
    let conn = setup();
    store::add_income(&conn, "Salary", dec("100"), d(1), aug()).unwrap();
    let sep = Period::new(9, 2025).unwrap();
    store::add_income(
        &conn,
        "Salary",
        dec("200"),
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        sep,
    )
    .unwrap();

    assert_eq!(store::incomes_for(&conn, aug()).unwrap().len(), 1);
    assert_eq!(store::incomes_for(&conn, sep).unwrap().len(), 1);
    // Same month, different year: still a different period.
    assert!(
        store::incomes_for(&conn, Period::new(8, 2024).unwrap())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn expense_category_roundtrip() {
    let conn = setup();
    store::add_expense(
        &conn,
        ExpenseCategory::Healthcare,
        dec("45"),
        "Pharmacy",
        d(3),
        aug(),
    )
    .unwrap();
    let list = store::expenses_for(&conn, aug()).unwrap();
    assert_eq!(list[0].category, ExpenseCategory::Healthcare);
    assert_eq!(list[0].description, "Pharmacy");
}

#[test]
fn bill_status_toggles() {
    let conn = setup();
    let id = store::add_bill(&conn, "Internet", dec("60"), d(15), BillStatus::Pending, aug())
        .unwrap();
    assert_eq!(store::bills_for(&conn, aug()).unwrap()[0].status, BillStatus::Pending);

    store::set_bill_status(&conn, id, BillStatus::Paid).unwrap();
    assert_eq!(store::bills_for(&conn, aug()).unwrap()[0].status, BillStatus::Paid);

    store::set_bill_status(&conn, id, BillStatus::Pending).unwrap();
    assert_eq!(store::bills_for(&conn, aug()).unwrap()[0].status, BillStatus::Pending);

    assert!(store::set_bill_status(&conn, 999, BillStatus::Paid).is_err());
}

#[test]
fn saving_amount_updates() {
    let conn = setup();
    let id = store::add_saving(&conn, "Laptop", dec("1200"), dec("0"), aug()).unwrap();
    store::set_saving_amount(&conn, id, dec("350.75")).unwrap();
    let list = store::savings_for(&conn, aug()).unwrap();
    assert_eq!(list[0].current_amount, dec("350.75"));
    assert_eq!(list[0].target_amount, dec("1200"));
}

#[test]
fn validation_rejects_bad_input_before_writing() {
    let conn = setup();
    assert!(store::add_income(&conn, "  ", dec("10"), d(1), aug()).is_err());
    assert!(store::add_income(&conn, "Salary", dec("-1"), d(1), aug()).is_err());
    assert!(store::add_saving(&conn, "Trip", dec("0"), dec("0"), aug()).is_err());
    assert!(store::add_saving(&conn, "Trip", dec("-5"), dec("0"), aug()).is_err());
    assert!(store::set_saving_amount(&conn, 1, dec("-1")).is_err());

    assert!(store::incomes_for(&conn, aug()).unwrap().is_empty());
    assert!(store::savings_for(&conn, aug()).unwrap().is_empty());
}

#[test]
fn replace_period_swaps_only_that_period() {
    let mut conn = Connection::open_in_memory().unwrap();
    fintrack::db::init_schema(&mut conn).unwrap();
    store::add_income(&conn, "Old", dec("1"), d(1), aug()).unwrap();
    let sep = Period::new(9, 2025).unwrap();
    store::add_income(
        &conn,
        "Keep",
        dec("2"),
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        sep,
    )
    .unwrap();

    let fresh = vec![fintrack::models::IncomeRecord {
        id: 0,
        source: "Server".into(),
        amount: dec("42"),
        date: d(5),
        period: aug(),
    }];
    store::replace_period(&mut conn, aug(), &fresh, &[], &[], &[]).unwrap();

    let aug_list = store::incomes_for(&conn, aug()).unwrap();
    assert_eq!(aug_list.len(), 1);
    assert_eq!(aug_list[0].source, "Server");
    assert_eq!(store::incomes_for(&conn, sep).unwrap()[0].source, "Keep");
}

#[test]
fn settings_kv_roundtrip() {
    let conn = setup();
    assert!(store::get_setting(&conn, "missing").unwrap().is_none());
    store::set_setting(&conn, "k", "v1").unwrap();
    store::set_setting(&conn, "k", "v2").unwrap();
    assert_eq!(store::get_setting(&conn, "k").unwrap().as_deref(), Some("v2"));
    store::delete_setting(&conn, "k").unwrap();
    assert!(store::get_setting(&conn, "k").unwrap().is_none());
}
