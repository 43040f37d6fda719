// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::models::{BillRecord, BillStatus, ExpenseCategory, ExpenseRecord, IncomeRecord};
use fintrack::remote::{WireBill, WireExpense, WireIncome};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn wire_income_parses_month_name() {
    let wire = WireIncome {
        id: "a1b2".into(),
        source: "Salary".into(),
        amount: dec("2500"),
        date: "2025-08-01".into(),
        month: "August".into(),
        year: 2025,
    };
    let record: IncomeRecord = wire.try_into().unwrap();
    assert_eq!(record.period.month, 8);
    assert_eq!(record.period.year, 2025);
    assert_eq!(record.period.month_name(), "August");
    assert_eq!(record.amount, dec("2500"));
}

#[test]
fn wire_expense_parses_category() {
    let wire = WireExpense {
        id: String::new(),
        category: "Utilities".into(),
        amount: dec("60"),
        description: "Internet".into(),
        date: "2025-08-05".into(),
        month: "August".into(),
        year: 2025,
    };
    let record: ExpenseRecord = wire.try_into().unwrap();
    assert_eq!(record.category, ExpenseCategory::Utilities);
}

#[test]
fn wire_bill_parses_status() {
    let wire = WireBill {
        id: String::new(),
        name: "Rent".into(),
        amount: dec("900"),
        due_date: "2025-08-28".into(),
        status: "paid".into(),
        month: "August".into(),
        year: 2025,
    };
    let record: BillRecord = wire.try_into().unwrap();
    assert_eq!(record.status, BillStatus::Paid);
}

#[test]
fn bad_month_name_is_rejected() {
    let wire = WireIncome {
        id: String::new(),
        source: "Salary".into(),
        amount: dec("1"),
        date: "2025-08-01".into(),
        month: "Augustus".into(),
        year: 2025,
    };
    assert!(IncomeRecord::try_from(wire).is_err());
}

#[test]
fn wire_amounts_deserialize_from_json_floats() {
    let wire: WireIncome = serde_json::from_str(
        r#"{"id":"x","source":"Salary","amount":2500.5,"date":"2025-08-01","month":"August","year":2025}"#,
    )
    .unwrap();
    assert_eq!(wire.amount, dec("2500.5"));
}
