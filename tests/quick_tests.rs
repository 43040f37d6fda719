// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::commands::quick::{QuickEntry, parse_phrase};
use fintrack::models::{BillStatus, ExpenseCategory};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn spent_on_food_is_a_food_expense() {
    let entry = parse_phrase("spent 120 on lunch at a restaurant").unwrap();
    assert_eq!(
        entry,
        QuickEntry::Expense {
            category: ExpenseCategory::Food,
            amount: dec("120"),
            description: "spent 120 on lunch at a restaurant".into(),
        }
    );
}

#[test]
fn earned_salary_is_income() {
    let entry = parse_phrase("earned 2,000 salary today").unwrap();
    match entry {
        QuickEntry::Income { source, amount } => {
            assert_eq!(source, "Salary");
            assert_eq!(amount, dec("2000"));
        }
        other => panic!("expected income, got {:?}", other),
    }
}

#[test]
fn paid_bill_is_a_paid_bill() {
    let entry = parse_phrase("paid 60.50 electricity bill").unwrap();
    match entry {
        QuickEntry::Bill { amount, status, .. } => {
            assert_eq!(amount, dec("60.50"));
            assert_eq!(status, BillStatus::Paid);
        }
        other => panic!("expected bill, got {:?}", other),
    }
}

#[test]
fn unknown_keywords_fall_back_to_other() {
    let entry = parse_phrase("mystery purchase 15").unwrap();
    match entry {
        QuickEntry::Expense { category, .. } => assert_eq!(category, ExpenseCategory::Other),
        other => panic!("expected expense, got {:?}", other),
    }
}

#[test]
fn transport_keywords_pick_transport() {
    let entry = parse_phrase("uber ride 18.75").unwrap();
    match entry {
        QuickEntry::Expense { category, amount, .. } => {
            assert_eq!(category, ExpenseCategory::Transport);
            assert_eq!(amount, dec("18.75"));
        }
        other => panic!("expected expense, got {:?}", other),
    }
}

#[test]
fn missing_amount_is_an_error() {
    assert!(parse_phrase("spent everything on snacks").is_err());
}
