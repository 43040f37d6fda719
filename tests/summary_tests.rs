// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::core::summary::summarize;
use fintrack::models::{
    BillRecord, BillStatus, ExpenseCategory, ExpenseRecord, IncomeRecord, Period, SavingGoal,
};
use rust_decimal::Decimal;

fn period() -> Period {
    Period::new(8, 2025).unwrap()
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn income(amount: &str) -> IncomeRecord {
    IncomeRecord {
        id: 1,
        source: "Salary".into(),
        amount: dec(amount),
        date: date(1),
        period: period(),
    }
}

fn expense(amount: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: 1,
        category: ExpenseCategory::Food,
        amount: dec(amount),
        description: "Lunch".into(),
        date: date(2),
        period: period(),
    }
}

fn bill(amount: &str, status: BillStatus) -> BillRecord {
    BillRecord {
        id: 1,
        name: "Electricity".into(),
        amount: dec(amount),
        due_date: date(15),
        status,
        period: period(),
    }
}

fn goal(current: &str, target: &str) -> SavingGoal {
    SavingGoal {
        id: 1,
        goal: "Emergency fund".into(),
        target_amount: dec(target),
        current_amount: dec(current),
        period: period(),
    }
}

#[test]
fn totals_and_balance() {
    let s = summarize(
        &[income("2000"), income("500.50")],
        &[expense("300.25"), expense("100")],
        &[bill("80", BillStatus::Paid)],
        &[goal("150", "1000")],
    );
    assert_eq!(s.total_income, dec("2500.50"));
    assert_eq!(s.total_expenses, dec("400.25"));
    assert_eq!(s.total_bills, dec("80"));
    assert_eq!(s.total_savings, dec("150"));
    // Balance is exactly income minus expenses, decimal-exact.
    assert_eq!(s.balance, s.total_income - s.total_expenses);
    assert_eq!(s.balance, dec("2100.25"));
}

#[test]
fn pending_bills_are_excluded() {
    let s = summarize(
        &[],
        &[],
        &[bill("100", BillStatus::Paid), bill("50", BillStatus::Pending)],
        &[],
    );
    assert_eq!(s.total_bills, dec("100"));
}

#[test]
fn empty_lists_give_zero_summary() {
    let s = summarize(&[], &[], &[], &[]);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expenses, Decimal::ZERO);
    assert_eq!(s.total_bills, Decimal::ZERO);
    assert_eq!(s.total_savings, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::ZERO);
}

#[test]
fn recomputation_is_idempotent() {
    let income = [income("1234.56")];
    let expenses = [expense("78.90")];
    let bills = [bill("12", BillStatus::Paid)];
    let savings = [goal("5", "10")];
    let first = summarize(&income, &expenses, &bills, &savings);
    let second = summarize(&income, &expenses, &bills, &savings);
    assert_eq!(first, second);
}
