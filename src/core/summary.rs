// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BillRecord, BillStatus, ExpenseRecord, IncomeRecord, PeriodSummary, SavingGoal};
use rust_decimal::Decimal;

/// Fold the four period lists into a `PeriodSummary`.
///
/// Paid bills only count toward `total_bills`: pending bills are money owed,
/// not money spent. Balance is income minus expenses; empty lists give an
/// all-zero summary.
pub fn summarize(
    income: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    bills: &[BillRecord],
    savings: &[SavingGoal],
) -> PeriodSummary {
    let total_income: Decimal = income.iter().map(|r| r.amount).sum();
    let total_expenses: Decimal = expenses.iter().map(|r| r.amount).sum();
    let total_bills: Decimal = bills
        .iter()
        .filter(|b| b.status == BillStatus::Paid)
        .map(|b| b.amount)
        .sum();
    let total_savings: Decimal = savings.iter().map(|s| s.current_amount).sum();
    PeriodSummary {
        total_income,
        total_expenses,
        total_bills,
        total_savings,
        balance: total_income - total_expenses,
    }
}
