// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::core::metrics::{average_goal_progress, goal_progress, savings_rate};
use fintrack::models::{Period, PeriodSummary, SavingGoal};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn summary(income: &str, balance: &str) -> PeriodSummary {
    PeriodSummary {
        total_income: dec(income),
        total_expenses: dec(income) - dec(balance),
        total_bills: Decimal::ZERO,
        total_savings: Decimal::ZERO,
        balance: dec(balance),
    }
}

fn goal(current: &str, target: &str) -> SavingGoal {
    SavingGoal {
        id: 1,
        goal: "Trip".into(),
        target_amount: dec(target),
        current_amount: dec(current),
        period: Period::new(8, 2025).unwrap(),
    }
}

#[test]
fn savings_rate_is_one_decimal() {
    // 200 / 300 = 66.666...% -> 66.7
    assert_eq!(savings_rate(&summary("300", "200")), dec("66.7"));
    assert_eq!(savings_rate(&summary("1000", "250")), dec("25.0"));
}

#[test]
fn zero_income_gives_zero_rate() {
    // Never NaN or infinity, whatever the balance says.
    assert_eq!(savings_rate(&summary("0", "500")), Decimal::ZERO);
    assert_eq!(savings_rate(&summary("0", "-500")), Decimal::ZERO);
}

#[test]
fn negative_balance_gives_negative_rate() {
    assert_eq!(savings_rate(&summary("100", "-50")), dec("-50.0"));
}

#[test]
fn goal_progress_is_unclamped() {
    assert_eq!(goal_progress(&goal("50", "100")), dec("50"));
    // Over-funded goals read above 100; callers render >=100 as complete.
    assert_eq!(goal_progress(&goal("150", "100")), dec("150"));
}

#[test]
fn average_progress_of_empty_list_is_zero() {
    assert_eq!(average_goal_progress(&[]), Decimal::ZERO);
}

#[test]
fn average_progress_divides_by_count() {
    let goals = [goal("50", "100"), goal("100", "100")];
    assert_eq!(average_goal_progress(&goals), dec("75"));
}
