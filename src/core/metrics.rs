// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{PeriodSummary, SavingGoal};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DerivedMetrics {
    pub savings_rate: Decimal,
    pub average_goal_progress: Decimal,
}

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `(balance / income) * 100`, one decimal place. Zero income reads as a 0%
/// rate regardless of balance.
pub fn savings_rate(summary: &PeriodSummary) -> Decimal {
    if summary.total_income.is_zero() {
        return Decimal::ZERO;
    }
    (summary.balance / summary.total_income * HUNDRED).round_dp(1)
}

/// `(current / target) * 100`, unclamped: over-funded goals read above 100.
/// Target is guaranteed nonzero by record validation.
pub fn goal_progress(goal: &SavingGoal) -> Decimal {
    goal.current_amount / goal.target_amount * HUNDRED
}

/// Mean per-goal progress; the divisor is `max(count, 1)` so an empty list
/// reads as 0 rather than dividing by zero.
pub fn average_goal_progress(savings: &[SavingGoal]) -> Decimal {
    let total: Decimal = savings.iter().map(goal_progress).sum();
    total / Decimal::from(savings.len().max(1))
}

pub fn derive(summary: &PeriodSummary, savings: &[SavingGoal]) -> DerivedMetrics {
    DerivedMetrics {
        savings_rate: savings_rate(summary),
        average_goal_progress: average_goal_progress(savings),
    }
}
