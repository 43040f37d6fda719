// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    BillRecord, BillStatus, ExpenseRecord, IncomeRecord, PeriodSummary, SavingGoal,
};
use crate::store::{get_setting, set_setting};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub const KEY_STICKY: &str = "achievements.sticky";
const KEY_UNLOCKED_AT_PREFIX: &str = "achievements.unlocked_at.";

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Evaluate the badge catalog against the current period lists and streak.
///
/// Pure and recomputed fresh each time: with stickiness off, a badge re-locks
/// the moment its condition stops holding (un-pay every bill and "Bill Payer"
/// vanishes).
pub fn evaluate(
    income: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    bills: &[BillRecord],
    savings: &[SavingGoal],
    summary: &PeriodSummary,
    streak: u32,
) -> Vec<Achievement> {
    let thousand = Decimal::from(1000);
    let ten_thousand = Decimal::from(10000);
    let badge = |id, title, description, unlocked| Achievement {
        id,
        title,
        description,
        unlocked,
    };
    vec![
        badge(
            "first-income",
            "First Income",
            "Added your first income",
            !income.is_empty(),
        ),
        badge(
            "expense-tracker",
            "Expense Tracker",
            "Started tracking expenses",
            !expenses.is_empty(),
        ),
        badge(
            "bill-payer",
            "Bill Payer",
            "Paid your first bill",
            bills.iter().any(|b| b.status == BillStatus::Paid),
        ),
        badge(
            "goal-setter",
            "Goal Setter",
            "Created a savings goal",
            !savings.is_empty(),
        ),
        badge("week-streak", "Week Warrior", "7 day streak", streak >= 7),
        badge(
            "month-streak",
            "Monthly Master",
            "30 day streak",
            streak >= 30,
        ),
        // Both balance thresholds are strict: a balance of exactly 1000 or
        // 10000 stays locked.
        badge("saver-1k", "Saver", "Saved 1,000", summary.balance > thousand),
        badge(
            "big-saver",
            "Big Saver",
            "Saved 10,000",
            summary.balance > ten_thousand,
        ),
        badge(
            "goal-achiever",
            "Goal Achiever",
            "Completed a savings goal",
            savings
                .iter()
                .any(|s| s.current_amount >= s.target_amount),
        ),
    ]
}

pub fn sticky_enabled(conn: &Connection) -> Result<bool> {
    Ok(get_setting(conn, KEY_STICKY)?.as_deref() == Some("true"))
}

pub fn set_sticky(conn: &Connection, enabled: bool) -> Result<()> {
    set_setting(conn, KEY_STICKY, if enabled { "true" } else { "false" })
}

/// With stickiness on, record first unlocks and keep previously unlocked
/// badges unlocked even when their condition no longer holds. A no-op when
/// stickiness is off.
pub fn apply_sticky(conn: &Connection, badges: &mut [Achievement]) -> Result<()> {
    if !sticky_enabled(conn)? {
        return Ok(());
    }
    for badge in badges.iter_mut() {
        let key = format!("{}{}", KEY_UNLOCKED_AT_PREFIX, badge.id);
        if badge.unlocked {
            if get_setting(conn, &key)?.is_none() {
                set_setting(conn, &key, &chrono::Utc::now().to_rfc3339())?;
            }
        } else if get_setting(conn, &key)?.is_some() {
            badge.unlocked = true;
        }
    }
    Ok(())
}

/// First-unlock timestamp for a badge id, if stickiness ever recorded one.
pub fn unlocked_at(conn: &Connection, id: &str) -> Result<Option<String>> {
    get_setting(conn, &format!("{}{}", KEY_UNLOCKED_AT_PREFIX, id))
}
