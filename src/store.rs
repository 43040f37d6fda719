// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    BillRecord, BillStatus, ExpenseCategory, ExpenseRecord, IncomeRecord, Period, SavingGoal,
};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::str::FromStr;

// ---- settings key-value store ----
//
// Read/write contract: each key holds one UTF-8 value; a missing key reads as
// None. Keys in use: streak.last_login_date (YYYY-MM-DD), streak.count,
// achievements.sticky ("true"/"false"), achievements.unlocked_at.<id>,
// api.base_url, api.token, api.user_email.

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete_setting(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key=?1", params![key])?;
    Ok(())
}

// ---- validation ----
//
// Form-level checks run before any write (and before any network call when the
// remote client is in play).

fn require_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("Missing required field '{}'", field);
    }
    Ok(())
}

fn require_nonnegative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        bail!("Field '{}' must be >= 0 (got {})", field, value);
    }
    Ok(())
}

fn parse_amount(field: &str, s: &str) -> Result<Decimal> {
    Decimal::from_str(s).with_context(|| format!("Invalid {} amount '{}'", field, s))
}

// ---- income ----

pub fn add_income(
    conn: &Connection,
    source: &str,
    amount: Decimal,
    date: NaiveDate,
    period: Period,
) -> Result<i64> {
    require_nonempty("source", source)?;
    require_nonnegative("amount", amount)?;
    conn.execute(
        "INSERT INTO income(source, amount, date, month, year) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            source,
            amount.to_string(),
            date.to_string(),
            period.month,
            period.year
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn incomes_for(conn: &Connection, period: Period) -> Result<Vec<IncomeRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, source, amount, date FROM income WHERE month=?1 AND year=?2 ORDER BY date, id",
    )?;
    let mut rows = stmt.query(params![period.month, period.year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let amount: String = r.get(2)?;
        let date: String = r.get(3)?;
        out.push(IncomeRecord {
            id: r.get(0)?,
            source: r.get(1)?,
            amount: parse_amount("income", &amount)?,
            date: crate::utils::parse_date(&date)?,
            period,
        });
    }
    Ok(out)
}

pub fn delete_income(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM income WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Income {} not found", id);
    }
    Ok(())
}

// ---- expenses ----

pub fn add_expense(
    conn: &Connection,
    category: ExpenseCategory,
    amount: Decimal,
    description: &str,
    date: NaiveDate,
    period: Period,
) -> Result<i64> {
    require_nonempty("description", description)?;
    require_nonnegative("amount", amount)?;
    conn.execute(
        "INSERT INTO expenses(category, amount, description, date, month, year)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            category.as_str(),
            amount.to_string(),
            description,
            date.to_string(),
            period.month,
            period.year
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn expenses_for(conn: &Connection, period: Period) -> Result<Vec<ExpenseRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, category, amount, description, date FROM expenses
         WHERE month=?1 AND year=?2 ORDER BY date, id",
    )?;
    let mut rows = stmt.query(params![period.month, period.year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let category: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let date: String = r.get(4)?;
        out.push(ExpenseRecord {
            id: r.get(0)?,
            category: category.parse()?,
            amount: parse_amount("expense", &amount)?,
            description: r.get(3)?,
            date: crate::utils::parse_date(&date)?,
            period,
        });
    }
    Ok(out)
}

pub fn delete_expense(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Expense {} not found", id);
    }
    Ok(())
}

// ---- bills ----

pub fn add_bill(
    conn: &Connection,
    name: &str,
    amount: Decimal,
    due_date: NaiveDate,
    status: BillStatus,
    period: Period,
) -> Result<i64> {
    require_nonempty("name", name)?;
    require_nonnegative("amount", amount)?;
    conn.execute(
        "INSERT INTO bills(name, amount, due_date, status, month, year)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            name,
            amount.to_string(),
            due_date.to_string(),
            status.as_str(),
            period.month,
            period.year
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn bills_for(conn: &Connection, period: Period) -> Result<Vec<BillRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, amount, due_date, status FROM bills
         WHERE month=?1 AND year=?2 ORDER BY due_date, id",
    )?;
    let mut rows = stmt.query(params![period.month, period.year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let amount: String = r.get(2)?;
        let due: String = r.get(3)?;
        let status: String = r.get(4)?;
        out.push(BillRecord {
            id: r.get(0)?,
            name: r.get(1)?,
            amount: parse_amount("bill", &amount)?,
            due_date: crate::utils::parse_date(&due)?,
            status: status.parse()?,
            period,
        });
    }
    Ok(out)
}

/// Status is the only mutable bill field.
pub fn set_bill_status(conn: &Connection, id: i64, status: BillStatus) -> Result<()> {
    let n = conn.execute(
        "UPDATE bills SET status=?1 WHERE id=?2",
        params![status.as_str(), id],
    )?;
    if n == 0 {
        bail!("Bill {} not found", id);
    }
    Ok(())
}

pub fn delete_bill(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM bills WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Bill {} not found", id);
    }
    Ok(())
}

// ---- savings ----

pub fn add_saving(
    conn: &Connection,
    goal: &str,
    target_amount: Decimal,
    current_amount: Decimal,
    period: Period,
) -> Result<i64> {
    require_nonempty("goal", goal)?;
    if target_amount <= Decimal::ZERO {
        bail!(
            "Field 'target_amount' must be > 0 (got {}); progress divides by it",
            target_amount
        );
    }
    require_nonnegative("current_amount", current_amount)?;
    conn.execute(
        "INSERT INTO savings(goal, target_amount, current_amount, month, year)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            goal,
            target_amount.to_string(),
            current_amount.to_string(),
            period.month,
            period.year
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn savings_for(conn: &Connection, period: Period) -> Result<Vec<SavingGoal>> {
    let mut stmt = conn.prepare(
        "SELECT id, goal, target_amount, current_amount FROM savings
         WHERE month=?1 AND year=?2 ORDER BY id",
    )?;
    let mut rows = stmt.query(params![period.month, period.year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let target: String = r.get(2)?;
        let current: String = r.get(3)?;
        out.push(SavingGoal {
            id: r.get(0)?,
            goal: r.get(1)?,
            target_amount: parse_amount("target", &target)?,
            current_amount: parse_amount("current", &current)?,
            period,
        });
    }
    Ok(out)
}

pub fn set_saving_amount(conn: &Connection, id: i64, current_amount: Decimal) -> Result<()> {
    require_nonnegative("current_amount", current_amount)?;
    let n = conn.execute(
        "UPDATE savings SET current_amount=?1 WHERE id=?2",
        params![current_amount.to_string(), id],
    )?;
    if n == 0 {
        bail!("Saving goal {} not found", id);
    }
    Ok(())
}

pub fn delete_saving(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM savings WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Saving goal {} not found", id);
    }
    Ok(())
}

/// Replace every local row in `period` with the server's copy. Runs in one
/// transaction so a failed pull leaves the previous (stale) rows intact.
pub fn replace_period(
    conn: &mut Connection,
    period: Period,
    income: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    bills: &[BillRecord],
    savings: &[SavingGoal],
) -> Result<()> {
    let tx = conn.transaction()?;
    for table in ["income", "expenses", "bills", "savings"] {
        tx.execute(
            &format!("DELETE FROM {} WHERE month=?1 AND year=?2", table),
            params![period.month, period.year],
        )?;
    }
    for r in income {
        tx.execute(
            "INSERT INTO income(source, amount, date, month, year) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                r.source,
                r.amount.to_string(),
                r.date.to_string(),
                period.month,
                period.year
            ],
        )?;
    }
    for r in expenses {
        tx.execute(
            "INSERT INTO expenses(category, amount, description, date, month, year)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                r.category.as_str(),
                r.amount.to_string(),
                r.description,
                r.date.to_string(),
                period.month,
                period.year
            ],
        )?;
    }
    for r in bills {
        tx.execute(
            "INSERT INTO bills(name, amount, due_date, status, month, year)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                r.name,
                r.amount.to_string(),
                r.due_date.to_string(),
                r.status.as_str(),
                period.month,
                period.year
            ],
        )?;
    }
    for r in savings {
        tx.execute(
            "INSERT INTO savings(goal, target_amount, current_amount, month, year)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                r.goal,
                r.target_amount.to_string(),
                r.current_amount.to_string(),
                period.month,
                period.year
            ],
        )?;
    }
    tx.commit()?;
    Ok(())
}
