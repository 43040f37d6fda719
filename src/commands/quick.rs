// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BillStatus, ExpenseCategory, Period};
use crate::store;
use crate::utils::parse_decimal;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::Connection;
use rust_decimal::Decimal;

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:,\d+)*(?:\.\d{1,2})?)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickEntry {
    Income { source: String, amount: Decimal },
    Expense {
        category: ExpenseCategory,
        amount: Decimal,
        description: String,
    },
    Bill {
        name: String,
        amount: Decimal,
        status: BillStatus,
    },
}

const CATEGORY_KEYWORDS: [(ExpenseCategory, &[&str]); 7] = [
    (
        ExpenseCategory::Food,
        &["food", "restaurant", "lunch", "dinner", "breakfast", "snack", "meal"],
    ),
    (
        ExpenseCategory::Transport,
        &["transport", "taxi", "uber", "bus", "train", "petrol", "fuel"],
    ),
    (
        ExpenseCategory::Shopping,
        &["shopping", "clothes", "amazon", "online"],
    ),
    (
        ExpenseCategory::Entertainment,
        &["movie", "entertainment", "game", "fun"],
    ),
    (
        ExpenseCategory::Utilities,
        &["electricity", "water", "gas", "internet", "phone", "mobile"],
    ),
    (
        ExpenseCategory::Healthcare,
        &["doctor", "medicine", "hospital", "health"],
    ),
    (
        ExpenseCategory::Education,
        &["education", "course", "book", "school", "college"],
    ),
];

/// Parse a free-form phrase into a record: keywords pick the entry type and
/// expense category, the first number is the amount, the phrase itself becomes
/// the description.
pub fn parse_phrase(phrase: &str) -> Result<QuickEntry> {
    let lower = phrase.to_lowercase();
    let amount = AMOUNT_RE
        .captures(&lower)
        .and_then(|c| c.get(1))
        .with_context(|| format!("No amount found in '{}'", phrase))?;
    let amount = parse_decimal(&amount.as_str().replace(',', ""))?;

    if ["income", "salary", "earned"].iter().any(|k| lower.contains(k)) {
        let source = if lower.contains("salary") { "Salary" } else { "Income" };
        return Ok(QuickEntry::Income {
            source: source.to_string(),
            amount,
        });
    }
    if lower.contains("bill") || lower.contains("paid") || lower.contains("pay ") {
        let status = if lower.contains("paid") {
            BillStatus::Paid
        } else {
            BillStatus::Pending
        };
        return Ok(QuickEntry::Bill {
            name: phrase.trim().to_string(),
            amount,
            status,
        });
    }
    let category = CATEGORY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(c, _)| *c)
        .unwrap_or(ExpenseCategory::Other);
    Ok(QuickEntry::Expense {
        category,
        amount,
        description: phrase.trim().to_string(),
    })
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let phrase = sub
        .get_many::<String>("phrase")
        .unwrap()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let today = chrono::Local::now().date_naive();
    let period = Period::current();
    match parse_phrase(&phrase)? {
        QuickEntry::Income { source, amount } => {
            let id = store::add_income(conn, &source, amount, today, period)?;
            println!("Recorded income #{}: {} from '{}'", id, amount, source);
        }
        QuickEntry::Expense {
            category,
            amount,
            description,
        } => {
            let id = store::add_expense(conn, category, amount, &description, today, period)?;
            println!("Recorded expense #{}: {} on {}", id, amount, category);
        }
        QuickEntry::Bill {
            name,
            amount,
            status,
        } => {
            let id = store::add_bill(conn, &name, amount, today, status, period)?;
            println!("Recorded bill #{}: {} ({})", id, amount, status);
        }
    }
    Ok(())
}
