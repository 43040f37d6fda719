// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::core::{streak, summary};
use crate::models::{BillRecord, ExpenseRecord, IncomeRecord, SavingGoal};
use crate::remote::{
    ApiClient, ApiError, KEY_BASE_URL, KEY_USER_EMAIL, WireBill, WireExpense, WireIncome,
    WireSaving, clear_session, save_session,
};
use crate::store::{self, get_setting};
use crate::utils::{parse_decimal, period_from};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    let result = match m.subcommand() {
        Some(("login", sub)) => login(conn, sub, false),
        Some(("register", sub)) => login(conn, sub, true),
        Some(("whoami", _)) => whoami(conn),
        Some(("logout", _)) => logout(conn),
        Some(("pull", sub)) => pull(conn, sub),
        Some(("push", sub)) => push(conn, sub),
        Some(("bill-status", sub)) => bill_status(conn, sub),
        Some(("set-saving", sub)) => set_saving(conn, sub),
        _ => Ok(()),
    };
    // A rejected token means the session is over: discard it so the next call
    // starts clean, exactly as the web client drops its token on 401.
    if let Err(e) = &result {
        if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized)) {
            clear_session(conn)?;
            eprintln!("Session cleared; log in again.");
        }
    }
    result
}

fn base_url(conn: &Connection, sub: &clap::ArgMatches) -> Result<String> {
    if let Some(url) = sub.get_one::<String>("url") {
        return Ok(url.clone());
    }
    get_setting(conn, KEY_BASE_URL)?
        .context("No API base URL stored; pass --url on first login")
}

fn login(conn: &Connection, sub: &clap::ArgMatches, register: bool) -> Result<()> {
    let url = base_url(conn, sub)?;
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let mut client = ApiClient::new(&url, None)?;
    let auth = if register {
        client.register(email, password)?
    } else {
        client.login(email, password)?
    };
    save_session(conn, &url, &auth)?;
    // A successful authentication counts as today's visit for the streak, and
    // overwrites the stored last-login date.
    let count = streak::advance(conn, chrono::Local::now().date_naive())?;
    println!("Logged in as {} (streak: {} days)", auth.user.email, count);
    Ok(())
}

fn whoami(conn: &Connection) -> Result<()> {
    let client = ApiClient::from_settings(conn)?;
    let user = client.me()?;
    println!("{} ({})", user.email, user.id);
    Ok(())
}

fn logout(conn: &Connection) -> Result<()> {
    let email = get_setting(conn, KEY_USER_EMAIL)?;
    clear_session(conn)?;
    match email {
        Some(e) => println!("Logged out {}", e),
        None => println!("Logged out"),
    }
    Ok(())
}

fn pull(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub)?;
    let client = ApiClient::from_settings(conn)?;

    // Join-all fetch: if any of the four list fetches fails the local rows are
    // left untouched (stale data beats silently dropped records).
    let lists = match client.fetch_period(period) {
        Ok(lists) => lists,
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            eprintln!("Refresh failed; keeping local records for {}.", period);
            return Err(e.into());
        }
    };

    let income: Vec<IncomeRecord> = lists
        .income
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_>>()?;
    let expenses: Vec<ExpenseRecord> = lists
        .expenses
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_>>()?;
    let bills: Vec<BillRecord> = lists
        .bills
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_>>()?;
    let savings: Vec<SavingGoal> = lists
        .savings
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_>>()?;

    // The server's summary is authoritative; the local computation is a
    // prediction. Report drift instead of trusting either silently.
    let server_summary = client.fetch_summary(period)?;
    let local_summary = summary::summarize(&income, &expenses, &bills, &savings);
    if server_summary != local_summary {
        eprintln!(
            "Summary drift for {}: server balance {}, locally computed {}",
            period, server_summary.balance, local_summary.balance
        );
    }

    let n = income.len() + expenses.len() + bills.len() + savings.len();
    store::replace_period(conn, period, &income, &expenses, &bills, &savings)?;
    println!("Pulled {} records for {}", n, period);
    Ok(())
}

fn push(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub)?;
    let client = ApiClient::from_settings(conn)?;

    // Clear the server's period first so a push is a replace, not an append.
    let existing = client.fetch_period(period)?;
    for r in &existing.income {
        client.delete("income", &r.id)?;
    }
    for r in &existing.expenses {
        client.delete("expenses", &r.id)?;
    }
    for r in &existing.bills {
        client.delete("bills", &r.id)?;
    }
    for r in &existing.savings {
        client.delete("savings", &r.id)?;
    }

    let month = period.month_name().to_string();
    let mut n = 0usize;
    for r in store::incomes_for(conn, period)? {
        client.create_income(&WireIncome {
            id: String::new(),
            source: r.source,
            amount: r.amount,
            date: r.date.to_string(),
            month: month.clone(),
            year: period.year,
        })?;
        n += 1;
    }
    for r in store::expenses_for(conn, period)? {
        client.create_expense(&WireExpense {
            id: String::new(),
            category: r.category.as_str().to_string(),
            amount: r.amount,
            description: r.description,
            date: r.date.to_string(),
            month: month.clone(),
            year: period.year,
        })?;
        n += 1;
    }
    for r in store::bills_for(conn, period)? {
        client.create_bill(&WireBill {
            id: String::new(),
            name: r.name,
            amount: r.amount,
            due_date: r.due_date.to_string(),
            status: r.status.as_str().to_string(),
            month: month.clone(),
            year: period.year,
        })?;
        n += 1;
    }
    for r in store::savings_for(conn, period)? {
        client.create_saving(&WireSaving {
            id: String::new(),
            goal: r.goal,
            target_amount: r.target_amount,
            current_amount: r.current_amount,
            month: month.clone(),
            year: period.year,
        })?;
        n += 1;
    }
    println!("Pushed {} records for {}", n, period);
    Ok(())
}

fn bill_status(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let status = sub.get_one::<String>("status").unwrap();
    let client = ApiClient::from_settings(conn)?;
    client.set_bill_status(id, status)?;
    println!("Server bill {} is now {}", id, status);
    Ok(())
}

fn set_saving(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let client = ApiClient::from_settings(conn)?;
    client.set_saving_amount(id, amount)?;
    println!("Server goal {} saved amount set to {}", id, amount);
    Ok(())
}
