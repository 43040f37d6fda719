// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    BillRecord, ExpenseRecord, IncomeRecord, Period, PeriodSummary, SavingGoal, User,
};
use crate::store::{delete_setting, get_setting, set_setting};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const KEY_BASE_URL: &str = "api.base_url";
pub const KEY_TOKEN: &str = "api.token";
pub const KEY_USER_EMAIL: &str = "api.user_email";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not logged in; run 'fintrack remote login' first")]
    NotLoggedIn,
    #[error("unauthorized: the record store rejected the token")]
    Unauthorized,
    #[error("record store returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("record store request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// Wire DTOs mirror the record-store JSON: string ids, float amounts, month as
// an English name. Local row ids are assigned on insert, so wire ids are not
// carried over.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireIncome {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub source: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: String,
    pub month: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireExpense {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub date: String,
    pub month: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireBill {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub due_date: String,
    pub status: String,
    pub month: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireSaving {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub goal: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    pub month: String,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_bills: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_savings: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

impl TryFrom<WireIncome> for IncomeRecord {
    type Error = anyhow::Error;

    fn try_from(w: WireIncome) -> Result<Self> {
        Ok(IncomeRecord {
            id: 0,
            source: w.source,
            amount: w.amount,
            date: crate::utils::parse_date(&w.date)?,
            period: Period::from_month_name(&w.month, w.year)?,
        })
    }
}

impl TryFrom<WireExpense> for ExpenseRecord {
    type Error = anyhow::Error;

    fn try_from(w: WireExpense) -> Result<Self> {
        Ok(ExpenseRecord {
            id: 0,
            category: w.category.parse()?,
            amount: w.amount,
            description: w.description,
            date: crate::utils::parse_date(&w.date)?,
            period: Period::from_month_name(&w.month, w.year)?,
        })
    }
}

impl TryFrom<WireBill> for BillRecord {
    type Error = anyhow::Error;

    fn try_from(w: WireBill) -> Result<Self> {
        Ok(BillRecord {
            id: 0,
            name: w.name,
            amount: w.amount,
            due_date: crate::utils::parse_date(&w.due_date)?,
            status: w.status.parse()?,
            period: Period::from_month_name(&w.month, w.year)?,
        })
    }
}

impl TryFrom<WireSaving> for SavingGoal {
    type Error = anyhow::Error;

    fn try_from(w: WireSaving) -> Result<Self> {
        Ok(SavingGoal {
            id: 0,
            goal: w.goal,
            target_amount: w.target_amount,
            current_amount: w.current_amount,
            period: Period::from_month_name(&w.month, w.year)?,
        })
    }
}

impl From<WireSummary> for PeriodSummary {
    fn from(w: WireSummary) -> Self {
        PeriodSummary {
            total_income: w.total_income,
            total_expenses: w.total_expenses,
            total_bills: w.total_bills,
            total_savings: w.total_savings,
            balance: w.balance,
        }
    }
}

/// The four period lists as one joined result; a pull is all-or-nothing.
#[derive(Debug)]
pub struct PeriodLists {
    pub income: Vec<WireIncome>,
    pub expenses: Vec<WireExpense>,
    pub bills: Vec<WireBill>,
    pub savings: Vec<WireSaving>,
}

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        Ok(Self {
            http: crate::utils::http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Build a client from the base URL and token persisted in settings.
    pub fn from_settings(conn: &Connection) -> Result<Self> {
        let base_url = get_setting(conn, KEY_BASE_URL)?.ok_or(ApiError::NotLoggedIn)?;
        let token = get_setting(conn, KEY_TOKEN)?;
        Self::new(&base_url, token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::blocking::RequestBuilder) -> Result<reqwest::blocking::RequestBuilder, ApiError> {
        match &self.token {
            Some(t) => Ok(req.bearer_auth(t)),
            None => Err(ApiError::NotLoggedIn),
        }
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ApiError> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }

    // ---- auth ----

    pub fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.auth_post("/auth/login", email, password)
    }

    pub fn register(&mut self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.auth_post("/auth/register", email, password)
    }

    fn auth_post(
        &mut self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()?;
        let auth: AuthResponse = Self::check(resp)?.json()?;
        self.token = Some(auth.access_token.clone());
        Ok(auth)
    }

    pub fn me(&self) -> Result<User, ApiError> {
        let resp = self.authed(self.http.get(self.url("/auth/me")))?.send()?;
        Ok(Self::check(resp)?.json()?)
    }

    // ---- record lists ----

    fn list<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        period: Period,
    ) -> Result<Vec<T>, ApiError> {
        let resp = self
            .authed(self.http.get(self.url(&format!("/{}", resource))))?
            .query(&[
                ("month", period.month_name().to_string()),
                ("year", period.year.to_string()),
            ])
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }

    /// Fetch all four period lists concurrently and join the results. Any
    /// single failed fetch fails the whole refresh; there is no partial-result
    /// handling.
    pub fn fetch_period(&self, period: Period) -> Result<PeriodLists, ApiError> {
        std::thread::scope(|s| {
            let income = s.spawn(|| self.list::<WireIncome>("income", period));
            let expenses = s.spawn(|| self.list::<WireExpense>("expenses", period));
            let bills = s.spawn(|| self.list::<WireBill>("bills", period));
            let savings = s.spawn(|| self.list::<WireSaving>("savings", period));
            fn join<T>(h: std::thread::ScopedJoinHandle<'_, T>) -> T {
                h.join().unwrap_or_else(|p| std::panic::resume_unwind(p))
            }
            Ok(PeriodLists {
                income: join(income)?,
                expenses: join(expenses)?,
                bills: join(bills)?,
                savings: join(savings)?,
            })
        })
    }

    /// The server-computed summary. The server is the source of truth; the
    /// locally computed summary is a prediction to be checked against this.
    pub fn fetch_summary(&self, period: Period) -> Result<PeriodSummary, ApiError> {
        let resp = self
            .authed(self.http.get(self.url("/summary")))?
            .query(&[
                ("month", period.month_name().to_string()),
                ("year", period.year.to_string()),
            ])
            .send()?;
        let wire: WireSummary = Self::check(resp)?.json()?;
        Ok(wire.into())
    }

    // ---- record mutation ----

    fn create<T: Serialize>(&self, resource: &str, body: &T) -> Result<(), ApiError> {
        let resp = self
            .authed(self.http.post(self.url(&format!("/{}", resource))))?
            .json(body)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    pub fn create_income(&self, r: &WireIncome) -> Result<(), ApiError> {
        self.create("income", r)
    }

    pub fn create_expense(&self, r: &WireExpense) -> Result<(), ApiError> {
        self.create("expenses", r)
    }

    pub fn create_bill(&self, r: &WireBill) -> Result<(), ApiError> {
        self.create("bills", r)
    }

    pub fn create_saving(&self, r: &WireSaving) -> Result<(), ApiError> {
        self.create("savings", r)
    }

    pub fn delete(&self, resource: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .authed(self.http.delete(self.url(&format!("/{}/{}", resource, id))))?
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    pub fn set_bill_status(&self, id: &str, status: &str) -> Result<(), ApiError> {
        let resp = self
            .authed(self.http.patch(self.url(&format!("/bills/{}/status", id))))?
            .query(&[("status", status)])
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    pub fn set_saving_amount(&self, id: &str, current_amount: Decimal) -> Result<(), ApiError> {
        let resp = self
            .authed(self.http.patch(self.url(&format!("/savings/{}", id))))?
            .query(&[("current_amount", current_amount.to_string())])
            .send()?;
        Self::check(resp)?;
        Ok(())
    }
}

// ---- session persistence ----

pub fn save_session(conn: &Connection, base_url: &str, auth: &AuthResponse) -> Result<()> {
    set_setting(conn, KEY_BASE_URL, base_url.trim_end_matches('/'))?;
    set_setting(conn, KEY_TOKEN, &auth.access_token)?;
    set_setting(conn, KEY_USER_EMAIL, &auth.user.email)?;
    Ok(())
}

/// Discard the stored token. Called on explicit logout and whenever the server
/// answers 401.
pub fn clear_session(conn: &Connection) -> Result<()> {
    delete_setting(conn, KEY_TOKEN)?;
    delete_setting(conn, KEY_USER_EMAIL)?;
    Ok(())
}
