// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{get_setting, set_setting};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;

pub const KEY_LAST_LOGIN: &str = "streak.last_login_date";
pub const KEY_COUNT: &str = "streak.count";

/// Consecutive-day usage streak, persisted in the settings table between
/// sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakState {
    pub last_login: Option<NaiveDate>,
    pub count: u32,
}

impl StreakState {
    pub fn load(conn: &Connection) -> Result<Self> {
        let last_login = match get_setting(conn, KEY_LAST_LOGIN)? {
            Some(s) => Some(crate::utils::parse_date(&s)?),
            None => None,
        };
        let count = get_setting(conn, KEY_COUNT)?
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);
        Ok(Self { last_login, count })
    }

    pub fn store(&self, conn: &Connection) -> Result<()> {
        if let Some(d) = self.last_login {
            set_setting(conn, KEY_LAST_LOGIN, &d.to_string())?;
        }
        set_setting(conn, KEY_COUNT, &self.count.to_string())?;
        Ok(())
    }

    /// The streak after a visit on `today`. The gap is a calendar-date
    /// difference (`NaiveDate` subtraction), never wall-clock milliseconds
    /// divided by 24h, so DST shifts and partial days cannot miscount.
    pub fn advanced(&self, today: NaiveDate) -> u32 {
        match self.last_login {
            None => 1,
            Some(last) => match (today - last).num_days() {
                0 => self.count,
                1 => self.count + 1,
                // Longer gaps, and a clock that moved backwards, both reset.
                _ => 1,
            },
        }
    }
}

/// Load, advance for a visit on `today`, persist, and return the new count.
/// `last_login_date` is overwritten with `today` unconditionally.
pub fn advance(conn: &Connection, today: NaiveDate) -> Result<u32> {
    let state = StreakState::load(conn)?;
    let count = state.advanced(today);
    StreakState {
        last_login: Some(today),
        count,
    }
    .store(conn)?;
    Ok(count)
}
