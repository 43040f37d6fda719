// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::core::streak::{self, KEY_COUNT, KEY_LAST_LOGIN, StreakState};
use fintrack::store::{get_setting, set_setting};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    fintrack::db::init_schema(&mut conn).unwrap();
    conn
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn first_visit_starts_at_one() {
    let state = StreakState {
        last_login: None,
        count: 1,
    };
    assert_eq!(state.advanced(d(2025, 8, 20)), 1);
}

#[test]
fn consecutive_day_increments() {
    let state = StreakState {
        last_login: Some(d(2025, 8, 19)),
        count: 4,
    };
    assert_eq!(state.advanced(d(2025, 8, 20)), 5);
}

#[test]
fn same_day_is_unchanged() {
    let state = StreakState {
        last_login: Some(d(2025, 8, 20)),
        count: 4,
    };
    assert_eq!(state.advanced(d(2025, 8, 20)), 4);
}

#[test]
fn gap_resets_to_one() {
    let state = StreakState {
        last_login: Some(d(2025, 8, 17)),
        count: 9,
    };
    assert_eq!(state.advanced(d(2025, 8, 20)), 1);
}

#[test]
fn month_boundary_counts_as_one_day() {
    // Calendar-date difference, not elapsed-hours arithmetic.
    let state = StreakState {
        last_login: Some(d(2025, 7, 31)),
        count: 2,
    };
    assert_eq!(state.advanced(d(2025, 8, 1)), 3);
}

#[test]
fn advance_persists_today_and_count() {
    let conn = setup();
    set_setting(&conn, KEY_LAST_LOGIN, "2025-08-19").unwrap();
    set_setting(&conn, KEY_COUNT, "6").unwrap();

    let count = streak::advance(&conn, d(2025, 8, 20)).unwrap();
    assert_eq!(count, 7);
    assert_eq!(
        get_setting(&conn, KEY_LAST_LOGIN).unwrap().as_deref(),
        Some("2025-08-20")
    );
    assert_eq!(get_setting(&conn, KEY_COUNT).unwrap().as_deref(), Some("7"));

    // A second visit the same day leaves the count alone.
    let again = streak::advance(&conn, d(2025, 8, 20)).unwrap();
    assert_eq!(again, 7);
}

#[test]
fn missing_count_defaults_to_one() {
    let conn = setup();
    set_setting(&conn, KEY_LAST_LOGIN, "2025-08-20").unwrap();
    let count = streak::advance(&conn, d(2025, 8, 20)).unwrap();
    assert_eq!(count, 1);
}
