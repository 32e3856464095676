// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::error::LedgerError;
use pocketledger::{accounts, daily, db, tx};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> (Connection, i64) {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let acct = accounts::create(&conn, "sam@example.com", "Sam Tester", "DE", None).unwrap();
    let id = acct.id;
    (conn, id)
}

#[test]
fn second_add_for_same_date_is_rejected_until_deleted() {
    let (conn, id) = setup();
    let d = date("2024-01-05");
    let t = daily::add_for_date(&conn, id, d, dec("10")).unwrap();
    assert_eq!(t.purpose, daily::DAILY_EXPENSE_PURPOSE);

    let err = daily::add_for_date(&conn, id, d, dec("10")).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateEntry(_)));

    // hard delete re-opens the date
    tx::delete(&conn, id, t.id).unwrap();
    daily::add_for_date(&conn, id, d, dec("12")).unwrap();
}

#[test]
fn check_reads_only_the_marker_transaction() {
    let (conn, id) = setup();
    let today = date("2024-02-14");

    let (used, reported) = daily::check_usage(&conn, id, None, today).unwrap();
    assert!(!used);
    assert_eq!(reported, today);

    // Mechanism B alone must not satisfy mechanism A's query
    daily::mark_used(&conn, id, today).unwrap();
    let (used, _) = daily::check_usage(&conn, id, None, today).unwrap();
    assert!(!used);

    daily::add_for_date(&conn, id, today, dec("5")).unwrap();
    let (used, _) = daily::check_usage(&conn, id, None, today).unwrap();
    assert!(used);
}

#[test]
fn marker_does_not_touch_the_ledger_date_set() {
    let (conn, id) = setup();
    daily::add_for_date(&conn, id, date("2024-02-14"), dec("5")).unwrap();
    assert!(daily::used_dates(&conn, id, 2024, 2).unwrap().is_empty());
}

#[test]
fn mark_used_is_idempotent_and_creates_the_ledger_lazily() {
    let (conn, id) = setup();
    let d = date("2024-03-09");
    daily::mark_used(&conn, id, d).unwrap();
    daily::mark_used(&conn, id, d).unwrap();
    daily::mark_used(&conn, id, date("2024-03-10")).unwrap();

    let used = daily::used_dates(&conn, id, 2024, 3).unwrap();
    assert_eq!(used, vec!["2024-03-09".to_string(), "2024-03-10".to_string()]);
}

#[test]
fn explicit_check_date_overrides_today() {
    let (conn, id) = setup();
    daily::add_for_date(&conn, id, date("2024-01-05"), dec("10")).unwrap();
    let (used, reported) =
        daily::check_usage(&conn, id, Some(date("2024-01-05")), date("2024-06-01")).unwrap();
    assert!(used);
    assert_eq!(reported, date("2024-01-05"));
}

#[test]
fn negative_amount_is_a_validation_error() {
    let (conn, id) = setup();
    let err = daily::add_for_date(&conn, id, date("2024-01-05"), dec("-3")).unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}
