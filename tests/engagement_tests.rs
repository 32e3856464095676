// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::error::LedgerError;
use pocketledger::{accounts, db, engagement};
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
    let acct = accounts::create(&conn, "kim@example.com", "Kim Tester", "JP", None).unwrap();
    let id = acct.id;
    (conn, id)
}

#[test]
fn one_savings_goal_per_month() {
    let (conn, id) = setup();
    let g = engagement::add_savings_goal(&conn, id, dec("300"), date("2024-05-17")).unwrap();
    // normalized to the first of the month
    assert_eq!(g.month, date("2024-05-01"));

    let err = engagement::add_savings_goal(&conn, id, dec("400"), date("2024-05-02")).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateEntry(_)));

    engagement::add_savings_goal(&conn, id, dec("400"), date("2024-06-01")).unwrap();
    assert_eq!(engagement::list_savings_goals(&conn, id).unwrap().len(), 2);
}

#[test]
fn progress_flips_achieved_at_the_target() {
    let (conn, id) = setup();
    let g = engagement::add_savings_goal(&conn, id, dec("300"), date("2024-05-01")).unwrap();

    let g = engagement::update_savings_progress(&conn, id, g.id, dec("120")).unwrap();
    assert!(!g.is_achieved);
    let g = engagement::update_savings_progress(&conn, id, g.id, dec("300")).unwrap();
    assert!(g.is_achieved);
}

#[test]
fn completing_a_challenge_awards_points_once() {
    let (conn, id) = setup();
    let c = engagement::add_challenge(&conn, "No-spend week", "Spend nothing for 7 days", 50, dec("0"))
        .unwrap();
    engagement::join_challenge(&conn, id, c.id).unwrap();

    let total = engagement::complete_challenge(&conn, id, c.id).unwrap();
    assert_eq!(total, 50);

    let err = engagement::complete_challenge(&conn, id, c.id).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateEntry(_)));
    assert_eq!(engagement::total_points(&conn, id).unwrap(), 50);

    let notes = engagement::list_notifications(&conn, id).unwrap();
    assert_eq!(notes.len(), 1);
    assert!(!notes[0].is_read);
    engagement::mark_notification_read(&conn, id, notes[0].id).unwrap();
    assert!(engagement::list_notifications(&conn, id).unwrap()[0].is_read);
}

#[test]
fn completing_an_unjoined_challenge_is_not_found() {
    let (conn, id) = setup();
    let c = engagement::add_challenge(&conn, "Save 100", "Put aside 100", 10, dec("100")).unwrap();
    let err = engagement::complete_challenge(&conn, id, c.id).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
}

#[test]
fn points_row_is_created_lazily_at_zero() {
    let (conn, id) = setup();
    assert_eq!(engagement::total_points(&conn, id).unwrap(), 0);
    // a second read hits the existing row
    assert_eq!(engagement::total_points(&conn, id).unwrap(), 0);
}
