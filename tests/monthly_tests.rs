// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::{accounts, db, ledger};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> (Connection, i64) {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let acct = accounts::create(&conn, "pat@example.com", "Pat Tester", "GB", None).unwrap();
    let id = acct.id;
    (conn, id)
}

#[test]
fn income_set_is_idempotent() {
    let (conn, id) = setup();
    let first = ledger::get_or_set_monthly_income(&conn, id, 2024, 5, Some(dec("900"))).unwrap();
    let second = ledger::get_or_set_monthly_income(&conn, id, 2024, 5, Some(dec("900"))).unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.monthly_income, dec("900"));
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM monthly_ledgers WHERE account_id=?1",
            [id],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(n, 1);
}

#[test]
fn income_none_creates_zero_row_and_read_defaults_to_zero() {
    let (conn, id) = setup();
    assert_eq!(ledger::monthly_income_for(&conn, id, 2024, 4).unwrap(), dec("0"));
    let led = ledger::get_or_set_monthly_income(&conn, id, 2024, 4, None).unwrap();
    assert_eq!(led.monthly_income, dec("0"));
}

#[test]
fn supplied_income_overwrites_existing_row() {
    let (conn, id) = setup();
    ledger::get_or_set_monthly_income(&conn, id, 2024, 5, Some(dec("900"))).unwrap();
    let led = ledger::get_or_set_monthly_income(&conn, id, 2024, 5, Some(dec("1200"))).unwrap();
    assert_eq!(led.monthly_income, dec("1200"));
}

#[test]
fn zero_is_a_real_income_value_not_a_sentinel() {
    let (conn, id) = setup();
    ledger::get_or_set_monthly_income(&conn, id, 2024, 5, Some(dec("900"))).unwrap();
    let led = ledger::get_or_set_monthly_income(&conn, id, 2024, 5, Some(dec("0"))).unwrap();
    assert_eq!(led.monthly_income, dec("0"));
}

#[test]
fn goal_fallback_looks_back_exactly_one_month() {
    let (conn, id) = setup();
    ledger::set_monthly_goal(&conn, id, 2024, 1, dec("800"), dec("300")).unwrap();

    let exact = ledger::get_effective_monthly_goal(&conn, id, 2024, 1).unwrap();
    assert!(exact.is_current_month);
    assert_eq!(exact.monthly_income, dec("800"));

    let fallback = ledger::get_effective_monthly_goal(&conn, id, 2024, 2).unwrap();
    assert!(!fallback.is_current_month);
    assert_eq!(fallback.monthly_income, dec("800"));
    assert_eq!(fallback.estimated_expenses, dec("300"));

    // two months out: zeros, even though January has data
    let gone = ledger::get_effective_monthly_goal(&conn, id, 2024, 3).unwrap();
    assert!(!gone.is_current_month);
    assert_eq!(gone.monthly_income, dec("0"));
    assert_eq!(gone.estimated_expenses, dec("0"));
}

#[test]
fn goal_fallback_rolls_over_january() {
    let (conn, id) = setup();
    ledger::set_monthly_goal(&conn, id, 2023, 12, dec("700"), dec("250")).unwrap();
    let jan = ledger::get_effective_monthly_goal(&conn, id, 2024, 1).unwrap();
    assert!(!jan.is_current_month);
    assert_eq!(jan.monthly_income, dec("700"));
}

#[test]
fn goal_upsert_overwrites_both_figures() {
    let (conn, id) = setup();
    ledger::set_monthly_goal(&conn, id, 2024, 6, dec("100"), dec("50")).unwrap();
    let g = ledger::set_monthly_goal(&conn, id, 2024, 6, dec("150"), dec("75")).unwrap();
    assert_eq!(g.monthly_income, dec("150"));
    assert_eq!(g.estimated_expenses, dec("75"));
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM monthly_goals WHERE account_id=?1",
            [id],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(n, 1);
}
