// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::models::TxKind;
use pocketledger::{accounts, db, ledger, stats, tx};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> (Connection, pocketledger::models::Account) {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let acct = accounts::create(&conn, "ana@example.com", "Ana Tester", "IN", None).unwrap();
    accounts::setup(
        &conn,
        acct.id,
        Some(dec("100")),
        None,
        None,
        Some("4242424242424242"),
        Some("ANA TESTER"),
    )
    .unwrap();
    let acct = accounts::get_by_email(&conn, "ana@example.com").unwrap();
    (conn, acct)
}

#[test]
fn dashboard_reports_balance_income_and_today_spend() {
    let (conn, acct) = setup();
    let today = date("2024-02-10");
    ledger::get_or_set_monthly_income(&conn, acct.id, 2024, 1, Some(dec("500"))).unwrap();
    tx::add(&conn, acct.id, TxKind::Expense, dec("30"), "", date("2024-01-12")).unwrap();
    tx::add(&conn, acct.id, TxKind::Expense, dec("7.25"), "coffee", today).unwrap();
    tx::add(&conn, acct.id, TxKind::Expense, dec("2.75"), "bus", today).unwrap();
    tx::add(&conn, acct.id, TxKind::Income, dec("15"), "refund", today).unwrap();

    let snap = stats::dashboard_snapshot(&conn, &acct, today).unwrap();
    // 100 + 500 - 30 (January) + 15 - 10 (February, no ledger)
    assert_eq!(snap.current_balance, dec("575"));
    assert_eq!(snap.total_monthly_income, dec("500"));
    assert_eq!(snap.today_spending, dec("10.00"));
    assert_eq!(snap.card_number.as_deref(), Some("4242424242424242"));
    assert_eq!(snap.card_holder_name.as_deref(), Some("ANA TESTER"));
}

#[test]
fn monthly_statistics_counts_and_sums_one_month_only() {
    let (conn, acct) = setup();
    tx::add(&conn, acct.id, TxKind::Income, dec("50"), "", date("2024-01-10")).unwrap();
    tx::add(&conn, acct.id, TxKind::Expense, dec("30"), "", date("2024-01-12")).unwrap();
    tx::add(&conn, acct.id, TxKind::Expense, dec("99"), "", date("2024-02-01")).unwrap();

    let s = stats::monthly_statistics(&conn, &acct, 2024, 1, Some(dec("500")), date("2024-02-10"))
        .unwrap();
    assert_eq!(s.monthly_income, dec("500"));
    assert_eq!(s.total_transactions, 2);
    assert_eq!(s.total_addon, dec("50"));
    assert_eq!(s.total_expenses, dec("30"));
    // bounded cumulative balance through January
    assert_eq!(s.current_balance, dec("620"));
    assert_eq!(s.transactions.len(), 2);
    assert!(s.transactions[0].date >= s.transactions[1].date);
}

#[test]
fn statistics_without_override_seeds_ledger_from_the_goal() {
    let (conn, acct) = setup();
    ledger::set_monthly_goal(&conn, acct.id, 2024, 2, dec("450"), dec("200")).unwrap();

    // March has no goal; the February goal carries over one month
    let s = stats::monthly_statistics(&conn, &acct, 2024, 3, None, date("2024-03-10")).unwrap();
    assert_eq!(s.monthly_income, dec("450"));
    let led = ledger::find_ledger(&conn, acct.id, 2024, 3).unwrap().unwrap();
    assert_eq!(led.monthly_income, dec("450"));
}

#[test]
fn statistics_without_override_keeps_existing_ledger_income() {
    let (conn, acct) = setup();
    ledger::set_monthly_goal(&conn, acct.id, 2024, 3, dec("450"), dec("200")).unwrap();
    ledger::get_or_set_monthly_income(&conn, acct.id, 2024, 3, Some(dec("700"))).unwrap();

    let s = stats::monthly_statistics(&conn, &acct, 2024, 3, None, date("2024-03-10")).unwrap();
    assert_eq!(s.monthly_income, dec("700"));
}

#[test]
fn history_view_orders_months_and_carries_the_initial_balance() {
    let (conn, acct) = setup();
    ledger::get_or_set_monthly_income(&conn, acct.id, 2024, 2, Some(dec("200"))).unwrap();
    ledger::get_or_set_monthly_income(&conn, acct.id, 2024, 1, Some(dec("500"))).unwrap();
    tx::add(&conn, acct.id, TxKind::Expense, dec("30"), "", date("2024-01-12")).unwrap();

    let h = stats::cumulative_balance_history(&conn, &acct, date("2024-02-15")).unwrap();
    assert_eq!(h.initial_balance, dec("100"));
    assert_eq!(h.monthly_history.len(), 2);
    assert_eq!(
        (h.monthly_history[0].year, h.monthly_history[0].month),
        (2024, 1)
    );
    assert_eq!(h.monthly_history[0].cumulative_balance, dec("570"));
    assert_eq!(h.monthly_history[1].cumulative_balance, dec("770"));
    assert_eq!(h.current_cumulative_balance, dec("770"));
}

#[test]
fn regular_user_needs_five_recent_transactions() {
    let (conn, acct) = setup();
    let today = date("2024-04-20");
    for i in 1..=4 {
        tx::add(
            &conn,
            acct.id,
            TxKind::Expense,
            dec("1"),
            "",
            date(&format!("2024-04-{:02}", i)),
        )
        .unwrap();
    }
    assert!(!tx::is_regular_user(&conn, acct.id, today).unwrap());
    tx::add(&conn, acct.id, TxKind::Income, dec("1"), "", date("2024-04-05")).unwrap();
    assert!(tx::is_regular_user(&conn, acct.id, today).unwrap());
    // old transactions fall outside the 30-day window
    tx::add(&conn, acct.id, TxKind::Income, dec("1"), "", date("2024-01-01")).unwrap();
    assert!(tx::is_regular_user(&conn, acct.id, today).unwrap());
}
