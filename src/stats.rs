// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::balance;
use crate::error::Result;
use crate::ledger;
use crate::models::{Account, BalanceHistory, DashboardSnapshot, MonthlyStatistics};
use crate::tx;
use crate::utils::parse_decimal;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

fn today_spending(conn: &Connection, account_id: i64, today: NaiveDate) -> Result<Decimal> {
    let mut stmt = conn.prepare(
        "SELECT amount FROM transactions
         WHERE account_id=?1 AND kind='expense' AND date=?2",
    )?;
    let mut rows = stmt.query(params![account_id, today.to_string()])?;
    let mut total = Decimal::ZERO;
    while let Some(r) = rows.next()? {
        total += parse_decimal(&r.get::<_, String>(0)?)?;
    }
    Ok(total)
}

/// Landing view: today's spend, the full unbounded cumulative balance, total
/// declared income across all ledgers, and card display fields.
pub fn dashboard_snapshot(
    conn: &Connection,
    account: &Account,
    today: NaiveDate,
) -> Result<DashboardSnapshot> {
    let (current_balance, _) = balance::reconstruct(conn, account, None, today)?;
    Ok(DashboardSnapshot {
        current_balance,
        total_monthly_income: balance::total_declared_income(conn, account.id)?,
        today_spending: today_spending(conn, account.id, today)?,
        card_number: account.card_number.clone(),
        card_holder_name: account.card_holder_name.clone(),
    })
}

/// Per-month view: this month's transaction stats plus the cumulative balance
/// through the month. An income override (when supplied) is written onto the
/// ledger; otherwise the effective goal's income seeds a lazily created one.
pub fn monthly_statistics(
    conn: &Connection,
    account: &Account,
    year: i32,
    month: u32,
    income_override: Option<Decimal>,
    today: NaiveDate,
) -> Result<MonthlyStatistics> {
    // The effective goal seeds a lazily created ledger; an explicit override
    // overwrites even a pre-existing one.
    let led = match income_override {
        Some(v) => ledger::get_or_set_monthly_income(conn, account.id, year, month, Some(v))?,
        None => {
            let goal = ledger::get_effective_monthly_goal(conn, account.id, year, month)?;
            ledger::get_or_create_ledger(conn, account.id, year, month, goal.monthly_income)?
        }
    };

    let transactions = tx::list_for_month(conn, account.id, year, month)?;
    let (total_addon, total_expenses) = balance::month_totals(conn, account.id, year, month)?;
    let (current_balance, _) =
        balance::reconstruct(conn, account, Some((year, month)), today)?;

    Ok(MonthlyStatistics {
        monthly_income: led.monthly_income,
        total_transactions: transactions.len(),
        total_addon,
        total_expenses,
        current_balance,
        transactions,
    })
}

/// Month-by-month balance trend over every ledger on file.
pub fn cumulative_balance_history(
    conn: &Connection,
    account: &Account,
    today: NaiveDate,
) -> Result<BalanceHistory> {
    let (current, history) = balance::reconstruct(conn, account, None, today)?;
    Ok(BalanceHistory {
        initial_balance: account.initial_balance,
        current_cumulative_balance: current,
        monthly_history: history,
    })
}
