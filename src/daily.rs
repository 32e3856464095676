// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::ledger::get_or_create_ledger;
use crate::models::{Transaction, TxKind};
use crate::tx;
use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

/// Reserved transaction purpose marking a date's ad hoc daily expense.
pub const DAILY_EXPENSE_PURPOSE: &str = "Daily Expense";

fn marker_exists(conn: &Connection, account_id: i64, date: NaiveDate) -> Result<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM transactions
         WHERE account_id=?1 AND date=?2 AND purpose=?3",
        params![account_id, date.to_string(), DAILY_EXPENSE_PURPOSE],
        |r| r.get(0),
    )?;
    Ok(n > 0)
}

/// Mechanism A read: does the reserved-purpose marker transaction exist for
/// the date (defaults to today)? Ignores the ledger date-set entirely.
pub fn check_usage(
    conn: &Connection,
    account_id: i64,
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(bool, NaiveDate)> {
    let target = date.unwrap_or(today);
    Ok((marker_exists(conn, account_id, target)?, target))
}

/// Mechanism A write: record the day's ad hoc expense. At most one per date;
/// a second call for the same date is a `DuplicateEntry`. Deleting the
/// created transaction re-opens the date.
pub fn add_for_date(
    conn: &Connection,
    account_id: i64,
    date: NaiveDate,
    amount: Decimal,
) -> Result<Transaction> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::validation(
            "Daily expense amount must be non-negative",
        ));
    }
    if marker_exists(conn, account_id, date)? {
        return Err(LedgerError::DuplicateEntry(format!(
            "Daily expense already added for {}",
            date
        )));
    }
    tx::add(
        conn,
        account_id,
        TxKind::Expense,
        amount,
        DAILY_EXPENSE_PURPOSE,
        date,
    )
}

/// Mechanism B: idempotently append the date to the owning ledger's used-date
/// set, creating the ledger lazily. Creates no transaction and is deliberately
/// independent of mechanism A.
pub fn mark_used(conn: &Connection, account_id: i64, date: NaiveDate) -> Result<()> {
    let ledger = get_or_create_ledger(conn, account_id, date.year(), date.month(), Decimal::ZERO)?;
    let iso = date.to_string();
    let mut used = ledger.used_daily_expense_dates;
    if used.iter().any(|d| *d == iso) {
        return Ok(());
    }
    used.push(iso);
    let encoded = serde_json::to_string(&used)
        .map_err(|e| LedgerError::validation(format!("Encode used dates: {}", e)))?;
    conn.execute(
        "UPDATE monthly_ledgers SET used_daily_expense_dates=?1, updated_at=datetime('now')
         WHERE id=?2",
        params![encoded, ledger.id],
    )?;
    Ok(())
}

/// Mechanism B read: the ledger's recorded date-set for one month.
pub fn used_dates(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<String>> {
    Ok(crate::ledger::find_ledger(conn, account_id, year, month)?
        .map(|l| l.used_daily_expense_dates)
        .unwrap_or_default())
}
