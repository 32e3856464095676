// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::{Account, MonthHistory, MonthlyLedger};
use crate::utils::{month_key, parse_decimal};
use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

/// Exact-decimal income/expense totals for one calendar month. Sums are over
/// TEXT amounts parsed row by row; an empty month yields (0, 0).
pub fn month_totals(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
) -> Result<(Decimal, Decimal)> {
    let key = month_key(year, month);
    let mut stmt = conn.prepare(
        "SELECT kind, amount FROM transactions WHERE account_id=?1 AND substr(date,1,7)=?2",
    )?;
    let mut rows = stmt.query(params![account_id, key])?;
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    while let Some(r) = rows.next()? {
        let kind: String = r.get(0)?;
        let amount = parse_decimal(&r.get::<_, String>(1)?)?;
        if kind == "income" {
            income += amount;
        } else {
            expense += amount;
        }
    }
    Ok((income, expense))
}

/// Fold the account's monthly ledgers and transaction log into a cumulative
/// balance, month by month, ascending by (year, month).
///
/// With `as_of = Some((y, m))` the fold stops at that month inclusive;
/// unbounded it covers every ledger on file. The tail month (the bound, or
/// today's month when unbounded) still contributes its transaction net when
/// it has no ledger row - zero declared income, no history entry.
pub fn reconstruct(
    conn: &Connection,
    account: &Account,
    as_of: Option<(i32, u32)>,
    today: NaiveDate,
) -> Result<(Decimal, Vec<MonthHistory>)> {
    let mut balance = account.initial_balance;
    let mut history = Vec::new();

    let sql = match as_of {
        Some(_) => {
            "SELECT year, month, monthly_income FROM monthly_ledgers
             WHERE account_id=?1 AND (year<?2 OR (year=?2 AND month<=?3))
             ORDER BY year, month"
        }
        None => {
            "SELECT year, month, monthly_income FROM monthly_ledgers
             WHERE account_id=?1
             ORDER BY year, month"
        }
    };
    let mut stmt = conn.prepare(sql)?;
    let mut rows = match as_of {
        Some((y, m)) => stmt.query(params![account.id, y, m])?,
        None => stmt.query(params![account.id])?,
    };

    let tail = as_of.unwrap_or((today.year(), today.month()));
    let mut tail_has_ledger = false;

    while let Some(r) = rows.next()? {
        let year: i32 = r.get(0)?;
        let month: u32 = r.get(1)?;
        let monthly_income = parse_decimal(&r.get::<_, String>(2)?)?;
        let (tx_income, tx_expense) = month_totals(conn, account.id, year, month)?;
        balance += monthly_income + tx_income - tx_expense;
        if (year, month) == tail {
            tail_has_ledger = true;
        }
        history.push(MonthHistory {
            year,
            month,
            monthly_income,
            transaction_income: tx_income,
            expenses: tx_expense,
            cumulative_balance: balance,
        });
    }

    if !tail_has_ledger {
        let (tx_income, tx_expense) = month_totals(conn, account.id, tail.0, tail.1)?;
        balance += tx_income - tx_expense;
    }

    Ok((balance, history))
}

/// Declared monthly income summed over every ledger on file.
pub fn total_declared_income(conn: &Connection, account_id: i64) -> Result<Decimal> {
    let mut stmt =
        conn.prepare("SELECT monthly_income FROM monthly_ledgers WHERE account_id=?1")?;
    let mut rows = stmt.query(params![account_id])?;
    let mut total = Decimal::ZERO;
    while let Some(r) = rows.next()? {
        total += parse_decimal(&r.get::<_, String>(0)?)?;
    }
    Ok(total)
}

/// Refresh the ledger's cached `current_balance` from the authoritative
/// fold for its month: starting balance + declared income + transaction net.
/// The cache is read-through only; nothing answers queries from it.
pub fn refresh_current_balance(conn: &Connection, ledger: &MonthlyLedger) -> Result<Decimal> {
    let (tx_income, tx_expense) =
        month_totals(conn, ledger.account_id, ledger.year, ledger.month)?;
    let current = ledger.starting_balance + ledger.monthly_income + tx_income - tx_expense;
    conn.execute(
        "UPDATE monthly_ledgers SET current_balance=?1, updated_at=datetime('now') WHERE id=?2",
        params![current.to_string(), ledger.id],
    )?;
    Ok(current)
}
