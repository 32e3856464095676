// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{Transaction, TxKind};
use crate::utils::{month_key, parse_date, parse_decimal};
use chrono::{Days, NaiveDate};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

fn rows_to_transactions(
    rows: Vec<(i64, i64, String, String, String, String)>,
) -> Result<Vec<Transaction>> {
    let mut out = Vec::with_capacity(rows.len());
    for (id, account_id, kind, amount, purpose, date) in rows {
        let kind = TxKind::parse(&kind)
            .ok_or_else(|| LedgerError::validation(format!("Unknown kind '{}'", kind)))?;
        out.push(Transaction {
            id,
            account_id,
            kind,
            amount: parse_decimal(&amount)?,
            purpose,
            date: parse_date(&date)?,
        });
    }
    Ok(out)
}

fn query_transactions(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(sql)?;
    let mut cur = stmt.query(params)?;
    let mut raw = Vec::new();
    while let Some(r) = cur.next()? {
        raw.push((
            r.get::<_, i64>(0)?,
            r.get::<_, i64>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
        ));
    }
    rows_to_transactions(raw)
}

const TX_COLS: &str = "id, account_id, kind, amount, purpose, date";

pub fn add(
    conn: &Connection,
    account_id: i64,
    kind: TxKind,
    amount: Decimal,
    purpose: &str,
    date: NaiveDate,
) -> Result<Transaction> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::validation(
            "Transaction amount must be non-negative",
        ));
    }
    conn.execute(
        "INSERT INTO transactions(account_id, kind, amount, purpose, date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            account_id,
            kind.as_str(),
            amount.to_string(),
            purpose,
            date.to_string()
        ],
    )?;
    let id = conn.last_insert_rowid();
    Ok(Transaction {
        id,
        account_id,
        kind,
        amount,
        purpose: purpose.to_string(),
        date,
    })
}

/// All transactions for an account, newest first.
pub fn list(conn: &Connection, account_id: i64) -> Result<Vec<Transaction>> {
    query_transactions(
        conn,
        &format!(
            "SELECT {} FROM transactions WHERE account_id=?1 ORDER BY date DESC, id DESC",
            TX_COLS
        ),
        params![account_id],
    )
}

/// Transactions dated within one calendar month, newest first.
pub fn list_for_month(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<Transaction>> {
    let key = month_key(year, month);
    query_transactions(
        conn,
        &format!(
            "SELECT {} FROM transactions
             WHERE account_id=?1 AND substr(date,1,7)=?2
             ORDER BY date DESC, id DESC",
            TX_COLS
        ),
        params![account_id, key],
    )
}

/// Recent history: transactions dated within the last `days` days.
pub fn recent(
    conn: &Connection,
    account_id: i64,
    today: NaiveDate,
    days: u64,
) -> Result<Vec<Transaction>> {
    let cutoff = today
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| LedgerError::validation("Date range out of bounds"))?;
    query_transactions(
        conn,
        &format!(
            "SELECT {} FROM transactions
             WHERE account_id=?1 AND date>=?2
             ORDER BY date DESC, id DESC",
            TX_COLS
        ),
        params![account_id, cutoff.to_string()],
    )
}

/// Hard delete. Deleting a "Daily Expense" marker makes its date eligible
/// for re-marking.
pub fn delete(conn: &Connection, account_id: i64, tx_id: i64) -> Result<()> {
    let n = conn.execute(
        "DELETE FROM transactions WHERE id=?1 AND account_id=?2",
        params![tx_id, account_id],
    )?;
    if n == 0 {
        return Err(LedgerError::NotFound(format!("Transaction {}", tx_id)));
    }
    Ok(())
}

/// An account is "regular" with at least five transactions recorded in the
/// last 30 days.
pub fn is_regular_user(conn: &Connection, account_id: i64, today: NaiveDate) -> Result<bool> {
    let cutoff = today
        .checked_sub_days(Days::new(30))
        .ok_or_else(|| LedgerError::validation("Date range out of bounds"))?;
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM transactions WHERE account_id=?1 AND date>=?2",
        params![account_id, cutoff.to_string()],
        |r| r.get(0),
    )?;
    Ok(n >= 5)
}
