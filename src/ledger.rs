// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::balance;
use crate::error::Result;
use crate::models::{EffectiveGoal, MonthlyGoal, MonthlyLedger};
use crate::utils::{parse_decimal, prev_month};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

fn ledger_from_row(row: &Row) -> rusqlite::Result<(i64, i64, i32, u32, String, String, String, String)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn finish_ledger(
    parts: (i64, i64, i32, u32, String, String, String, String),
) -> Result<MonthlyLedger> {
    let (id, account_id, year, month, income, starting, current, used) = parts;
    Ok(MonthlyLedger {
        id,
        account_id,
        year,
        month,
        monthly_income: parse_decimal(&income)?,
        starting_balance: parse_decimal(&starting)?,
        current_balance: parse_decimal(&current)?,
        used_daily_expense_dates: serde_json::from_str(&used).unwrap_or_default(),
    })
}

const LEDGER_COLS: &str = "id, account_id, year, month, monthly_income, starting_balance, \
                           current_balance, used_daily_expense_dates";

pub fn find_ledger(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
) -> Result<Option<MonthlyLedger>> {
    let row = conn
        .query_row(
            &format!(
                "SELECT {} FROM monthly_ledgers WHERE account_id=?1 AND year=?2 AND month=?3",
                LEDGER_COLS
            ),
            params![account_id, year, month],
            ledger_from_row,
        )
        .optional()?;
    row.map(finish_ledger).transpose()
}

/// Idempotent get-or-create on the (account, year, month) unique key. A
/// creation that collides with a concurrent creator lands on the DO NOTHING
/// arm and reads back the pre-existing row.
pub fn get_or_create_ledger(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
    default_income: Decimal,
) -> Result<MonthlyLedger> {
    conn.execute(
        "INSERT INTO monthly_ledgers(account_id, year, month, monthly_income)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(account_id, year, month) DO NOTHING",
        params![account_id, year, month, default_income.to_string()],
    )?;
    // The row exists after the insert above, conflict or not.
    find_ledger(conn, account_id, year, month)?.ok_or_else(|| {
        crate::error::LedgerError::NotFound(format!("MonthlyLedger {}-{:02}", year, month))
    })
}

/// Get-or-create the month's ledger; when an income value is supplied,
/// overwrite the declared income and refresh the cached balance.
pub fn get_or_set_monthly_income(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
    income: Option<Decimal>,
) -> Result<MonthlyLedger> {
    let mut ledger =
        get_or_create_ledger(conn, account_id, year, month, income.unwrap_or(Decimal::ZERO))?;
    if let Some(v) = income {
        if v != ledger.monthly_income {
            conn.execute(
                "UPDATE monthly_ledgers SET monthly_income=?1, updated_at=datetime('now')
                 WHERE id=?2",
                params![v.to_string(), ledger.id],
            )?;
            ledger.monthly_income = v;
        }
        ledger.current_balance = balance::refresh_current_balance(conn, &ledger)?;
    }
    Ok(ledger)
}

/// Declared income for a month; zero when no ledger exists (absence is a
/// valid state, not an error).
pub fn monthly_income_for(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
) -> Result<Decimal> {
    Ok(find_ledger(conn, account_id, year, month)?
        .map(|l| l.monthly_income)
        .unwrap_or(Decimal::ZERO))
}

pub fn find_goal(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
) -> Result<Option<MonthlyGoal>> {
    let row = conn
        .query_row(
            "SELECT id, account_id, year, month, monthly_income, estimated_expenses
             FROM monthly_goals WHERE account_id=?1 AND year=?2 AND month=?3",
            params![account_id, year, month],
            |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, i64>(1)?,
                    r.get::<_, i32>(2)?,
                    r.get::<_, u32>(3)?,
                    r.get::<_, String>(4)?,
                    r.get::<_, String>(5)?,
                ))
            },
        )
        .optional()?;
    match row {
        Some((id, account_id, year, month, income, expenses)) => Ok(Some(MonthlyGoal {
            id,
            account_id,
            year,
            month,
            monthly_income: parse_decimal(&income)?,
            estimated_expenses: parse_decimal(&expenses)?,
        })),
        None => Ok(None),
    }
}

pub fn set_monthly_goal(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
    monthly_income: Decimal,
    estimated_expenses: Decimal,
) -> Result<MonthlyGoal> {
    conn.execute(
        "INSERT INTO monthly_goals(account_id, year, month, monthly_income, estimated_expenses)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(account_id, year, month) DO UPDATE SET
             monthly_income=excluded.monthly_income,
             estimated_expenses=excluded.estimated_expenses,
             updated_at=datetime('now')",
        params![
            account_id,
            year,
            month,
            monthly_income.to_string(),
            estimated_expenses.to_string()
        ],
    )?;
    find_goal(conn, account_id, year, month)?.ok_or_else(|| {
        crate::error::LedgerError::NotFound(format!("MonthlyGoal {}-{:02}", year, month))
    })
}

/// Planned figures for a month. When the month has no goal, fall back to
/// exactly one month earlier (December rollover included); past that the
/// answer is zeros. `is_current_month` is true only on an exact-month hit.
pub fn get_effective_monthly_goal(
    conn: &Connection,
    account_id: i64,
    year: i32,
    month: u32,
) -> Result<EffectiveGoal> {
    if let Some(goal) = find_goal(conn, account_id, year, month)? {
        return Ok(EffectiveGoal {
            monthly_income: goal.monthly_income,
            estimated_expenses: goal.estimated_expenses,
            is_current_month: true,
        });
    }
    let (py, pm) = prev_month(year, month);
    if let Some(goal) = find_goal(conn, account_id, py, pm)? {
        return Ok(EffectiveGoal {
            monthly_income: goal.monthly_income,
            estimated_expenses: goal.estimated_expenses,
            is_current_month: false,
        });
    }
    Ok(EffectiveGoal {
        monthly_income: Decimal::ZERO,
        estimated_expenses: Decimal::ZERO,
        is_current_month: false,
    })
}
