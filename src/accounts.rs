// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::Account;
use crate::utils::parse_decimal;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::collections::HashMap;

// Country to currency mapping - falls back to USD
static COUNTRY_CURRENCY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("US", "USD"),
        ("IN", "INR"),
        ("GB", "GBP"),
        ("CA", "CAD"),
        ("AU", "AUD"),
        ("DE", "EUR"),
        ("FR", "EUR"),
        ("IT", "EUR"),
        ("ES", "EUR"),
        ("NL", "EUR"),
        ("JP", "JPY"),
        ("CN", "CNY"),
        ("BR", "BRL"),
        ("MX", "MXN"),
        ("SG", "SGD"),
        ("AE", "AED"),
        ("SA", "SAR"),
        ("ZA", "ZAR"),
        ("NG", "NGN"),
        ("KE", "KES"),
    ])
});

pub fn currency_for_country(country: &str) -> &'static str {
    COUNTRY_CURRENCY.get(country).copied().unwrap_or("USD")
}

fn account_from_row(row: &Row) -> rusqlite::Result<(Account, String, Option<String>, Option<String>)> {
    Ok((
        Account {
            id: row.get(0)?,
            email: row.get(1)?,
            full_name: row.get(2)?,
            country: row.get(3)?,
            currency: row.get(4)?,
            initial_balance: Decimal::ZERO,
            monthly_income: None,
            estimated_expenses: None,
            card_number: row.get(8)?,
            card_holder_name: row.get(9)?,
        },
        row.get::<_, String>(5)?,
        row.get::<_, Option<String>>(6)?,
        row.get::<_, Option<String>>(7)?,
    ))
}

const ACCOUNT_COLS: &str = "id, email, full_name, country, currency, initial_balance, \
                            monthly_income, estimated_expenses, card_number, card_holder_name";

fn finish_account(parts: (Account, String, Option<String>, Option<String>)) -> Result<Account> {
    let (mut acct, initial, income, expenses) = parts;
    acct.initial_balance = parse_decimal(&initial)?;
    acct.monthly_income = income.as_deref().map(parse_decimal).transpose()?;
    acct.estimated_expenses = expenses.as_deref().map(parse_decimal).transpose()?;
    Ok(acct)
}

pub fn create(
    conn: &Connection,
    email: &str,
    full_name: &str,
    country: &str,
    currency: Option<&str>,
) -> Result<Account> {
    let email = email.to_lowercase();
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(LedgerError::validation("Full name cannot be empty"));
    }
    let ccy = currency
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| currency_for_country(country).to_string());
    conn.execute(
        "INSERT INTO accounts(email, full_name, country, currency) VALUES (?1, ?2, ?3, ?4)",
        params![email, full_name, country, ccy],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            LedgerError::DuplicateEntry(format!("Account '{}' already exists", email))
        }
        other => LedgerError::Db(other),
    })?;
    get_by_email(conn, &email)
}

pub fn get_by_email(conn: &Connection, email: &str) -> Result<Account> {
    let email = email.to_lowercase();
    let row = conn
        .query_row(
            &format!("SELECT {} FROM accounts WHERE email=?1", ACCOUNT_COLS),
            params![email],
            account_from_row,
        )
        .optional()?;
    match row {
        Some(parts) => finish_account(parts),
        None => Err(LedgerError::NotFound(format!("Account '{}'", email))),
    }
}

pub fn list(conn: &Connection) -> Result<Vec<Account>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM accounts ORDER BY email",
        ACCOUNT_COLS
    ))?;
    let rows = stmt.query_map([], account_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(finish_account(row?)?);
    }
    Ok(out)
}

/// Profile setup: initial balance, profile defaults, and card display fields.
/// Only the provided fields are touched.
pub fn setup(
    conn: &Connection,
    account_id: i64,
    initial_balance: Option<Decimal>,
    monthly_income: Option<Decimal>,
    estimated_expenses: Option<Decimal>,
    card_number: Option<&str>,
    card_holder_name: Option<&str>,
) -> Result<()> {
    if let Some(b) = initial_balance {
        conn.execute(
            "UPDATE accounts SET initial_balance=?1 WHERE id=?2",
            params![b.to_string(), account_id],
        )?;
    }
    if let Some(i) = monthly_income {
        conn.execute(
            "UPDATE accounts SET monthly_income=?1 WHERE id=?2",
            params![i.to_string(), account_id],
        )?;
    }
    if let Some(e) = estimated_expenses {
        conn.execute(
            "UPDATE accounts SET estimated_expenses=?1 WHERE id=?2",
            params![e.to_string(), account_id],
        )?;
    }
    if let Some(n) = card_number {
        conn.execute(
            "UPDATE accounts SET card_number=?1 WHERE id=?2",
            params![n, account_id],
        )?;
    }
    if let Some(h) = card_holder_name {
        conn.execute(
            "UPDATE accounts SET card_holder_name=?1 WHERE id=?2",
            params![h, account_id],
        )?;
    }
    Ok(())
}
