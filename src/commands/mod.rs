// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod transactions;
pub mod monthly;
pub mod daily;
pub mod reports;
pub mod engagement;
pub mod exporter;

use crate::models::Account;
use anyhow::{Context, Result};
use chrono::Datelike;
use rusqlite::Connection;

pub(crate) fn resolve_account(conn: &Connection, m: &clap::ArgMatches) -> Result<Account> {
    let email = m.get_one::<String>("account").unwrap();
    crate::accounts::get_by_email(conn, email).with_context(|| format!("Resolve '{}'", email))
}

/// Year/month arguments with today's month as the default.
pub(crate) fn resolve_year_month(m: &clap::ArgMatches) -> Result<(i32, u32)> {
    let today = crate::utils::today();
    let year = match m.get_one::<String>("year") {
        Some(s) => s.parse::<i32>().with_context(|| format!("Invalid year '{}'", s))?,
        None => today.year(),
    };
    let month = match m.get_one::<String>("month") {
        Some(s) => {
            let v = s
                .parse::<u32>()
                .with_context(|| format!("Invalid month '{}'", s))?;
            anyhow::ensure!((1..=12).contains(&v), "Month out of range: {}", v);
            v
        }
        None => today.month(),
    };
    Ok((year, month))
}
