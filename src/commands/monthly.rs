// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{fmt_money, parse_decimal};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("income", sub)) => income(conn, sub)?,
        Some(("goal", sub)) => goal(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn income(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let (year, month) = super::resolve_year_month(sub)?;
    match sub.get_one::<String>("set") {
        Some(s) => {
            let v = parse_decimal(s)?;
            let ledger =
                crate::ledger::get_or_set_monthly_income(conn, acct.id, year, month, Some(v))?;
            println!(
                "Monthly income for {}-{:02} = {}",
                ledger.year,
                ledger.month,
                fmt_money(&ledger.monthly_income)
            );
        }
        None => {
            let v = crate::ledger::monthly_income_for(conn, acct.id, year, month)?;
            println!("Monthly income for {}-{:02} = {}", year, month, fmt_money(&v));
        }
    }
    Ok(())
}

fn goal(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let (year, month) = super::resolve_year_month(sub)?;
    let income = sub.get_one::<String>("income").map(|s| parse_decimal(s)).transpose()?;
    let expenses = sub
        .get_one::<String>("expenses")
        .map(|s| parse_decimal(s))
        .transpose()?;

    if income.is_some() || expenses.is_some() {
        // Setting: missing halves default to zero, like a fresh goal row.
        let g = crate::ledger::set_monthly_goal(
            conn,
            acct.id,
            year,
            month,
            income.unwrap_or_default(),
            expenses.unwrap_or_default(),
        )?;
        println!(
            "Goal for {}-{:02}: income {}, expenses {}",
            g.year,
            g.month,
            fmt_money(&g.monthly_income),
            fmt_money(&g.estimated_expenses)
        );
    } else {
        let g = crate::ledger::get_effective_monthly_goal(conn, acct.id, year, month)?;
        println!(
            "Goal for {}-{:02}: income {}, expenses {}{}",
            year,
            month,
            fmt_money(&g.monthly_income),
            fmt_money(&g.estimated_expenses),
            if g.is_current_month {
                ""
            } else {
                " (carried from previous month or zeros)"
            }
        );
    }
    Ok(())
}
