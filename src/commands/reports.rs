// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table, today};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dashboard", sub)) => dashboard(conn, sub)?,
        Some(("stats", sub)) => stats(conn, sub)?,
        Some(("history", sub)) => history(conn, sub)?,
        Some(("activity", sub)) => activity(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn dashboard(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let snap = crate::stats::dashboard_snapshot(conn, &acct, today())?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &snap)? {
        let rows = vec![
            vec!["Current balance".to_string(), fmt_money(&snap.current_balance)],
            vec![
                "Total monthly income".to_string(),
                fmt_money(&snap.total_monthly_income),
            ],
            vec!["Today's spending".to_string(), fmt_money(&snap.today_spending)],
            vec![
                "Card".to_string(),
                format!(
                    "{} / {}",
                    snap.card_number.as_deref().unwrap_or("-"),
                    snap.card_holder_name.as_deref().unwrap_or("-")
                ),
            ],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}

fn stats(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let (year, month) = super::resolve_year_month(sub)?;
    let override_income = sub
        .get_one::<String>("income")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let s = crate::stats::monthly_statistics(conn, &acct, year, month, override_income, today())?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        println!(
            "{}-{:02}: income {} | {} transactions | addon {} | expenses {} | balance {}",
            year,
            month,
            fmt_money(&s.monthly_income),
            s.total_transactions,
            fmt_money(&s.total_addon),
            fmt_money(&s.total_expenses),
            fmt_money(&s.current_balance)
        );
        let rows: Vec<Vec<String>> = s
            .transactions
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    fmt_money(&t.amount),
                    t.purpose.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Kind", "Amount", "Purpose"], rows));
    }
    Ok(())
}

fn history(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let h = crate::stats::cumulative_balance_history(conn, &acct, today())?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &h)? {
        println!("Initial balance: {}", fmt_money(&h.initial_balance));
        let rows: Vec<Vec<String>> = h
            .monthly_history
            .iter()
            .map(|e| {
                vec![
                    format!("{}-{:02}", e.year, e.month),
                    fmt_money(&e.monthly_income),
                    fmt_money(&e.transaction_income),
                    fmt_money(&e.expenses),
                    fmt_money(&e.cumulative_balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Month", "Declared income", "Tx income", "Expenses", "Cumulative"],
                rows
            )
        );
        println!(
            "Current cumulative balance: {}",
            fmt_money(&h.current_cumulative_balance)
        );
    }
    Ok(())
}

fn activity(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let regular = crate::tx::is_regular_user(conn, acct.id, today())?;
    println!(
        "'{}' is {}a regular user",
        acct.email,
        if regular { "" } else { "not " }
    );
    Ok(())
}
