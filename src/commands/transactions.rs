// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TxKind};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table, today};
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("history", sub)) => history(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let kind_s = sub.get_one::<String>("kind").unwrap();
    let kind = match TxKind::parse(kind_s) {
        Some(k) => k,
        None => bail!("Unknown kind '{}' (use income|expense)", kind_s),
    };
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let purpose = sub.get_one::<String>("purpose").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let t = crate::tx::add(conn, acct.id, kind, amount, purpose, date)?;
    println!(
        "Recorded {} {} on {} ({})",
        t.kind.as_str(),
        fmt_money(&t.amount),
        t.date,
        if t.purpose.is_empty() { "-" } else { &t.purpose }
    );
    Ok(())
}

fn print_transactions(sub: &clap::ArgMatches, data: &[Transaction]) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    fmt_money(&t.amount),
                    t.purpose.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Kind", "Amount", "Purpose"], rows)
        );
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let data = match sub.get_one::<String>("month") {
        Some(month) => {
            let parts: Vec<&str> = month.split('-').collect();
            if parts.len() != 2 {
                bail!("Invalid month '{}', expected YYYY-MM", month);
            }
            let y: i32 = parts[0].parse()?;
            let mth: u32 = parts[1].parse()?;
            crate::tx::list_for_month(conn, acct.id, y, mth)?
        }
        None => crate::tx::list(conn, acct.id)?,
    };
    print_transactions(sub, &data)
}

fn history(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let data = crate::tx::recent(conn, acct.id, today(), 60)?;
    print_transactions(sub, &data)
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
    crate::tx::delete(conn, acct.id, id)?;
    println!("Deleted transaction {}", id);
    Ok(())
}
