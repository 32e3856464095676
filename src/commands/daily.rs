// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{fmt_money, parse_amount, parse_date, today};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("check", sub)) => check(conn, sub)?,
        Some(("mark", sub)) => mark(conn, sub)?,
        Some(("add", sub)) => add(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn check(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let date = sub.get_one::<String>("date").map(|s| parse_date(s)).transpose()?;
    let (used, target) = crate::daily::check_usage(conn, acct.id, date, today())?;
    println!("{}: {}", target, if used { "used" } else { "free" });
    Ok(())
}

fn mark(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    crate::daily::mark_used(conn, acct.id, date)?;
    println!("Marked {} as used", date);
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let t = crate::daily::add_for_date(conn, acct.id, date, amount)?;
    println!(
        "Daily expense {} recorded on {} (tx {})",
        fmt_money(&t.amount),
        t.date,
        t.id
    );
    Ok(())
}
