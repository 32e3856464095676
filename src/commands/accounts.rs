// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("setup", sub)) => setup(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let name = sub.get_one::<String>("name").unwrap();
    let country = sub.get_one::<String>("country").unwrap();
    let currency = sub.get_one::<String>("currency").map(|s| s.as_str());
    let acct = crate::accounts::create(conn, email, name, country, currency)?;
    println!(
        "Registered '{}' ({}, {} / {})",
        acct.email, acct.full_name, acct.country, acct.currency
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let accounts = crate::accounts::list(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &accounts)? {
        let rows: Vec<Vec<String>> = accounts
            .iter()
            .map(|a| {
                vec![
                    a.email.clone(),
                    a.full_name.clone(),
                    a.country.clone(),
                    a.currency.clone(),
                    fmt_money(&a.initial_balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Email", "Name", "Country", "CCY", "Initial balance"], rows)
        );
    }
    Ok(())
}

fn setup(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, sub)?;
    let initial = sub
        .get_one::<String>("initial-balance")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let income = sub
        .get_one::<String>("monthly-income")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let expenses = sub
        .get_one::<String>("estimated-expenses")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let card_number = sub.get_one::<String>("card-number").map(|s| s.as_str());
    let card_holder = sub.get_one::<String>("card-holder").map(|s| s.as_str());
    crate::accounts::setup(conn, acct.id, initial, income, expenses, card_number, card_holder)?;
    println!("Profile updated for '{}'", acct.email);
    Ok(())
}
