// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle_goal(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let acct = super::resolve_account(conn, sub)?;
            let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
            let month = parse_date(sub.get_one::<String>("month").unwrap())?;
            let g = crate::engagement::add_savings_goal(conn, acct.id, target, month)?;
            println!(
                "Savings goal {} for {} (target {})",
                g.id,
                g.month,
                fmt_money(&g.target_amount)
            );
        }
        Some(("list", sub)) => {
            let acct = super::resolve_account(conn, sub)?;
            let goals = crate::engagement::list_savings_goals(conn, acct.id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &goals)? {
                let rows: Vec<Vec<String>> = goals
                    .iter()
                    .map(|g| {
                        vec![
                            g.id.to_string(),
                            g.month.to_string(),
                            fmt_money(&g.target_amount),
                            fmt_money(&g.current_amount),
                            if g.is_achieved { "yes" } else { "no" }.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Month", "Target", "Saved", "Achieved"], rows)
                );
            }
        }
        Some(("progress", sub)) => {
            let acct = super::resolve_account(conn, sub)?;
            let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let g = crate::engagement::update_savings_progress(conn, acct.id, id, amount)?;
            println!(
                "Goal {}: {} / {}{}",
                g.id,
                fmt_money(&g.current_amount),
                fmt_money(&g.target_amount),
                if g.is_achieved { " - achieved!" } else { "" }
            );
        }
        _ => {}
    }
    Ok(())
}

pub fn handle_challenge(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let title = sub.get_one::<String>("title").unwrap();
            let description = sub.get_one::<String>("description").unwrap();
            let points: i64 = sub.get_one::<String>("points").unwrap().parse()?;
            let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
            let c = crate::engagement::add_challenge(conn, title, description, points, target)?;
            println!("Added challenge {} '{}'", c.id, c.title);
        }
        Some(("list", sub)) => {
            let challenges = crate::engagement::list_active_challenges(conn)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &challenges)? {
                let rows: Vec<Vec<String>> = challenges
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.title.clone(),
                            c.reward_points.to_string(),
                            fmt_money(&c.target_amount),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Title", "Points", "Target"], rows));
            }
        }
        Some(("join", sub)) => {
            let acct = super::resolve_account(conn, sub)?;
            let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
            crate::engagement::join_challenge(conn, acct.id, id)?;
            println!("Joined challenge {}", id);
        }
        Some(("complete", sub)) => {
            let acct = super::resolve_account(conn, sub)?;
            let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
            let total = crate::engagement::complete_challenge(conn, acct.id, id)?;
            println!("Challenge {} completed, total points now {}", id, total);
        }
        _ => {}
    }
    Ok(())
}

pub fn handle_points(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let acct = super::resolve_account(conn, m)?;
    let total = crate::engagement::total_points(conn, acct.id)?;
    println!("{} points", total);
    Ok(())
}

pub fn handle_notify(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let acct = super::resolve_account(conn, sub)?;
            let items = crate::engagement::list_notifications(conn, acct.id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
                let rows: Vec<Vec<String>> = items
                    .iter()
                    .map(|n| {
                        vec![
                            n.id.to_string(),
                            n.title.clone(),
                            n.message.clone(),
                            if n.is_read { "read" } else { "unread" }.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Title", "Message", "Status"], rows));
            }
        }
        Some(("read", sub)) => {
            let acct = super::resolve_account(conn, sub)?;
            let id: i64 = sub.get_one::<String>("id").unwrap().parse()?;
            crate::engagement::mark_notification_read(conn, acct.id, id)?;
            println!("Notification {} marked read", id);
        }
        _ => {}
    }
    Ok(())
}
