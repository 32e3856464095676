// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::cli;

#[test]
fn command_tree_is_well_formed() {
    cli::build_cli().debug_assert();
}

#[test]
fn stats_args_parse() {
    let matches = cli::build_cli().get_matches_from([
        "pocketledger",
        "report",
        "stats",
        "--account",
        "jo@example.com",
        "--year",
        "2024",
        "--month",
        "2",
        "--income",
        "500",
        "--json",
    ]);
    let Some(("report", report_m)) = matches.subcommand() else {
        panic!("no report subcommand");
    };
    let Some(("stats", stats_m)) = report_m.subcommand() else {
        panic!("no stats subcommand");
    };
    assert_eq!(
        stats_m.get_one::<String>("account").map(String::as_str),
        Some("jo@example.com")
    );
    assert_eq!(stats_m.get_one::<String>("year").map(String::as_str), Some("2024"));
    assert_eq!(stats_m.get_one::<String>("income").map(String::as_str), Some("500"));
    assert!(stats_m.get_flag("json"));
    assert!(!stats_m.get_flag("jsonl"));
}

#[test]
fn daily_add_requires_date_and_amount() {
    let err = cli::build_cli().try_get_matches_from([
        "pocketledger",
        "daily",
        "add",
        "--account",
        "jo@example.com",
        "--amount",
        "10",
    ]);
    assert!(err.is_err());
}
