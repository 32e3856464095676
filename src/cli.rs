// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn account_arg() -> Arg {
    Arg::new("account")
        .long("account")
        .short('a')
        .required(true)
        .help("Account email")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn year_month_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("year").long("year").help("Year, defaults to current"))
        .arg(
            Arg::new("month")
                .long("month")
                .help("Month 1-12, defaults to current"),
        )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Personal finance tracking: monthly ledgers and cumulative balances")
        .version(clap::crate_version!())
        .arg_required_else_help(true)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Register an account")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("country")
                                .long("country")
                                .default_value("US")
                                .help("Two-letter country code"),
                        )
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .help("Override the country-derived currency"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List accounts")))
                .subcommand(
                    Command::new("setup")
                        .about("Set initial balance, profile defaults, and card fields")
                        .arg(account_arg())
                        .arg(Arg::new("initial-balance").long("initial-balance"))
                        .arg(Arg::new("monthly-income").long("monthly-income"))
                        .arg(Arg::new("estimated-expenses").long("estimated-expenses"))
                        .arg(Arg::new("card-number").long("card-number"))
                        .arg(Arg::new("card-holder").long("card-holder")),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(account_arg())
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("purpose").long("purpose").default_value(""))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(account_arg())
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Restrict to a month (YYYY-MM)"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("history")
                        .about("Transactions from the last 60 days")
                        .arg(account_arg()),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(account_arg())
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("monthly")
                .about("Monthly declared income and goals")
                .subcommand(year_month_args(
                    Command::new("income")
                        .about("Show or set a month's declared income")
                        .arg(account_arg())
                        .arg(
                            Arg::new("set")
                                .long("set")
                                .help("Income amount to store for the month"),
                        ),
                ))
                .subcommand(year_month_args(
                    Command::new("goal")
                        .about("Show or set a month's planned figures")
                        .arg(account_arg())
                        .arg(Arg::new("income").long("income"))
                        .arg(Arg::new("expenses").long("expenses")),
                )),
        )
        .subcommand(
            Command::new("daily")
                .about("Once-per-day ad hoc expense bookkeeping")
                .subcommand(
                    Command::new("check")
                        .about("Has a daily expense been added for a date?")
                        .arg(account_arg())
                        .arg(Arg::new("date").long("date").help("Defaults to today")),
                )
                .subcommand(
                    Command::new("mark")
                        .about("Record the date in the ledger's used set")
                        .arg(account_arg())
                        .arg(Arg::new("date").long("date").help("Defaults to today")),
                )
                .subcommand(
                    Command::new("add")
                        .about("Add the day's expense transaction")
                        .arg(account_arg())
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboards and statistics")
                .subcommand(json_flags(
                    Command::new("dashboard")
                        .about("Balance, declared income, and today's spend")
                        .arg(account_arg()),
                ))
                .subcommand(json_flags(year_month_args(
                    Command::new("stats")
                        .about("One month's statistics and cumulative balance")
                        .arg(account_arg())
                        .arg(
                            Arg::new("income")
                                .long("income")
                                .help("Override the month's declared income"),
                        ),
                )))
                .subcommand(json_flags(
                    Command::new("history")
                        .about("Month-by-month cumulative balance trend")
                        .arg(account_arg()),
                ))
                .subcommand(
                    Command::new("activity")
                        .about("Regular-user check over the last 30 days")
                        .arg(account_arg()),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(account_arg())
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("Any date in the month (YYYY-MM-DD)"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").arg(account_arg())))
                .subcommand(
                    Command::new("progress")
                        .about("Record saved-so-far progress")
                        .arg(account_arg())
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("challenge")
                .about("Gamified challenges")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("points").long("points").required(true))
                        .arg(Arg::new("target").long("target").required(true)),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("join")
                        .arg(account_arg())
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("complete")
                        .arg(account_arg())
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("points")
                .about("Reward points total")
                .arg(account_arg()),
        )
        .subcommand(
            Command::new("notify")
                .about("Notifications")
                .subcommand(json_flags(Command::new("list").arg(account_arg())))
                .subcommand(
                    Command::new("read")
                        .about("Mark a notification read")
                        .arg(account_arg())
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(account_arg())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
