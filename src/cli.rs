// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON document per line"),
    )
}

fn today_arg() -> Arg {
    Arg::new("today")
        .long("today")
        .value_name("YYYY-MM-DD")
        .help("Reference date for gap-filling (defaults to the local date)")
}

fn granularity_arg() -> Arg {
    Arg::new("granularity")
        .long("granularity")
        .short('g')
        .value_parser(["daily", "weekly", "monthly"])
        .default_value("daily")
}

fn month_order_arg() -> Arg {
    Arg::new("month-order")
        .long("month-order")
        .value_parser(["chronological", "first-seen"])
        .default_value("chronological")
        .help("Ordering of monthly buckets")
}

fn channel_arg(default: &'static str) -> Arg {
    Arg::new("channel")
        .long("channel")
        .value_parser(["all", "cash", "non_cash"])
        .default_value(default)
}

pub fn build_cli() -> Command {
    Command::new("spendlens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Record income and expenses, see where the money goes")
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["expense", "income"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("note").long("note"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(
                            Arg::new("channel")
                                .long("channel")
                                .value_parser(["cash", "non_cash"])
                                .default_value("non_cash"),
                        ),
                )
                .subcommand(json_args(
                    Command::new("list").about("Transaction history").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_args(
                    Command::new("search")
                        .about("Search history by title or category")
                        .arg(Arg::new("query").default_value(""))
                        .arg(channel_arg("all")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Reports")
                .subcommand(json_args(
                    Command::new("categories").about("Expense totals per category"),
                ))
                .subcommand(json_args(
                    Command::new("series")
                        .about("Expenses bucketed by day, week or month")
                        .arg(granularity_arg())
                        .arg(month_order_arg())
                        .arg(today_arg()),
                ))
                .subcommand(json_args(
                    Command::new("balances").about("Running balance per payment channel"),
                ))
                .subcommand(json_args(
                    Command::new("cashflow").about("Income vs expense per month").arg(
                        Arg::new("months")
                            .long("months")
                            .value_parser(value_parser!(usize))
                            .default_value("12"),
                    ),
                ))
                .subcommand(
                    Command::new("insights")
                        .about("Every derived view as one JSON document")
                        .arg(granularity_arg())
                        .arg(month_order_arg())
                        .arg(today_arg()),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("series")
                    .about("Export the stacked expense series")
                    .arg(granularity_arg())
                    .arg(month_order_arg())
                    .arg(today_arg())
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .about("Import transactions from CSV")
                    .arg(Arg::new("path").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Find rows the reports cannot use"))
        .subcommand(
            Command::new("settings").about("Preferences").subcommand(
                Command::new("currency")
                    .about("Show or set the display currency")
                    .arg(Arg::new("code").help("USD|INR")),
            ),
        )
}
