// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .value_name("YYYY-MM")
        .help("Period to operate on (defaults to the current month)")
}

fn date_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("YYYY-MM-DD")
        .help("Calendar date (defaults to today)")
}

fn id_arg() -> Arg {
    Arg::new("id").required(true).value_name("ID")
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Period-scoped income/expense/bill/savings tracking with streaks and achievements")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("income")
                .about("Income records")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(date_arg("date"))
                        .arg(period_arg()),
                )
                .subcommand(json_flags(Command::new("list").arg(period_arg())))
                .subcommand(Command::new("delete").arg(id_arg())),
        )
        .subcommand(
            Command::new("expense")
                .about("Expense records")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(date_arg("date"))
                        .arg(period_arg()),
                )
                .subcommand(json_flags(Command::new("list").arg(period_arg())))
                .subcommand(Command::new("delete").arg(id_arg())),
        )
        .subcommand(
            Command::new("bill")
                .about("Bills (status toggles between pending and paid)")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(date_arg("due"))
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .value_parser(["pending", "paid"])
                                .default_value("pending"),
                        )
                        .arg(period_arg()),
                )
                .subcommand(json_flags(Command::new("list").arg(period_arg())))
                .subcommand(Command::new("delete").arg(id_arg()))
                .subcommand(Command::new("pay").arg(id_arg()))
                .subcommand(Command::new("unpay").arg(id_arg())),
        )
        .subcommand(
            Command::new("saving")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("goal").long("goal").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current").default_value("0"))
                        .arg(period_arg()),
                )
                .subcommand(json_flags(Command::new("list").arg(period_arg())))
                .subcommand(Command::new("delete").arg(id_arg()))
                .subcommand(
                    Command::new("set-amount")
                        .about("Update a goal's saved amount")
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Summary, derived metrics, streak, and achievements for a period")
                .arg(period_arg()),
        ))
        .subcommand(
            Command::new("achievements")
                .about("Achievement badges")
                .subcommand(json_flags(Command::new("show").arg(period_arg())))
                .subcommand(
                    Command::new("sticky")
                        .about("Keep badges unlocked once earned")
                        .arg(Arg::new("mode").required(true).value_parser(["on", "off"])),
                ),
        )
        .subcommand(
            Command::new("quick")
                .about("Record an entry from a free-form phrase, e.g. 'spent 120 on food'")
                .arg(Arg::new("phrase").required(true).num_args(1..)),
        )
        .subcommand(
            Command::new("remote")
                .about("Record-store API client")
                .subcommand(
                    Command::new("login")
                        .arg(Arg::new("url").long("url").help("API base URL (persisted)"))
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(
                    Command::new("register")
                        .arg(Arg::new("url").long("url").help("API base URL (persisted)"))
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(Command::new("whoami"))
                .subcommand(Command::new("logout"))
                .subcommand(
                    Command::new("pull")
                        .about("Replace local period records with the server's")
                        .arg(period_arg()),
                )
                .subcommand(
                    Command::new("push")
                        .about("Replace the server's period records with local ones")
                        .arg(period_arg()),
                )
                .subcommand(
                    Command::new("bill-status")
                        .about("PATCH a server bill's status")
                        .arg(id_arg())
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .required(true)
                                .value_parser(["pending", "paid"]),
                        ),
                )
                .subcommand(
                    Command::new("set-saving")
                        .about("PATCH a server goal's saved amount")
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export a period's records")
                .arg(period_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check the local store for inconsistencies"))
}
