// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").action(ArgAction::SetTrue))
        .arg(arg!(--jsonl "Print as JSON lines").action(ArgAction::SetTrue))
}

pub fn build_cli() -> Command {
    command!()
        .name("salesdash")
        .about("Terminal sales analytics: filter, sort, aggregate and export sales records")
        .subcommand_required(false)
        .subcommand(
            Command::new("data")
                .about("Load, generate and inspect the record set")
                .subcommand(
                    Command::new("generate")
                        .about("Replace the records with generated sample data")
                        .arg(
                            arg!(--count <N> "Number of records")
                                .value_parser(value_parser!(usize))
                                .default_value("500"),
                        )
                        .arg(
                            arg!(--days <DAYS> "Spread records over this many past days")
                                .value_parser(value_parser!(u32))
                                .default_value("90"),
                        )
                        .arg(
                            arg!(--seed <SEED> "Seed for reproducible data")
                                .value_parser(value_parser!(u64))
                                .required(false),
                        ),
                )
                .subcommand(
                    Command::new("import")
                        .about("Replace the records with an uploaded CSV sheet")
                        .arg(arg!(--path <PATH> "CSV file").required(true)),
                )
                .subcommand(
                    Command::new("reload")
                        .about("Reload the saved records, regenerating them if unreadable"),
                )
                .subcommand(json_flags(
                    Command::new("info").about("Record count, date span and available values"),
                )),
        )
        .subcommand(
            Command::new("view")
                .about("Filter, date range and sort state of the dashboard")
                .subcommand(Command::new("show").about("Show the current view state"))
                .subcommand(
                    Command::new("filter")
                        .about("Restrict regions and categories (no values = all)")
                        .arg(
                            Arg::new("region")
                                .long("region")
                                .action(ArgAction::Append)
                                .help("Region to include; repeatable"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .action(ArgAction::Append)
                                .help("Category to include; repeatable"),
                        ),
                )
                .subcommand(
                    Command::new("range")
                        .about("Table date range, inclusive (omit a bound to leave it open)")
                        .arg(arg!(--from <DATE> "Start day YYYY-MM-DD").required(false))
                        .arg(arg!(--to <DATE> "End day YYYY-MM-DD").required(false)),
                )
                .subcommand(
                    Command::new("sort")
                        .about("Select a sort column; selecting it again flips the direction")
                        .arg(
                            arg!(<FIELD> "date|category|region|product|sales|quantity|profit"),
                        )
                        .arg(
                            arg!(--direction <DIR> "Force asc|desc instead of toggling")
                                .required(false),
                        ),
                )
                .subcommand(Command::new("reset").about("Clear filters, range and sort")),
        )
        .subcommand(json_flags(
            Command::new("table")
                .about("Sorted, filtered records one page at a time")
                .arg(
                    arg!(--page <N> "Page number, starting at 1")
                        .value_parser(value_parser!(usize))
                        .default_value("1"),
                )
                .arg(
                    arg!(--"per-page" <N> "Rows per page")
                        .value_parser(value_parser!(usize))
                        .default_value("20"),
                ),
        ))
        .subcommand(
            Command::new("report")
                .about("KPIs and grouped breakdowns of the filtered records")
                .subcommand(json_flags(
                    Command::new("summary").about("Totals and average ticket"),
                ))
                .subcommand(json_flags(
                    Command::new("by-category").about("Sales per category"),
                ))
                .subcommand(json_flags(Command::new("by-day").about("Sales per day")))
                .subcommand(json_flags(
                    Command::new("by-region").about("Sales per region"),
                )),
        )
        .subcommand(
            Command::new("chart")
                .about("Emit the data model of one chart as JSON")
                .arg(arg!(<KIND> "bar|pie|donut|line|area|scatter|radar")),
        )
        .subcommand(
            Command::new("export")
                .about("Export the current table view")
                .subcommand(
                    Command::new("csv")
                        .about("Write the sorted, filtered view as CSV in the display currency")
                        .arg(arg!(--out <PATH> "Output file").required(true)),
                ),
        )
        .subcommand(
            Command::new("fx")
                .about("Display currency and exchange rates")
                .subcommand(Command::new("list").about("List currencies and rates"))
                .subcommand(
                    Command::new("set-rate")
                        .about("Edit a rate; invalid or non-positive values are clamped")
                        .arg(arg!(<CURRENCY> "Currency code"))
                        .arg(arg!(<RATE> "New rate").allow_hyphen_values(true)),
                )
                .subcommand(
                    Command::new("use")
                        .about("Select the display currency")
                        .arg(arg!(<CURRENCY> "Currency code")),
                )
                .subcommand(Command::new("factor").about("Show the active conversion factor")),
        )
        .subcommand(
            Command::new("config")
                .about("Application settings")
                .subcommand(Command::new("show").about("Show settings"))
                .subcommand(
                    Command::new("language")
                        .about("Set the label language")
                        .arg(arg!(<LANG> "en|pt")),
                ),
        )
}
