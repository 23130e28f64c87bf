// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DateRange, FilterSelection, SortDirection, SortField, SortSpec};
use crate::state::ViewState;
use crate::utils::{parse_date, pretty_table};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(&ViewState::load(conn)?),
        Some(("filter", sub)) => {
            let mut view = ViewState::load(conn)?;
            view.filter = FilterSelection::new(values(sub, "region"), values(sub, "category"));
            view.save(conn)?;
            show(&view);
        }
        Some(("range", sub)) => {
            let start = sub.get_one::<String>("from").map(|s| parse_date(s)).transpose()?;
            let end = sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?;
            if let (Some(s), Some(e)) = (start, end) {
                if s > e {
                    bail!("Range start {} is after end {}", s, e);
                }
            }
            let mut view = ViewState::load(conn)?;
            view.range = DateRange::new(start, end);
            view.save(conn)?;
            show(&view);
        }
        Some(("sort", sub)) => {
            let field: SortField = sub.get_one::<String>("FIELD").unwrap().parse()?;
            let mut view = ViewState::load(conn)?;
            let spec = match sub.get_one::<String>("direction") {
                Some(d) => {
                    let spec = SortSpec::new(field, d.parse::<SortDirection>()?);
                    view.sort = Some(spec);
                    spec
                }
                None => view.click_column(field),
            };
            view.save(conn)?;
            println!("Sorting by {} {}", spec.field, spec.direction);
        }
        Some(("reset", _)) => {
            let view = ViewState::reset(conn)?;
            show(&view);
        }
        _ => {}
    }
    Ok(())
}

fn values(sub: &clap::ArgMatches, id: &str) -> Vec<String> {
    sub.get_many::<String>(id)
        .map(|vals| {
            vals.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn show(view: &ViewState) {
    let all = |set: &std::collections::BTreeSet<String>| {
        if set.is_empty() {
            "(all)".to_string()
        } else {
            set.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };
    let day = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or("(open)".into());
    let sort = view
        .sort
        .map(|s| format!("{} {}", s.field, s.direction))
        .unwrap_or("(none)".into());
    let rows = vec![
        vec!["Regions".into(), all(&view.filter.regions)],
        vec!["Categories".into(), all(&view.filter.categories)],
        vec!["From".into(), day(view.range.start)],
        vec!["To".into(), day(view.range.end)],
        vec!["Sort".into(), sort],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
}
