// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::i18n::label;
use crate::pipeline::Dashboard;
use crate::utils::{fixed2, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let session = Session::open(conn)?;
    let dash = Dashboard::build(session.store.records(), &session.view, &session.settings);
    match m.subcommand() {
        Some(("summary", sub)) => summary(&session, &dash, sub)?,
        Some(("by-category", sub)) => {
            let rows = labelled(&session, &dash.display.by_category);
            grouped(sub, "Category", &session.settings.display_currency, rows)?
        }
        Some(("by-day", sub)) => {
            let rows = dash
                .display
                .by_day
                .iter()
                .map(|(d, v)| vec![d.to_string(), fixed2(*v)])
                .collect();
            grouped(sub, "Day", &session.settings.display_currency, rows)?
        }
        Some(("by-region", sub)) => {
            let rows = labelled(&session, &dash.display.by_region);
            grouped(sub, "Region", &session.settings.display_currency, rows)?;
            if !sub.get_flag("json") && !sub.get_flag("jsonl") {
                println!(
                    "Largest region: {}",
                    fmt_money(dash.display.max_region, &session.settings.display_currency)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

fn summary(session: &Session, dash: &Dashboard<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let s = &dash.display.summary;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), s)? {
        return Ok(());
    }
    let ccy = &session.settings.display_currency;
    let rows = vec![
        vec!["Records".into(), s.count.to_string()],
        vec!["Total sales".into(), fmt_money(s.total_sales, ccy)],
        vec!["Total profit".into(), fmt_money(s.total_profit, ccy)],
        vec!["Units".into(), s.total_quantity.to_string()],
        vec!["Average ticket".into(), fmt_money(s.avg_ticket, ccy)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}

fn labelled(session: &Session, items: &[(String, rust_decimal::Decimal)]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|(k, v)| vec![label(session.settings.language, k).to_string(), fixed2(*v)])
        .collect()
}

fn grouped(
    sub: &clap::ArgMatches,
    key_header: &str,
    ccy: &str,
    data: Vec<Vec<String>>,
) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let hdr = format!("Sales ({})", ccy);
        println!("{}", pretty_table(&[key_header, &hdr], data));
    }
    Ok(())
}
