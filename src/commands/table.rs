// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::pipeline::Dashboard;
use crate::pipeline::currency::convert;
use crate::utils::{fixed2, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TablePage {
    page: usize,
    pages: usize,
    total_rows: usize,
    currency: String,
    min_sales: String,
    max_sales: String,
    max_profit: String,
    rows: Vec<Vec<String>>,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let page = *m.get_one::<usize>("page").unwrap_or(&1);
    let per_page = *m.get_one::<usize>("per-page").unwrap_or(&20);

    let session = Session::open(conn)?;
    let dash = Dashboard::build(session.store.records(), &session.view, &session.settings);
    let table = &dash.table;
    let heat = table.heat();

    let out = TablePage {
        page,
        pages: table.page_count(per_page),
        total_rows: table.len(),
        currency: session.settings.display_currency.clone(),
        min_sales: fixed2(convert(heat.min_sales, dash.factor)),
        max_sales: fixed2(convert(heat.max_sales, dash.factor)),
        max_profit: fixed2(convert(heat.max_profit, dash.factor)),
        rows: table
            .page(page, per_page)
            .iter()
            .map(|r| table.cells(r, dash.factor))
            .collect(),
    };

    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &out)? {
        let headers = table.headers();
        println!("{}", pretty_table(&headers, out.rows));
        println!(
            "Page {}/{} ({} rows, {}) | sales {}..{} | max profit {}",
            out.page,
            out.pages,
            out.total_rows,
            out.currency,
            out.min_sales,
            out.max_sales,
            out.max_profit
        );
    }
    Ok(())
}
