// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::pipeline::{ChartKind, Dashboard};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let kind: ChartKind = m.get_one::<String>("KIND").unwrap().parse()?;
    let session = Session::open(conn)?;
    let dash = Dashboard::build(session.store.records(), &session.view, &session.settings);
    let model = dash.chart(kind, &session.settings);
    let doc = json!({
        "chart": kind,
        "currency": session.settings.display_currency,
        "model": model,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
