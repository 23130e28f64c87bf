// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::pipeline::Dashboard;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs::File;
use std::io::BufWriter;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(conn, sub),
        _ => Ok(()),
    }
}

fn export_csv(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap().trim();
    let session = Session::open(conn)?;
    let dash = Dashboard::build(session.store.records(), &session.view, &session.settings);

    let file = File::create(out).with_context(|| format!("Create {}", out))?;
    let n = dash
        .table
        .write_csv(BufWriter::new(file), dash.factor)
        .with_context(|| format!("Write CSV to {}", out))?;
    println!(
        "Exported {} rows to {} ({})",
        n, out, session.settings.display_currency
    );
    Ok(())
}
