// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::generator;
use crate::ingest::parse_upload_path;
use crate::pipeline::distinct_values;
use crate::state::ViewState;
use crate::store::{self, RecordStore, Source};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("generate", sub)) => generate(conn, sub)?,
        Some(("import", sub)) => import(conn, sub)?,
        Some(("reload", _)) => reload(conn)?,
        Some(("info", sub)) => info(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn generate(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let count = *sub.get_one::<usize>("count").unwrap_or(&generator::DEFAULT_COUNT);
    let days = *sub.get_one::<u32>("days").unwrap_or(&generator::DEFAULT_DAYS);
    let now = Utc::now().naive_utc();
    let records = match sub.get_one::<u64>("seed") {
        Some(seed) => generator::generate(count, days, now, &mut StdRng::seed_from_u64(*seed)),
        None => generator::generate(count, days, now, &mut rand::thread_rng()),
    };
    let mut store = RecordStore::default();
    store.replace(records, Source::Generated);
    persist(conn, &store)?;
    println!("Generated {} records over {} days", store.len(), days);
    Ok(())
}

/// Upload failures leave the stored records and view untouched. An upload
/// that cannot be persisted is refused as a whole.
fn import(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let records = match parse_upload_path(Path::new(path)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Could not read {}: {}", path, e);
            return Ok(());
        }
    };
    let mut store = RecordStore::default();
    store.replace(records, Source::Uploaded);
    persist(conn, &store).with_context(|| format!("Import of {} refused", path))?;
    ViewState::reset(conn)?;
    println!("Imported {} records from {}", store.len(), path);
    Ok(())
}

fn reload(conn: &Connection) -> Result<()> {
    let store = RecordStore::open(conn);
    match store.source() {
        Source::Persisted => println!("Loaded {} saved records", store.len()),
        _ => println!("No readable saved data; generated {} records", store.len()),
    }
    Ok(())
}

fn persist(conn: &Connection, store: &RecordStore) -> Result<()> {
    if !store::save(conn, store.records()) {
        bail!(
            "{} records could not be saved (snapshot limit {} bytes); previous data kept",
            store.len(),
            store::MAX_SNAPSHOT_BYTES
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct DataInfo {
    count: usize,
    first_day: Option<String>,
    last_day: Option<String>,
    regions: Vec<String>,
    categories: Vec<String>,
}

fn info(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = RecordStore::open(conn);
    let recs = store.records();
    let info = DataInfo {
        count: recs.len(),
        first_day: recs.iter().map(|r| r.day()).min().map(|d| d.to_string()),
        last_day: recs.iter().map(|r| r.day()).max().map(|d| d.to_string()),
        regions: distinct_values(recs, |r| r.region.as_str()),
        categories: distinct_values(recs, |r| r.category.as_str()),
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &info)? {
        let rows = vec![
            vec!["Records".into(), info.count.to_string()],
            vec!["First day".into(), info.first_day.clone().unwrap_or_default()],
            vec!["Last day".into(), info.last_day.clone().unwrap_or_default()],
            vec!["Regions".into(), info.regions.join(", ")],
            vec!["Categories".into(), info.categories.join(", ")],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}
