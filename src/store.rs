// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The in-memory record set and its snapshot in the local store.

use crate::db::{get_blob, put_blob};
use crate::generator;
use crate::models::SaleRecord;
use rusqlite::Connection;
use tracing::{debug, info, warn};

/// Serialized snapshots larger than this are not persisted.
pub const MAX_SNAPSHOT_BYTES: usize = 4 * 1024 * 1024;

const SNAPSHOT_KEY: &str = "sales_records";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Empty,
    Generated,
    Persisted,
    Uploaded,
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<SaleRecord>,
    source: Source,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            source: Source::Empty,
        }
    }
}

impl RecordStore {
    /// Persisted records when present and readable, generated ones otherwise.
    /// Newly generated data is saved straight away.
    pub fn open(conn: &Connection) -> Self {
        let mut store = RecordStore::default();
        match load(conn) {
            Some(records) => store.replace(records, Source::Persisted),
            None => {
                let records = generator::generate_default();
                save(conn, &records);
                store.replace(records, Source::Generated);
            }
        }
        store
    }

    /// Swaps in a whole new record set.
    pub fn replace(&mut self, records: Vec<SaleRecord>, source: Source) {
        info!(count = records.len(), ?source, "record set replaced");
        self.records = records;
        self.source = source;
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Returns false when the snapshot is too large or the store rejects it.
pub fn save(conn: &Connection, records: &[SaleRecord]) -> bool {
    let json = match serde_json::to_string(records) {
        Ok(j) => j,
        Err(e) => {
            warn!(error = %e, "could not serialize records");
            return false;
        }
    };
    if json.len() > MAX_SNAPSHOT_BYTES {
        warn!(
            bytes = json.len(),
            limit = MAX_SNAPSHOT_BYTES,
            "snapshot too large, keeping records in memory only"
        );
        return false;
    }
    match put_blob(conn, SNAPSHOT_KEY, &json) {
        Ok(()) => {
            debug!(count = records.len(), bytes = json.len(), "snapshot saved");
            true
        }
        Err(e) => {
            warn!(error = %e, "snapshot save failed");
            false
        }
    }
}

/// None when nothing is stored or the stored value cannot be read back.
pub fn load(conn: &Connection) -> Option<Vec<SaleRecord>> {
    let raw = match get_blob(conn, SNAPSHOT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "snapshot load failed");
            return None;
        }
    };
    match serde_json::from_str::<Vec<SaleRecord>>(&raw) {
        Ok(records) => Some(records),
        Err(e) => {
            warn!(error = %e, "stored snapshot is unreadable");
            None
        }
    }
}
