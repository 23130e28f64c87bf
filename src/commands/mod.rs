// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod chart;
pub mod config;
pub mod data;
pub mod exporter;
pub mod fx;
pub mod reports;
pub mod table;
pub mod view;

use crate::state::{AppSettings, ViewState};
use crate::store::RecordStore;
use anyhow::Result;
use rusqlite::Connection;

/// Everything a dashboard command reads: records, settings and view state.
pub struct Session {
    pub store: RecordStore,
    pub settings: AppSettings,
    pub view: ViewState,
}

impl Session {
    pub fn open(conn: &Connection) -> Result<Self> {
        Ok(Session {
            store: RecordStore::open(conn),
            settings: AppSettings::load(conn)?,
            view: ViewState::load(conn)?,
        })
    }
}
