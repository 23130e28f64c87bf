// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session-wide settings and transient view state, persisted as JSON values
//! in the `settings` table.

use crate::db::{get_setting, put_setting};
use crate::error::DashError;
use crate::i18n::Language;
use crate::models::{DateRange, FilterSelection, SortField, SortSpec};
use crate::pipeline::currency::RateTable;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

const SETTINGS_KEY: &str = "app_settings";
const VIEW_KEY: &str = "view_state";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub display_currency: String,
    pub rates: RateTable,
    #[serde(default)]
    pub language: Language,
}

impl Default for AppSettings {
    fn default() -> Self {
        let rates = RateTable::default();
        Self {
            display_currency: rates.base.clone(),
            rates,
            language: Language::default(),
        }
    }
}

impl AppSettings {
    pub fn select_currency(&mut self, ccy: &str) -> Result<(), DashError> {
        let ccy = ccy.trim().to_uppercase();
        if !self.rates.knows(&ccy) {
            return Err(DashError::UnknownCurrency(ccy));
        }
        self.display_currency = ccy;
        Ok(())
    }

    pub fn load(conn: &Connection) -> Result<Self, DashError> {
        load_json(conn, SETTINGS_KEY)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), DashError> {
        save_json(conn, SETTINGS_KEY, self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub filter: FilterSelection,
    #[serde(default)]
    pub range: DateRange,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl ViewState {
    /// Column-header click on `field`.
    pub fn click_column(&mut self, field: SortField) -> SortSpec {
        let spec = SortSpec::select(self.sort, field);
        self.sort = Some(spec);
        spec
    }

    pub fn load(conn: &Connection) -> Result<Self, DashError> {
        load_json(conn, VIEW_KEY)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), DashError> {
        save_json(conn, VIEW_KEY, self)
    }

    pub fn reset(conn: &Connection) -> Result<Self, DashError> {
        let view = ViewState::default();
        view.save(conn)?;
        Ok(view)
    }
}

fn load_json<T: DeserializeOwned + Default>(conn: &Connection, key: &str) -> Result<T, DashError> {
    let Some(raw) = get_setting(conn, key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(v) => Ok(v),
        Err(e) => {
            warn!(key, error = %e, "unreadable stored value, using defaults");
            Ok(T::default())
        }
    }
}

fn save_json<T: Serialize>(conn: &Connection, key: &str, v: &T) -> Result<(), DashError> {
    put_setting(conn, key, &serde_json::to_string(v)?)?;
    Ok(())
}
