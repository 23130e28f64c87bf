// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Unknown sort field '{0}' (use date|category|region|product|sales|quantity|profit)")]
    UnknownField(String),

    #[error("Unknown sort direction '{0}' (use asc|desc)")]
    UnknownDirection(String),

    #[error("Unknown chart kind '{0}' (use bar|pie|donut|line|area|scatter|radar)")]
    UnknownChart(String),

    #[error("Unknown language '{0}' (use en|pt)")]
    UnknownLanguage(String),

    #[error("Currency '{0}' is not in the rate table")]
    UnknownCurrency(String),

    #[error("Cannot set a rate for the base currency '{0}'")]
    BaseCurrencyRate(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("An I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Local store error: {0}")]
    Store(#[from] rusqlite::Error),
}
