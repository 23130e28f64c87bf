// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns an uploaded CSV sheet into sale records.
//!
//! Columns are matched by name, case-insensitively and ignoring punctuation,
//! against a list of accepted synonyms per field. Missing or unreadable
//! cells fall back to defaults instead of rejecting the row. Negative sales
//! read as zero; profit keeps its sign.

use crate::error::DashError;
use crate::models::SaleRecord;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

pub const FALLBACK_CATEGORY: &str = "Uncategorized";
pub const FALLBACK_REGION: &str = "Unknown";
pub const FALLBACK_PRODUCT: &str = "Unknown";

const DATE_COLUMNS: &[&str] = &["date", "orderdate", "saledate", "transactiondate", "data", "fecha"];
const CATEGORY_COLUMNS: &[&str] = &["category", "productcategory", "categoria", "segment", "type"];
const REGION_COLUMNS: &[&str] = &["region", "regiao", "area", "territory", "zone", "market"];
const PRODUCT_COLUMNS: &[&str] = &["product", "productname", "item", "produto", "sku", "name"];
const QUANTITY_COLUMNS: &[&str] = &["quantity", "qty", "units", "unitssold", "quantidade"];
const SALES_COLUMNS: &[&str] = &["sales", "revenue", "amount", "total", "salesamount", "vendas", "receita"];
const PROFIT_COLUMNS: &[&str] = &["profit", "netprofit", "margin", "lucro"];

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").expect("static regex"));

/// Spreadsheet day zero; serial 1 is 1899-12-31.
static SERIAL_EPOCH: Lazy<NaiveDateTime> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DAY_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

pub fn normalize_header(h: &str) -> String {
    NON_ALNUM.replace_all(&h.to_lowercase(), "").into_owned()
}

#[derive(Debug)]
struct ColumnMap {
    date: Option<usize>,
    category: Option<usize>,
    region: Option<usize>,
    product: Option<usize>,
    quantity: Option<usize>,
    sales: Option<usize>,
    profit: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        // Synonym order wins over column order.
        let find = |synonyms: &[&str]| {
            synonyms
                .iter()
                .find_map(|s| names.iter().position(|n| n == s))
        };
        ColumnMap {
            date: find(DATE_COLUMNS),
            category: find(CATEGORY_COLUMNS),
            region: find(REGION_COLUMNS),
            product: find(PRODUCT_COLUMNS),
            quantity: find(QUANTITY_COLUMNS),
            sales: find(SALES_COLUMNS),
            profit: find(PROFIT_COLUMNS),
        }
    }
}

fn cell(row: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn parse_amount(raw: Option<&str>) -> Decimal {
    let Some(s) = raw else {
        return Decimal::ZERO;
    };
    s.parse::<Decimal>()
        .ok()
        .or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .and_then(|f| Decimal::try_from(f).ok())
        })
        .unwrap_or(Decimal::ZERO)
}

pub fn parse_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .map(|f| f.round().clamp(0.0, f64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Serial day numbers (days since 1899-12-30, fraction = time of day) or a
/// date string; `now` when neither reads.
pub fn parse_when(raw: Option<&str>, now: NaiveDateTime) -> NaiveDateTime {
    let Some(s) = raw else {
        return now;
    };
    if let Ok(serial) = s.parse::<f64>() {
        if !serial.is_finite() {
            return now;
        }
        let millis = (serial * 86_400_000.0).round();
        if millis.abs() > 1e15 {
            return now;
        }
        return SERIAL_EPOCH
            .checked_add_signed(Duration::milliseconds(millis as i64))
            .unwrap_or(now);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc).naive_utc();
    }
    for fmt in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt;
        }
    }
    for fmt in DAY_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_time(chrono::NaiveTime::MIN);
        }
    }
    now
}

pub fn parse_upload<R: Read>(input: R, now: NaiveDateTime) -> Result<Vec<SaleRecord>, DashError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);
    let cols = ColumnMap::from_headers(rdr.headers()?);
    debug!(?cols, "upload columns resolved");

    let mut out = Vec::new();
    for result in rdr.records() {
        let row = result?;
        out.push(SaleRecord {
            id: Uuid::new_v4(),
            date: parse_when(cell(&row, cols.date), now),
            category: cell(&row, cols.category)
                .unwrap_or(FALLBACK_CATEGORY)
                .to_string(),
            region: cell(&row, cols.region).unwrap_or(FALLBACK_REGION).to_string(),
            product: cell(&row, cols.product)
                .unwrap_or(FALLBACK_PRODUCT)
                .to_string(),
            quantity: parse_quantity(cell(&row, cols.quantity)),
            sales: parse_amount(cell(&row, cols.sales)).max(Decimal::ZERO),
            profit: parse_amount(cell(&row, cols.profit)),
        });
    }
    out.sort_by_key(|r| r.date);
    info!(count = out.len(), "upload parsed");
    Ok(out)
}

pub fn parse_upload_path(path: &Path) -> Result<Vec<SaleRecord>, DashError> {
    let file = std::fs::File::open(path)?;
    parse_upload(file, Utc::now().naive_utc())
}
