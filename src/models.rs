// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::DashError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One transaction line. Monetary fields are always in the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: Uuid,
    pub date: NaiveDateTime,
    pub category: String,
    pub region: String,
    pub product: String,
    pub quantity: u32,
    pub sales: Decimal,
    pub profit: Decimal,
}

impl SaleRecord {
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Category,
    Region,
    Product,
    Sales,
    Quantity,
    Profit,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Date,
        SortField::Category,
        SortField::Region,
        SortField::Product,
        SortField::Sales,
        SortField::Quantity,
        SortField::Profit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Category => "category",
            SortField::Region => "region",
            SortField::Product => "product",
            SortField::Sales => "sales",
            SortField::Quantity => "quantity",
            SortField::Profit => "profit",
        }
    }

    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            SortField::Category | SortField::Region | SortField::Product
        )
    }

    /// Direction used the first time a column is selected.
    pub fn default_direction(&self) -> SortDirection {
        if self.is_textual() {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == needle)
            .ok_or_else(|| DashError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(DashError::UnknownDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column-header click: re-selecting the active field toggles its direction,
    /// any other field starts at its default direction.
    pub fn select(current: Option<SortSpec>, field: SortField) -> SortSpec {
        match current {
            Some(cur) if cur.field == field => SortSpec::new(field, cur.direction.toggled()),
            _ => SortSpec::new(field, field.default_direction()),
        }
    }
}

/// Region/category selection. An empty set places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub regions: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<R, C>(regions: R, categories: C) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::<String>::into).collect(),
            categories: categories.into_iter().map(Into::<String>::into).collect(),
        }
    }

    pub fn matches(&self, rec: &SaleRecord) -> bool {
        (self.regions.is_empty() || self.regions.contains(&rec.region))
            && (self.categories.is_empty() || self.categories.contains(&rec.category))
    }

    pub fn is_unrestricted(&self) -> bool {
        self.regions.is_empty() && self.categories.is_empty()
    }
}

/// Inclusive day range used by the table view. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: &NaiveDateTime) -> bool {
        let day = at.date();
        self.start.is_none_or(|s| day >= s) && self.end.is_none_or(|e| day <= e)
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}
