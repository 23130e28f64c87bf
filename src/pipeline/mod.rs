// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering, aggregation, currency conversion and view models.
//!
//! Every stage is a pure function of its inputs. [`Dashboard::build`] composes
//! them in order for one set of records, view state and settings:
//!
//! records -> filter -> { aggregate -> to_display(factor), table view }

pub mod aggregate;
pub mod charts;
pub mod currency;
pub mod filter;
pub mod table;

pub use aggregate::{Aggregates, Summary, aggregate};
pub use charts::{ChartKind, ChartModel, chart_model};
pub use currency::{MAX_RATE, MIN_RATE, RateTable, clamp_rate, conversion_factor, convert};
pub use filter::{distinct_values, filter_records};
pub use table::{HeatBounds, TableView};

use crate::models::SaleRecord;
use crate::state::{AppSettings, ViewState};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub filtered: Vec<&'a SaleRecord>,
    /// Base-currency aggregates.
    pub base: Aggregates,
    /// `base` converted once with `factor`.
    pub display: Aggregates,
    pub factor: Decimal,
    pub table: TableView<'a>,
}

impl<'a> Dashboard<'a> {
    pub fn build(records: &'a [SaleRecord], view: &ViewState, settings: &AppSettings) -> Self {
        let filtered = filter_records(records, &view.filter);
        let base = aggregate(filtered.iter().copied());
        let factor = conversion_factor(&settings.display_currency, &settings.rates);
        let display = base.to_display(factor);
        let table = TableView::build(&filtered, &view.range, view.sort, settings.language);
        Dashboard {
            filtered,
            base,
            display,
            factor,
            table,
        }
    }

    pub fn chart(&self, kind: ChartKind, settings: &AppSettings) -> ChartModel {
        chart_model(kind, &self.display, settings.language)
    }
}
