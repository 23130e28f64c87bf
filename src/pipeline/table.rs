// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::DashError;
use crate::i18n::{Language, column_label, label};
use crate::models::{DateRange, SaleRecord, SortDirection, SortField, SortSpec};
use crate::pipeline::currency::convert;
use crate::utils::fixed2;
use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::io::Write;

/// Column order of the tabular view and its CSV export.
pub const EXPORT_COLUMNS: [SortField; 7] = [
    SortField::Date,
    SortField::Category,
    SortField::Product,
    SortField::Region,
    SortField::Sales,
    SortField::Quantity,
    SortField::Profit,
];

/// Colour-scale bounds for the heatmap cells, in base currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HeatBounds {
    pub min_sales: Decimal,
    pub max_sales: Decimal,
    pub max_profit: Decimal,
}

impl HeatBounds {
    fn of(rows: &[&SaleRecord]) -> Self {
        let Some(first) = rows.first() else {
            return Self::default();
        };
        rows.iter().fold(
            HeatBounds {
                min_sales: first.sales,
                max_sales: first.sales,
                max_profit: first.profit,
            },
            |acc, r| HeatBounds {
                min_sales: acc.min_sales.min(r.sales),
                max_sales: acc.max_sales.max(r.sales),
                max_profit: acc.max_profit.max(r.profit),
            },
        )
    }
}

#[derive(Debug, Clone)]
pub struct TableView<'a> {
    rows: Vec<&'a SaleRecord>,
    heat: HeatBounds,
    language: Language,
}

impl<'a> TableView<'a> {
    /// Date-range filter, then a stable sort on the requested column.
    pub fn build(
        filtered: &[&'a SaleRecord],
        range: &DateRange,
        sort: Option<SortSpec>,
        language: Language,
    ) -> Self {
        let mut rows: Vec<&'a SaleRecord> = filtered
            .iter()
            .copied()
            .filter(|r| range.is_open() || range.contains(&r.date))
            .collect();
        if let Some(spec) = sort {
            rows.sort_by(|a, b| {
                let ord = compare(a, b, spec.field, language);
                match spec.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        let heat = HeatBounds::of(&rows);
        Self {
            rows,
            heat,
            language,
        }
    }

    pub fn rows(&self) -> &[&'a SaleRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn heat(&self) -> HeatBounds {
        self.heat
    }

    pub fn page_count(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.rows.len().div_ceil(per_page)
    }

    /// One-based page; out-of-range pages are empty.
    pub fn page(&self, page: usize, per_page: usize) -> &[&'a SaleRecord] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(per_page);
        if start >= self.rows.len() {
            return &[];
        }
        let end = (start + per_page).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Display cells for one record, money already multiplied by `factor`.
    pub fn cells(&self, r: &SaleRecord, factor: Decimal) -> Vec<String> {
        EXPORT_COLUMNS
            .iter()
            .map(|f| match f {
                SortField::Date => r.day().to_string(),
                SortField::Category => label(self.language, &r.category).to_string(),
                SortField::Product => r.product.clone(),
                SortField::Region => label(self.language, &r.region).to_string(),
                SortField::Sales => fixed2(convert(r.sales, factor)),
                SortField::Quantity => r.quantity.to_string(),
                SortField::Profit => fixed2(convert(r.profit, factor)),
            })
            .collect()
    }

    pub fn headers(&self) -> Vec<&'static str> {
        EXPORT_COLUMNS
            .iter()
            .map(|f| column_label(self.language, *f))
            .collect()
    }

    /// Writes the ordered view as comma-joined rows. Fields are never quoted,
    /// so embedded commas shift columns.
    pub fn write_csv<W: Write>(&self, out: W, factor: Decimal) -> Result<usize, DashError> {
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(out);
        wtr.write_record(self.headers())?;
        for r in &self.rows {
            wtr.write_record(self.cells(r, factor))?;
        }
        wtr.flush()?;
        Ok(self.rows.len())
    }
}

fn compare(a: &SaleRecord, b: &SaleRecord, field: SortField, lang: Language) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Sales => a.sales.cmp(&b.sales),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
        SortField::Profit => a.profit.cmp(&b.profit),
        SortField::Category => compare_text(label(lang, &a.category), label(lang, &b.category)),
        SortField::Region => compare_text(label(lang, &a.region), label(lang, &b.region)),
        SortField::Product => compare_text(&a.product, &b.product),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_compare_ignores_case_first() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_text("same", "same"), Ordering::Equal);
    }
}
