// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::SaleRecord;
use crate::pipeline::currency::convert;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total_sales: Decimal,
    pub total_quantity: u64,
    pub total_profit: Decimal,
    pub avg_ticket: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPair {
    pub sales: Decimal,
    pub profit: Decimal,
    pub quantity: u32,
    pub category: String,
    pub region: String,
}

/// KPIs and grouped breakdowns over one filtered set.
///
/// `aggregate` always produces base-currency values. `to_display` is the only
/// place a conversion factor touches them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub summary: Summary,
    /// Descending by sales, ties by name.
    pub by_category: Vec<(String, Decimal)>,
    /// Ascending by day.
    pub by_day: Vec<(NaiveDate, Decimal)>,
    /// Ordered by region name.
    pub by_region: Vec<(String, Decimal)>,
    pub max_region: Decimal,
    pub scatter: Vec<ScatterPair>,
}

pub fn aggregate<'a, I>(records: I) -> Aggregates
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut summary = Summary::default();
    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut by_region: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut scatter = Vec::new();

    for r in records {
        summary.count += 1;
        summary.total_sales = summary.total_sales.saturating_add(r.sales);
        summary.total_quantity += u64::from(r.quantity);
        summary.total_profit = summary.total_profit.saturating_add(r.profit);
        add_to(by_category.entry(r.category.as_str()).or_default(), r.sales);
        add_to(by_day.entry(r.day()).or_default(), r.sales);
        add_to(by_region.entry(r.region.as_str()).or_default(), r.sales);
        scatter.push(ScatterPair {
            sales: r.sales,
            profit: r.profit,
            quantity: r.quantity,
            category: r.category.clone(),
            region: r.region.clone(),
        });
    }

    summary.avg_ticket = if summary.count == 0 {
        Decimal::ZERO
    } else {
        summary.total_sales / Decimal::from(summary.count)
    };

    let mut by_category: Vec<(String, Decimal)> = by_category
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let max_region = by_region.values().copied().max().unwrap_or(Decimal::ZERO);

    debug!(
        records = summary.count,
        categories = by_category.len(),
        days = by_day.len(),
        regions = by_region.len(),
        "aggregated filtered set"
    );

    Aggregates {
        summary,
        by_category,
        by_day: by_day.into_iter().collect(),
        by_region: by_region
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        max_region,
        scatter,
    }
}

// Sums pin at the Decimal bounds rather than overflow.
fn add_to(acc: &mut Decimal, v: Decimal) {
    *acc = acc.saturating_add(v);
}

impl Aggregates {
    /// Copy with every monetary value multiplied by `factor`. Counts and
    /// quantities are left as they are.
    pub fn to_display(&self, factor: Decimal) -> Aggregates {
        let money = |v: Decimal| convert(v, factor);
        Aggregates {
            summary: Summary {
                count: self.summary.count,
                total_sales: money(self.summary.total_sales),
                total_quantity: self.summary.total_quantity,
                total_profit: money(self.summary.total_profit),
                avg_ticket: money(self.summary.avg_ticket),
            },
            by_category: self
                .by_category
                .iter()
                .map(|(k, v)| (k.clone(), money(*v)))
                .collect(),
            by_day: self.by_day.iter().map(|(d, v)| (*d, money(*v))).collect(),
            by_region: self
                .by_region
                .iter()
                .map(|(k, v)| (k.clone(), money(*v)))
                .collect(),
            max_region: money(self.max_region),
            scatter: self
                .scatter
                .iter()
                .map(|p| ScatterPair {
                    sales: money(p.sales),
                    profit: money(p.profit),
                    quantity: p.quantity,
                    category: p.category.clone(),
                    region: p.region.clone(),
                })
                .collect(),
        }
    }
}
