// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-chart data shapes. Everything here reshapes an [`Aggregates`] value;
//! nothing filters or sums records again.

use crate::error::DashError;
use crate::i18n::{Language, label};
use crate::pipeline::aggregate::Aggregates;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Donut,
    Line,
    Area,
    Scatter,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Donut,
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Scatter,
        ChartKind::Radar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Scatter => "scatter",
            ChartKind::Radar => "radar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| DashError::UnknownChart(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPoint {
    pub key: String,
    pub label: String,
    pub value: Decimal,
    /// Fraction of the series total, 0 when the total is 0.
    pub share: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint {
    pub day: NaiveDate,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: Decimal,
    pub y: Decimal,
    pub size: u32,
    pub category: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub key: String,
    pub label: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ChartModel {
    Categorical {
        kind: ChartKind,
        points: Vec<CategoryPoint>,
    },
    Timeseries {
        kind: ChartKind,
        points: Vec<TimePoint>,
    },
    Scatter {
        points: Vec<ScatterPoint>,
    },
    Radar {
        axes: Vec<RadarAxis>,
        max: Decimal,
    },
}

impl ChartModel {
    pub fn len(&self) -> usize {
        match self {
            ChartModel::Categorical { points, .. } => points.len(),
            ChartModel::Timeseries { points, .. } => points.len(),
            ChartModel::Scatter { points } => points.len(),
            ChartModel::Radar { axes, .. } => axes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn chart_model(kind: ChartKind, agg: &Aggregates, lang: Language) -> ChartModel {
    match kind {
        ChartKind::Bar | ChartKind::Pie | ChartKind::Donut => {
            let total = agg
                .by_category
                .iter()
                .fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(*v));
            let points = agg
                .by_category
                .iter()
                .map(|(k, v)| CategoryPoint {
                    key: k.clone(),
                    label: label(lang, k).to_string(),
                    value: *v,
                    share: if total.is_zero() {
                        Decimal::ZERO
                    } else {
                        *v / total
                    },
                })
                .collect();
            ChartModel::Categorical { kind, points }
        }
        ChartKind::Line | ChartKind::Area => ChartModel::Timeseries {
            kind,
            points: agg
                .by_day
                .iter()
                .map(|(day, value)| TimePoint {
                    day: *day,
                    value: *value,
                })
                .collect(),
        },
        ChartKind::Scatter => ChartModel::Scatter {
            points: agg
                .scatter
                .iter()
                .map(|p| ScatterPoint {
                    x: p.sales,
                    y: p.profit,
                    size: p.quantity,
                    category: label(lang, &p.category).to_string(),
                    region: label(lang, &p.region).to_string(),
                })
                .collect(),
        },
        ChartKind::Radar => ChartModel::Radar {
            axes: agg
                .by_region
                .iter()
                .map(|(k, v)| RadarAxis {
                    key: k.clone(),
                    label: label(lang, k).to_string(),
                    value: *v,
                })
                .collect(),
            max: agg.max_region,
        },
    }
}
