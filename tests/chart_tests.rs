// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesdash::i18n::Language;
use salesdash::models::{FilterSelection, SaleRecord};
use salesdash::pipeline::{ChartKind, ChartModel, Dashboard, aggregate, chart_model};
use salesdash::state::{AppSettings, ViewState};
use uuid::Uuid;

fn rec(day: u32, category: &str, region: &str, qty: u32, sales: i64, profit: i64) -> SaleRecord {
    SaleRecord {
        id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 7, day)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap(),
        category: category.to_string(),
        region: region.to_string(),
        product: "P".to_string(),
        quantity: qty,
        sales: Decimal::new(sales, 0),
        profit: Decimal::new(profit, 0),
    }
}

fn sample() -> Vec<SaleRecord> {
    vec![
        rec(3, "Food", "South", 2, 25, 5),
        rec(1, "Electronics", "North", 1, 300, 60),
        rec(3, "Electronics", "East", 1, 75, -10),
    ]
}

#[test]
fn kinds_parse_case_insensitively() {
    assert_eq!("Donut".parse::<ChartKind>().unwrap(), ChartKind::Donut);
    assert_eq!(" radar ".parse::<ChartKind>().unwrap(), ChartKind::Radar);
    assert!("histogram".parse::<ChartKind>().is_err());
}

#[test]
fn categorical_kinds_share_one_shape() {
    let recs = sample();
    let agg = aggregate(&recs);
    for kind in [ChartKind::Bar, ChartKind::Pie, ChartKind::Donut] {
        match chart_model(kind, &agg, Language::Pt) {
            ChartModel::Categorical { kind: k, points } => {
                assert_eq!(k, kind);
                assert_eq!(points.len(), 2);
                assert_eq!(points[0].key, "Electronics");
                assert_eq!(points[0].label, "Eletrônicos");
                assert_eq!(points[0].value, Decimal::new(375, 0));
                assert_eq!(points[0].share, Decimal::new(375, 0) / Decimal::new(400, 0));
                let total: Decimal = points.iter().map(|p| p.share).sum();
                assert_eq!(total, Decimal::ONE);
            }
            other => panic!("unexpected model {:?}", other),
        }
    }
}

#[test]
fn time_series_is_ordered_by_day() {
    let recs = sample();
    let agg = aggregate(&recs);
    match chart_model(ChartKind::Area, &agg, Language::En) {
        ChartModel::Timeseries { points, .. } => {
            let days: Vec<NaiveDate> = points.iter().map(|p| p.day).collect();
            assert_eq!(
                days,
                vec![
                    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
                ]
            );
            assert_eq!(points[1].value, Decimal::new(100, 0));
        }
        other => panic!("unexpected model {:?}", other),
    }
}

#[test]
fn scatter_and_radar_shapes() {
    let recs = sample();
    let agg = aggregate(&recs);
    match chart_model(ChartKind::Scatter, &agg, Language::En) {
        ChartModel::Scatter { points } => {
            assert_eq!(points.len(), 3);
            assert_eq!(points[2].x, Decimal::new(75, 0));
            assert_eq!(points[2].y, Decimal::new(-10, 0));
            assert_eq!(points[2].size, 1);
        }
        other => panic!("unexpected model {:?}", other),
    }
    match chart_model(ChartKind::Radar, &agg, Language::En) {
        ChartModel::Radar { axes, max } => {
            let keys: Vec<&str> = axes.iter().map(|a| a.key.as_str()).collect();
            assert_eq!(keys, vec!["East", "North", "South"]);
            assert_eq!(max, Decimal::new(300, 0));
            assert!(axes.iter().all(|a| a.value <= max));
        }
        other => panic!("unexpected model {:?}", other),
    }
}

#[test]
fn dashboard_charts_use_converted_aggregates() {
    let recs = sample();
    let mut settings = AppSettings::default();
    settings.select_currency("BRL").unwrap();
    let view = ViewState {
        filter: FilterSelection::new(Vec::<String>::new(), ["Electronics"]),
        ..ViewState::default()
    };
    let dash = Dashboard::build(&recs, &view, &settings);
    assert_eq!(dash.factor, Decimal::new(5, 0));
    assert_eq!(dash.filtered.len(), 2);
    assert_eq!(dash.base.summary.total_sales, Decimal::new(375, 0));
    assert_eq!(dash.display.summary.total_sales, Decimal::new(1875, 0));
    match dash.chart(ChartKind::Radar, &settings) {
        ChartModel::Radar { max, .. } => assert_eq!(max, Decimal::new(1500, 0)),
        other => panic!("unexpected model {:?}", other),
    }
    assert_eq!(dash.table.len(), 2);
}

#[test]
fn empty_aggregates_give_empty_models() {
    let recs: Vec<SaleRecord> = Vec::new();
    let agg = aggregate(&recs);
    for kind in ChartKind::ALL {
        assert!(chart_model(kind, &agg, Language::En).is_empty());
    }
}
