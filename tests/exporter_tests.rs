// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use salesdash::models::SaleRecord;
use salesdash::{cli, commands, db, store};
use tempfile::tempdir;
use uuid::Uuid;

fn rec(day: u32, category: &str, region: &str, product: &str, sales: i64) -> SaleRecord {
    SaleRecord {
        id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        category: category.to_string(),
        region: region.to_string(),
        product: product.to_string(),
        quantity: 2,
        sales: Decimal::new(sales, 2),
        profit: Decimal::new(sales / 4, 2),
    }
}

fn seeded_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let recs = vec![
        rec(2, "Food", "North", "Coffee", 1234),
        rec(3, "Electronics", "South", "Monitor", 25000),
        rec(4, "Food", "North", "Chocolate", 999),
        rec(5, "Home", "North", "Lamp", 4500),
    ];
    assert!(store::save(&conn, &recs));
    conn
}

fn run(conn: &Connection, args: &[&str]) {
    let mut argv = vec!["salesdash"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("view", m)) => commands::view::handle(conn, m).unwrap(),
        Some(("fx", m)) => commands::fx::handle(conn, m).unwrap(),
        Some(("export", m)) => commands::exporter::handle(conn, m).unwrap(),
        other => panic!("unexpected subcommand {:?}", other.map(|(n, _)| n)),
    }
}

#[test]
fn export_writes_the_sorted_filtered_view_in_display_currency() {
    let conn = seeded_conn();
    run(&conn, &["view", "filter", "--region", "North"]);
    run(&conn, &["view", "range", "--from", "2025-01-03"]);
    run(&conn, &["view", "sort", "sales"]);
    run(&conn, &["fx", "set-rate", "BRL", "2"]);
    run(&conn, &["fx", "use", "BRL"]);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("view.csv");
    let out_str = out_path.to_string_lossy().to_string();
    run(&conn, &["export", "csv", "--out", &out_str]);

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Category,Product,Region,Sales,Quantity,Profit",
            "2025-01-05,Home,Lamp,North,90.00,2,22.50",
            "2025-01-04,Food,Chocolate,North,19.98,2,4.98",
        ]
    );
}

#[test]
fn export_with_default_view_contains_every_record() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("all.csv");
    let out_str = out_path.to_string_lossy().to_string();
    run(&conn, &["export", "csv", "--out", &out_str]);

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents.lines().count(), 5);
    assert!(contents.contains("2025-01-03,Electronics,Monitor,South,250.00,2,62.50"));
}
