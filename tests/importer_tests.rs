// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use rust_decimal::Decimal;
use salesdash::ingest::{
    FALLBACK_CATEGORY, FALLBACK_REGION, parse_amount, parse_quantity, parse_upload, parse_when,
};
use salesdash::models::{FilterSelection, SortField};
use salesdash::state::ViewState;
use salesdash::store::MAX_SNAPSHOT_BYTES;
use salesdash::{cli, commands::data, db, store};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn synonyms_defaults_and_date_order() {
    let sheet = "\
Order Date,Product Name,CATEGORIA,Region,Qty,Revenue,Profit
2025-03-02,Laptop,Electronics,North,2,1999.98,300.5
45717,Coffee,Food,,abc,,
not a date,,,South,3.6,12.5,-1
";
    let recs = parse_upload(sheet.as_bytes(), now()).unwrap();
    assert_eq!(recs.len(), 3);

    // sorted by date: serial 45717 = 2025-03-01, then 2025-03-02, then "now"
    assert_eq!(recs[0].date, day(2025, 3, 1));
    assert_eq!(recs[0].product, "Coffee");
    assert_eq!(recs[0].region, FALLBACK_REGION);
    assert_eq!(recs[0].quantity, 0);
    assert_eq!(recs[0].sales, Decimal::ZERO);
    assert_eq!(recs[0].profit, Decimal::ZERO);

    assert_eq!(recs[1].date, day(2025, 3, 2));
    assert_eq!(recs[1].category, "Electronics");
    assert_eq!(recs[1].quantity, 2);
    assert_eq!(recs[1].sales, "1999.98".parse::<Decimal>().unwrap());
    assert_eq!(recs[1].profit, "300.5".parse::<Decimal>().unwrap());

    assert_eq!(recs[2].date, now());
    assert_eq!(recs[2].category, FALLBACK_CATEGORY);
    assert_eq!(recs[2].product, "Unknown");
    assert_eq!(recs[2].quantity, 4);
    assert_eq!(recs[2].profit, Decimal::new(-1, 0));

    let ids: HashSet<_> = recs.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn serial_dates_carry_time_of_day() {
    assert_eq!(
        parse_when(Some("45658.5"), now()),
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    );
    assert_eq!(parse_when(Some("1"), now()), day(1899, 12, 31));
    assert_eq!(parse_when(None, now()), now());
    assert_eq!(parse_when(Some("1e300"), now()), now());
}

#[test]
fn string_dates_in_common_layouts() {
    assert_eq!(parse_when(Some("2024-02-29"), now()), day(2024, 2, 29));
    assert_eq!(parse_when(Some("02/29/2024"), now()), day(2024, 2, 29));
    assert_eq!(
        parse_when(Some("2024-02-29T10:15:00Z"), now()),
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    );
    assert_eq!(
        parse_when(Some("2024-02-29 10:15:00"), now()),
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    );
    assert_eq!(parse_when(Some("2024-13-45"), now()), now());
}

#[test]
fn numeric_cells_default_to_zero() {
    assert_eq!(parse_amount(Some("12.345")), "12.345".parse::<Decimal>().unwrap());
    assert_eq!(parse_amount(Some("1.5e3")), Decimal::new(1500, 0));
    assert_eq!(parse_amount(Some("$12")), Decimal::ZERO);
    assert_eq!(parse_amount(None), Decimal::ZERO);
    assert_eq!(parse_quantity(Some("-3")), 0);
    assert_eq!(parse_quantity(Some("2.4")), 2);
    assert_eq!(parse_quantity(Some("x")), 0);
}

#[test]
fn negative_sales_read_as_zero_but_losses_stay() {
    let sheet = "date,sales,profit\n2025-01-01,-40,-12.5\n";
    let recs = parse_upload(sheet.as_bytes(), now()).unwrap();
    assert_eq!(recs[0].sales, Decimal::ZERO);
    assert_eq!(recs[0].profit, Decimal::new(-125, 1));
}

#[test]
fn sheet_without_known_columns_still_loads() {
    let sheet = "foo,bar\n1,2\n";
    let recs = parse_upload(sheet.as_bytes(), now()).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].category, FALLBACK_CATEGORY);
    assert_eq!(recs[0].date, now());
}

#[test]
fn malformed_bytes_are_an_error() {
    let sheet: &[u8] = b"date,sales\n2025-01-01,\xff\xfe\n";
    assert!(parse_upload(sheet, now()).is_err());
}

fn try_import(conn: &Connection, path: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(["salesdash", "data", "import", "--path", path]);
    match matches.subcommand() {
        Some(("data", data_m)) => data::handle(conn, data_m),
        _ => panic!("no data subcommand"),
    }
}

fn run_import(conn: &Connection, path: &str) {
    try_import(conn, path).unwrap();
}

#[test]
fn import_replaces_records_and_resets_view() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();

    let mut view = ViewState {
        filter: FilterSelection::new(["North"], ["Food"]),
        ..ViewState::default()
    };
    view.click_column(SortField::Sales);
    view.save(&conn).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,category,region,product,quantity,sales,profit\n2025-02-03,Home,West,Lamp,1,40,8"
    )
    .unwrap();
    file.flush().unwrap();
    let padded = format!("  {}  ", file.path().to_str().unwrap());
    run_import(&conn, &padded);

    let loaded = store::load(&conn).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].product, "Lamp");
    assert_eq!(ViewState::load(&conn).unwrap(), ViewState::default());
}

#[test]
fn failed_import_keeps_previous_records() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,product\n2025-02-03,Lamp").unwrap();
    file.flush().unwrap();
    run_import(&conn, file.path().to_str().unwrap());
    let before = store::load(&conn).unwrap();

    let sort_view = {
        let mut v = ViewState::default();
        v.click_column(SortField::Date);
        v
    };
    sort_view.save(&conn).unwrap();

    run_import(&conn, "/definitely/not/here.csv");
    assert_eq!(store::load(&conn).unwrap(), before);
    assert_eq!(ViewState::load(&conn).unwrap(), sort_view);
}

#[test]
fn upload_too_large_to_save_is_refused_whole() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();

    let mut small = NamedTempFile::new().unwrap();
    writeln!(small, "date,region,product\n2025-02-03,West,Lamp").unwrap();
    small.flush().unwrap();
    run_import(&conn, small.path().to_str().unwrap());
    let before = store::load(&conn).unwrap();

    let mut view = ViewState {
        filter: FilterSelection::new(["West"], Vec::<String>::new()),
        ..ViewState::default()
    };
    view.click_column(SortField::Product);
    view.save(&conn).unwrap();

    let mut big = NamedTempFile::new().unwrap();
    writeln!(big, "date,region,product").unwrap();
    writeln!(big, "2025-02-04,East,{}", "x".repeat(MAX_SNAPSHOT_BYTES + 1)).unwrap();
    big.flush().unwrap();

    assert!(try_import(&conn, big.path().to_str().unwrap()).is_err());
    assert_eq!(store::load(&conn).unwrap(), before);
    assert_eq!(ViewState::load(&conn).unwrap(), view);
}
