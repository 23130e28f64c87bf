// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::pipeline::conversion_factor;
use crate::state::AppSettings;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let mut settings = AppSettings::load(conn)?;
    match m.subcommand() {
        Some(("list", _)) => list_rates(&settings),
        Some(("set-rate", sub)) => {
            let ccy = sub.get_one::<String>("CURRENCY").unwrap();
            let raw = sub.get_one::<String>("RATE").unwrap();
            let stored = settings.rates.set_rate(ccy, raw)?;
            settings.save(conn)?;
            println!("Rate for {} set to {}", ccy.trim().to_uppercase(), stored);
        }
        Some(("use", sub)) => {
            settings.select_currency(sub.get_one::<String>("CURRENCY").unwrap())?;
            settings.save(conn)?;
            println!(
                "Displaying amounts in {} (factor {})",
                settings.display_currency,
                conversion_factor(&settings.display_currency, &settings.rates).round_dp(6)
            );
        }
        Some(("factor", _)) => {
            let f = conversion_factor(&settings.display_currency, &settings.rates);
            println!(
                "1 {} = {} {}",
                settings.rates.base,
                f.round_dp(6),
                settings.display_currency
            );
        }
        _ => {}
    }
    Ok(())
}

fn list_rates(settings: &AppSettings) {
    let rates = &settings.rates;
    let mut data = Vec::new();
    for ccy in rates.currencies() {
        let (quote, rate) = if ccy == rates.base {
            ("base".to_string(), "1".to_string())
        } else if ccy == rates.inverse {
            (
                format!("{} per {}", rates.base, ccy),
                rates.rate(&ccy).map(|r| r.to_string()).unwrap_or_default(),
            )
        } else {
            (
                format!("{} per {}", ccy, rates.base),
                rates.rate(&ccy).map(|r| r.to_string()).unwrap_or_default(),
            )
        };
        let factor = conversion_factor(&ccy, rates).round_dp(6).to_string();
        let active = if ccy == settings.display_currency { "*" } else { "" };
        data.push(vec![active.to_string(), ccy, quote, rate, factor]);
    }
    println!(
        "{}",
        pretty_table(&["", "CCY", "Quoted as", "Rate", "Factor"], data)
    );
}
