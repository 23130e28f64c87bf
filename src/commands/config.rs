// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::db_path;
use crate::i18n::Language;
use crate::state::AppSettings;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let mut settings = AppSettings::load(conn)?;
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec!["Store".into(), db_path()?.display().to_string()],
                vec!["Base currency".into(), settings.rates.base.clone()],
                vec!["Display currency".into(), settings.display_currency.clone()],
                vec!["Language".into(), settings.language.to_string()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("language", sub)) => {
            settings.language = sub.get_one::<String>("LANG").unwrap().parse::<Language>()?;
            settings.save(conn)?;
            println!("Language set to {}", settings.language);
        }
        _ => {}
    }
    Ok(())
}
