// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::{get_currency, set_currency, Currency};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("currency", sub)) => match sub.get_one::<String>("code") {
            Some(code) => {
                let ccy = Currency::from_code(code)?;
                set_currency(conn, ccy)?;
                println!("Display currency set to {} ({})", ccy.code(), ccy.symbol());
            }
            None => {
                let ccy = get_currency(conn)?;
                println!("{} ({})", ccy.code(), ccy.symbol());
            }
        },
        _ => {}
    }
    Ok(())
}
