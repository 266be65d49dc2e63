// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::insert_transaction;
use crate::models::{NewTransaction, PaymentChannel, TransactionKind};
use crate::utils::{parse_calendar_date, parse_decimal};
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// Expects the header `date,kind,title,amount,category,channel,note`.
/// Dates are stored as given; rows whose date does not parse are kept and
/// reported by `doctor`.
fn import_transactions(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .context("path is required")?
        .trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut count = 0usize;
    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = line + 2;
        let date = rec.get(0).context("date missing")?.trim().to_string();
        let kind = rec
            .get(1)
            .context("kind missing")?
            .parse::<TransactionKind>()
            .with_context(|| format!("Row {}", row))?;
        let title = rec.get(2).context("title missing")?.trim().to_string();
        let amount_raw = rec.get(3).context("amount missing")?.trim();
        let category = rec.get(4).context("category missing")?.trim().to_string();
        let channel_raw = rec.get(5).unwrap_or("").trim();
        let note = rec
            .get(6)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        if title.is_empty() {
            return Err(anyhow!("Row {}: title must not be empty", row));
        }
        let amount = parse_decimal(amount_raw)
            .with_context(|| format!("Row {}: invalid amount for {}", row, title))?;
        if amount.is_sign_negative() {
            return Err(anyhow!("Row {}: amount {} is negative", row, amount));
        }
        let payment_channel = if channel_raw.is_empty() {
            PaymentChannel::default()
        } else {
            channel_raw
                .parse::<PaymentChannel>()
                .with_context(|| format!("Row {}", row))?
        };
        if parse_calendar_date(&date).is_none() {
            tracing::warn!(row, date = %date, "imported date does not parse; excluded from time series");
        }

        insert_transaction(
            &tx,
            &NewTransaction {
                kind,
                title,
                amount,
                category,
                note,
                date,
                payment_channel,
            },
        )?;
        count += 1;
    }
    tx.commit()?;
    println!("Imported {} transaction(s) from {}", count, path);
    Ok(())
}
