// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{granularity, month_ordering, reference_date};
use crate::analytics::{bucketize_with, BucketSeries};
use crate::db::load_snapshot;
use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use std::path::Path;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("series", sub)) => export_series(conn, sub),
        _ => Ok(()),
    }
}

fn export_series(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .map(|s| s.trim())
        .context("--out is required")?;
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let snapshot = load_snapshot(conn)?;
    let series = bucketize_with(
        &snapshot,
        granularity(sub)?,
        reference_date(sub)?,
        month_ordering(sub),
    );

    match fmt.as_str() {
        "csv" => write_csv(&series, Path::new(out))?,
        _ => std::fs::write(out, serde_json::to_string_pretty(&series)?)
            .with_context(|| format!("Write {}", out))?,
    }
    tracing::info!(out, buckets = series.len(), format = %fmt, "series exported");
    println!("Exported {} {} bucket(s) to {}", series.len(), series.granularity, out);
    Ok(())
}

/// One row per bucket; one column per category, zero-filled.
pub fn write_csv(series: &BucketSeries, out: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)
        .with_context(|| format!("Create {}", out.display()))?;
    let mut header = vec!["key".to_string(), "label".to_string(), "total".to_string()];
    header.extend(series.categories.iter().cloned());
    wtr.write_record(&header)?;
    for (i, b) in series.buckets.iter().enumerate() {
        let mut rec = vec![b.key.clone(), b.label.clone(), b.total.to_string()];
        rec.extend(series.stacked.iter().map(|s| s.values[i].to_string()));
        wtr.write_record(&rec)?;
    }
    wtr.flush()?;
    Ok(())
}
