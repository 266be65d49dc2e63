// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod transactions;
pub mod reports;
pub mod importer;
pub mod exporter;
pub mod doctor;
pub mod settings;

use anyhow::Result;
use chrono::NaiveDate;

use crate::analytics::{Granularity, MonthOrdering};
use crate::utils::{parse_date, today};

/// `--today` when given, otherwise the local date.
pub(crate) fn reference_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("today") {
        Some(s) => parse_date(s.trim()),
        None => Ok(today()),
    }
}

pub(crate) fn granularity(sub: &clap::ArgMatches) -> Result<Granularity> {
    let raw = sub
        .get_one::<String>("granularity")
        .map(String::as_str)
        .unwrap_or("daily");
    Ok(raw.parse::<Granularity>()?)
}

pub(crate) fn month_ordering(sub: &clap::ArgMatches) -> MonthOrdering {
    match sub.get_one::<String>("month-order").map(String::as_str) {
        Some("first-seen") => MonthOrdering::FirstSeen,
        _ => MonthOrdering::Chronological,
    }
}
