// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar bucketing of expenses.
//!
//! A snapshot is projected onto days, ISO weeks or months. Every bucket keeps
//! its expense total plus a per-category breakdown, and the resulting
//! [`BucketSeries`] carries one aligned value series per category so stacked
//! charts can be drawn without re-deriving alignment.
//!
//! Daily series are gap-filled from the earliest transaction to today;
//! expenses dated after today are not part of them. Weekly and monthly
//! series only contain slices that saw at least one expense.
//! Transactions with an unparseable date are left out of every bucket.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Transaction;
use crate::utils::{
    day_label, days_inclusive, iso_day, month_abbrev, month_key, week_label, week_start,
};

/// Length of the default daily window when there is nothing to anchor on.
const EMPTY_DAILY_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown granularity '{0}', expected daily|weekly|monthly")]
pub struct UnknownGranularity(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = UnknownGranularity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            _ => Err(UnknownGranularity(s.to_string())),
        }
    }
}

/// Ordering of monthly buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrdering {
    /// Keyed by `YYYY-MM`, ascending.
    #[default]
    Chronological,
    /// Keyed by the short month name in the order months first show up in
    /// the snapshot. The same month of different years shares a bucket.
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub key: String,
    pub label: String,
    pub total: Decimal,
    pub by_category: BTreeMap<String, Decimal>,
}

impl Bucket {
    fn empty(key: String, label: String) -> Self {
        Self {
            key,
            label,
            total: Decimal::ZERO,
            by_category: BTreeMap::new(),
        }
    }

    fn add(&mut self, category: &str, amount: Decimal) {
        let sum = self
            .by_category
            .entry(category.to_string())
            .or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(amount);
        self.total = self.total.saturating_add(amount);
    }

    /// Expense sum for `category` in this slice; zero when absent.
    pub fn amount_for(&self, category: &str) -> Decimal {
        self.by_category
            .get(category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// One value per bucket, in bucket order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: String,
    pub values: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSeries {
    pub granularity: Granularity,
    pub buckets: Vec<Bucket>,
    /// Expense categories in first-seen order.
    pub categories: Vec<String>,
    pub stacked: Vec<CategorySeries>,
}

impl BucketSeries {
    fn assemble(granularity: Granularity, buckets: Vec<Bucket>, categories: Vec<String>) -> Self {
        let stacked = categories
            .iter()
            .map(|c| CategorySeries {
                category: c.clone(),
                values: buckets.iter().map(|b| b.amount_for(c)).collect(),
            })
            .collect();
        Self {
            granularity,
            buckets,
            categories,
            stacked,
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn grand_total(&self) -> Decimal {
        self.buckets
            .iter()
            .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.total))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn series_for(&self, category: &str) -> Option<&CategorySeries> {
        self.stacked.iter().find(|s| s.category == category)
    }
}

/// Buckets `snapshot` at `granularity`, with chronological months.
pub fn bucketize(
    snapshot: &[Transaction],
    granularity: Granularity,
    today: NaiveDate,
) -> BucketSeries {
    bucketize_with(snapshot, granularity, today, MonthOrdering::default())
}

pub fn bucketize_with(
    snapshot: &[Transaction],
    granularity: Granularity,
    today: NaiveDate,
    months: MonthOrdering,
) -> BucketSeries {
    let dated: Vec<(NaiveDate, &Transaction)> = snapshot
        .iter()
        .filter_map(|t| t.calendar_date().map(|d| (d, t)))
        .collect();
    let categories = expense_categories(&dated);

    let buckets = match granularity {
        Granularity::Daily => daily(&dated, today),
        Granularity::Weekly => weekly(&dated),
        Granularity::Monthly => match months {
            MonthOrdering::Chronological => monthly_chronological(&dated),
            MonthOrdering::FirstSeen => monthly_first_seen(&dated),
        },
    };
    BucketSeries::assemble(granularity, buckets, categories)
}

fn expense_categories(dated: &[(NaiveDate, &Transaction)]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for (_, t) in dated.iter().filter(|(_, t)| t.is_expense()) {
        if seen.insert(t.category.as_str()) {
            order.push(t.category.clone());
        }
    }
    order
}

fn daily(dated: &[(NaiveDate, &Transaction)], today: NaiveDate) -> Vec<Bucket> {
    let start = match dated.iter().map(|(d, _)| *d).min() {
        Some(min) => min.min(today),
        None => today - Duration::days(EMPTY_DAILY_WINDOW_DAYS - 1),
    };

    let mut buckets: Vec<Bucket> = days_inclusive(start, today)
        .map(|d| Bucket::empty(iso_day(d), day_label(d)))
        .collect();
    for (d, t) in dated.iter().filter(|(d, t)| t.is_expense() && *d <= today) {
        // start <= d <= today by construction
        let offset = (*d - start).num_days() as usize;
        buckets[offset].add(&t.category, t.amount);
    }
    buckets
}

fn weekly(dated: &[(NaiveDate, &Transaction)]) -> Vec<Bucket> {
    let mut weeks: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();
    for (d, t) in dated.iter().filter(|(_, t)| t.is_expense()) {
        let monday = week_start(*d);
        weeks
            .entry(monday)
            .or_insert_with(|| Bucket::empty(iso_day(monday), week_label(monday)))
            .add(&t.category, t.amount);
    }
    weeks.into_values().collect()
}

fn monthly_chronological(dated: &[(NaiveDate, &Transaction)]) -> Vec<Bucket> {
    let mut months: BTreeMap<(i32, u32), Bucket> = BTreeMap::new();
    for (d, t) in dated.iter().filter(|(_, t)| t.is_expense()) {
        months
            .entry((d.year(), d.month()))
            .or_insert_with(|| Bucket::empty(month_key(*d), month_abbrev(*d)))
            .add(&t.category, t.amount);
    }
    months.into_values().collect()
}

fn monthly_first_seen(dated: &[(NaiveDate, &Transaction)]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (d, t) in dated.iter().filter(|(_, t)| t.is_expense()) {
        let name = month_abbrev(*d);
        let slot = *index.entry(name.clone()).or_insert_with(|| {
            buckets.push(Bucket::empty(name.clone(), name));
            buckets.len() - 1
        });
        buckets[slot].add(&t.category, t.amount);
    }
    buckets
}
