// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations over a transaction snapshot.
//!
//! Every function here takes the snapshot by reference and builds fresh
//! values; nothing is cached between calls.

pub mod balance;
pub mod buckets;
pub mod cashflow;
pub mod categories;
pub mod colors;
pub mod search;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub use balance::{Balances, Totals};
pub use buckets::{
    bucketize, bucketize_with, Bucket, BucketSeries, CategorySeries, Granularity, MonthOrdering,
};
pub use cashflow::{cash_flow_by_month, MonthlyCashFlow};
pub use categories::{CategoryAmount, CategoryBreakdown, CategoryTotals};
pub use colors::{CategoryColor, ColorAssignment, Palette};
pub use search::{search, ChannelFilter, SearchQuery};

use crate::models::Transaction;

/// Everything the statistics and dashboard views need, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub transaction_count: usize,
    pub totals: Totals,
    pub balances: Balances,
    pub total_expense: Decimal,
    pub categories: Vec<CategoryBreakdown>,
    pub colors: Vec<CategoryColor>,
    pub series: BucketSeries,
    pub cash_flow: Vec<MonthlyCashFlow>,
}

impl Insights {
    pub fn compute(
        snapshot: &[Transaction],
        today: NaiveDate,
        granularity: Granularity,
        months: MonthOrdering,
        palette: &Palette,
    ) -> Self {
        let colors = ColorAssignment::from_snapshot(snapshot, palette);
        let categories = CategoryTotals::from_snapshot(snapshot);
        let series = bucketize_with(snapshot, granularity, today, months);
        tracing::debug!(
            transactions = snapshot.len(),
            categories = categories.len(),
            buckets = series.len(),
            %granularity,
            "computed insights"
        );
        Self {
            transaction_count: snapshot.len(),
            totals: Totals::from_snapshot(snapshot),
            balances: Balances::from_snapshot(snapshot),
            total_expense: categories.total_expense(),
            categories: categories.breakdown(&colors),
            colors: colors.iter().collect(),
            series,
            cash_flow: cash_flow_by_month(snapshot),
        }
    }
}
