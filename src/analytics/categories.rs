// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Expense totals per category.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::colors::ColorAssignment;
use crate::models::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Decimal,
}

/// One row of the ranked breakdown: amount, share of all expenses and the
/// palette slot the renderer should use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
    pub slot: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    totals: HashMap<String, Decimal>,
    order: Vec<String>,
    total: Decimal,
}

impl CategoryTotals {
    pub fn from_snapshot(snapshot: &[Transaction]) -> Self {
        let mut out = Self::default();
        for t in snapshot.iter().filter(|t| t.is_expense()) {
            out.add(&t.category, t.amount);
        }
        out
    }

    fn add(&mut self, category: &str, amount: Decimal) {
        match self.totals.get_mut(category) {
            Some(sum) => *sum = sum.saturating_add(amount),
            None => {
                self.totals.insert(category.to_string(), amount);
                self.order.push(category.to_string());
            }
        }
        self.total = self.total.saturating_add(amount);
    }

    pub fn get(&self, category: &str) -> Decimal {
        self.totals.get(category).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Categories in the order they were first seen in the snapshot.
    pub fn categories(&self) -> &[String] {
        &self.order
    }

    pub fn total_expense(&self) -> Decimal {
        self.total
    }

    /// Amount descending; equal amounts keep first-seen order.
    pub fn ranked(&self) -> Vec<CategoryAmount> {
        let mut items: Vec<CategoryAmount> = self
            .order
            .iter()
            .map(|c| CategoryAmount {
                category: c.clone(),
                amount: self.totals[c],
            })
            .collect();
        // sort_by is stable
        items.sort_by(|a, b| b.amount.cmp(&a.amount));
        items
    }

    /// Share of `amount` in all expenses, in percent. Zero when nothing was spent.
    pub fn percentage_of_total(&self, amount: Decimal) -> Decimal {
        if self.total.is_zero() {
            return Decimal::ZERO;
        }
        amount
            .checked_div(self.total)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn breakdown(&self, colors: &ColorAssignment) -> Vec<CategoryBreakdown> {
        self.ranked()
            .into_iter()
            .map(|row| CategoryBreakdown {
                percentage: self.percentage_of_total(row.amount),
                slot: colors.slot_for(&row.category),
                category: row.category,
                amount: row.amount,
            })
            .collect()
    }
}
