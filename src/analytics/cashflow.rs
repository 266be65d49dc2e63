// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};
use crate::utils::{month_abbrev, month_key};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCashFlow {
    pub key: String,
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthlyCashFlow {
    pub fn net(&self) -> Decimal {
        self.income.saturating_sub(self.expense)
    }
}

/// Income against expense per calendar month, oldest first. Months without
/// any dated transaction are not emitted.
pub fn cash_flow_by_month(snapshot: &[Transaction]) -> Vec<MonthlyCashFlow> {
    let mut map: BTreeMap<(i32, u32), MonthlyCashFlow> = BTreeMap::new();
    for t in snapshot {
        let Some(d) = t.calendar_date() else {
            continue;
        };
        let entry = map.entry((d.year(), d.month())).or_insert_with(|| MonthlyCashFlow {
            key: month_key(d),
            label: month_abbrev(d),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        });
        match t.kind {
            TransactionKind::Income => entry.income = entry.income.saturating_add(t.amount),
            TransactionKind::Expense => entry.expense = entry.expense.saturating_add(t.amount),
        }
    }
    map.into_values().collect()
}
