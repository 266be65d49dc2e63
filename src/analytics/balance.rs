// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{PaymentChannel, Transaction, TransactionKind};

/// Running balance per payment channel. Sums saturate at the `Decimal` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Balances {
    pub cash: Decimal,
    pub non_cash: Decimal,
}

impl Balances {
    pub fn from_snapshot(snapshot: &[Transaction]) -> Self {
        let mut b = Self::default();
        for t in snapshot {
            let signed = match t.kind {
                TransactionKind::Income => t.amount,
                TransactionKind::Expense => -t.amount,
            };
            match t.payment_channel {
                PaymentChannel::Cash => b.cash = b.cash.saturating_add(signed),
                PaymentChannel::NonCash => b.non_cash = b.non_cash.saturating_add(signed),
            }
        }
        b
    }

    pub fn get(&self, channel: PaymentChannel) -> Decimal {
        match channel {
            PaymentChannel::Cash => self.cash,
            PaymentChannel::NonCash => self.non_cash,
        }
    }

    pub fn total(&self) -> Decimal {
        self.cash.saturating_add(self.non_cash)
    }
}

/// Income and expense sums over the whole snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    pub fn from_snapshot(snapshot: &[Transaction]) -> Self {
        snapshot.iter().fold(Self::default(), |mut acc, t| {
            match t.kind {
                TransactionKind::Income => acc.income = acc.income.saturating_add(t.amount),
                TransactionKind::Expense => acc.expense = acc.expense.saturating_add(t.amount),
            }
            acc
        })
    }

    pub fn net(&self) -> Decimal {
        self.income.saturating_sub(self.expense)
    }
}
