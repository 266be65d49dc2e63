// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::parse_calendar_date;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown transaction kind '{0}', expected income|expense")]
    Kind(String),
    #[error("Unknown payment channel '{0}', expected cash|non_cash")]
    Channel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ParseError::Kind(s.to_string())),
        }
    }
}

/// How a transaction was paid. Anything that is not cash counts as non-cash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    Cash,
    #[default]
    NonCash,
}

impl PaymentChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::NonCash => "non_cash",
        }
    }
}

impl fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentChannel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "non_cash" | "noncash" | "non-cash" => Ok(Self::NonCash),
            _ => Err(ParseError::Channel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Date text as stored. Use [`Transaction::calendar_date`] for the parsed day.
    pub date: String,
    #[serde(default)]
    pub payment_channel: PaymentChannel,
}

impl Transaction {
    /// The calendar day this transaction falls on, or `None` when `date`
    /// cannot be parsed. Time of day is dropped.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Fields for a transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub note: Option<String>,
    pub date: String,
    pub payment_channel: PaymentChannel,
}
