// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{ParseError, PaymentChannel, Transaction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelFilter {
    #[default]
    All,
    NonCash,
    Cash,
}

impl ChannelFilter {
    pub fn accepts(self, channel: PaymentChannel) -> bool {
        match self {
            Self::All => true,
            Self::Cash => channel == PaymentChannel::Cash,
            Self::NonCash => channel == PaymentChannel::NonCash,
        }
    }
}

impl FromStr for ChannelFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(match s.parse::<PaymentChannel>()? {
            PaymentChannel::Cash => Self::Cash,
            PaymentChannel::NonCash => Self::NonCash,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub channel: ChannelFilter,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, channel: ChannelFilter) -> Self {
        Self {
            text: text.into(),
            channel,
        }
    }

    pub fn matches(&self, t: &Transaction) -> bool {
        self.channel.accepts(t.payment_channel) && text_matches(&self.needle(), t)
    }

    fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

fn text_matches(needle: &str, t: &Transaction) -> bool {
    needle.is_empty()
        || t.title.to_lowercase().contains(needle)
        || t.category.to_lowercase().contains(needle)
}

/// Transactions matching `query`, in snapshot order.
pub fn search<'a>(snapshot: &'a [Transaction], query: &SearchQuery) -> Vec<&'a Transaction> {
    let needle = query.needle();
    snapshot
        .iter()
        .filter(|t| query.channel.accepts(t.payment_channel) && text_matches(&needle, t))
        .collect()
}
