// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display preferences. Nothing here feeds into the analytics.

use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Currency {
    #[default]
    Usd,
    Inr,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Inr => "INR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "INR" => Ok(Self::Inr),
            other => Err(anyhow!("Unsupported currency '{}', expected USD|INR", other)),
        }
    }
}

pub fn get_currency(conn: &Connection) -> Result<Currency> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='currency'", [], |r| {
            r.get(0)
        })
        .optional()?;
    match v {
        Some(code) => Currency::from_code(&code),
        None => Ok(Currency::default()),
    }
}

pub fn set_currency(conn: &Connection, currency: Currency) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('currency', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![currency.code()],
    )?;
    tracing::info!(currency = currency.code(), "display currency updated");
    Ok(())
}
