// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{NewTransaction, PaymentChannel, Transaction, TransactionKind};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendlens", "spendlens"));

/// Overrides the platform data dir when set.
pub const DB_ENV: &str = "SPENDLENS_DB";

pub fn db_path() -> Result<PathBuf> {
    if let Some(p) = std::env::var_os(DB_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("spendlens.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    open_at(&db_path()?)
}

pub fn open_at(path: &Path) -> Result<Connection> {
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    tracing::debug!(path = %path.display(), "database ready");
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- date is kept as entered; analytics skip rows whose date does not parse
    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        title TEXT NOT NULL,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        note TEXT,
        date TEXT NOT NULL,
        payment_channel TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    "#,
    )?;
    Ok(())
}

/// All transactions, newest first. This is the snapshot every report is
/// computed from.
pub fn load_snapshot(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, title, amount, category, note, date, payment_channel
         FROM transactions
         ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, Option<String>>(5)?,
            r.get::<_, String>(6)?,
            r.get::<_, Option<String>>(7)?,
        ))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (id, kind, title, amount, category, note, date, channel) = row?;
        let kind = kind
            .parse::<TransactionKind>()
            .with_context(|| format!("Transaction {} has an invalid kind", id))?;
        let amount = amount
            .parse::<Decimal>()
            .with_context(|| format!("Transaction {} has an invalid amount '{}'", id, amount))?;
        let payment_channel = match channel.as_deref().map(str::trim) {
            None | Some("") => PaymentChannel::default(),
            Some(c) => c
                .parse::<PaymentChannel>()
                .with_context(|| format!("Transaction {} has an invalid payment channel", id))?,
        };
        out.push(Transaction {
            id,
            kind,
            title,
            amount,
            category,
            note,
            date,
            payment_channel,
        });
    }
    tracing::debug!(count = out.len(), "loaded transaction snapshot");
    Ok(out)
}

pub fn insert_transaction(conn: &Connection, t: &NewTransaction) -> Result<i64> {
    conn.execute(
        "INSERT INTO transactions(kind, title, amount, category, note, date, payment_channel)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            t.kind.as_str(),
            t.title,
            t.amount.to_string(),
            t.category,
            t.note,
            t.date,
            t.payment_channel.as_str()
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, kind = %t.kind, amount = %t.amount, "transaction recorded");
    Ok(id)
}

/// Returns whether a row was removed.
pub fn delete_transaction(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n == 0 {
        tracing::warn!(id, "delete requested for unknown transaction");
    } else {
        tracing::info!(id, "transaction deleted");
    }
    Ok(n > 0)
}
