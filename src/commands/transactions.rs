// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{search, ChannelFilter, SearchQuery};
use crate::db::{delete_transaction, insert_transaction, load_snapshot};
use crate::models::{NewTransaction, PaymentChannel, Transaction, TransactionKind};
use crate::settings::get_currency;
use crate::utils::{iso_day, maybe_print_json, parse_date, parse_decimal, pretty_table, today};
use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        Some(("search", sub)) => search_history(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    sub.get_one::<String>(name)
        .map(|s| s.trim())
        .with_context(|| format!("--{} is required", name))
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionKind = required(sub, "kind")?.parse()?;
    let title = required(sub, "title")?.to_string();
    if title.is_empty() {
        bail!("Title must not be empty");
    }
    let amount = parse_decimal(required(sub, "amount")?)?;
    if amount.is_sign_negative() {
        bail!("Amount must not be negative, use --kind to record money going out");
    }
    let category = required(sub, "category")?.to_string();
    let note = sub
        .get_one::<String>("note")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d.trim())?,
        None => today(),
    };
    let payment_channel: PaymentChannel = required(sub, "channel")?.parse()?;

    let new = NewTransaction {
        kind,
        title,
        amount,
        category,
        note,
        date: iso_day(date),
        payment_channel,
    };
    let id = insert_transaction(conn, &new)?;
    println!(
        "Recorded {} #{}: {} {} on {} ({})",
        new.kind, id, new.title, new.amount, new.date, new.payment_channel
    );
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    if !delete_transaction(conn, id)? {
        bail!("Transaction {} not found", id);
    }
    println!("Deleted transaction {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(conn, sub)?;
    print_rows(conn, sub, &data)
}

fn search_history(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = search_rows(conn, sub)?;
    print_rows(conn, sub, &data)
}

fn print_rows(conn: &Connection, sub: &clap::ArgMatches, data: &[TransactionRow]) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = get_currency(conn)?.symbol();
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.title.clone(),
                    format!("{}{}", symbol, r.amount),
                    r.category.clone(),
                    r.channel.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Title", "Amount", "Category", "Channel", "Note"],
                rows,
            )
        );
        println!("{} transaction(s)", data.len());
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub title: String,
    /// Signed: expenses are negative.
    pub amount: String,
    pub category: String,
    pub channel: String,
    pub note: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        let signed = if t.is_expense() && !t.amount.is_zero() {
            -t.amount
        } else {
            t.amount
        };
        Self {
            id: t.id,
            date: t.date.clone(),
            kind: t.kind.to_string(),
            title: t.title.clone(),
            amount: format!("{:.2}", signed),
            category: t.category.clone(),
            channel: t.payment_channel.to_string(),
            note: t.note.clone().unwrap_or_default(),
        }
    }
}

/// History rows, newest first, honouring `--limit`.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let snapshot = load_snapshot(conn)?;
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(usize::MAX);
    Ok(snapshot.iter().take(limit).map(TransactionRow::from).collect())
}

pub fn search_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let text = sub
        .get_one::<String>("query")
        .cloned()
        .unwrap_or_default();
    let channel: ChannelFilter = sub
        .get_one::<String>("channel")
        .map(String::as_str)
        .unwrap_or("all")
        .parse()?;
    let snapshot = load_snapshot(conn)?;
    let query = SearchQuery::new(text, channel);
    let hits = search(&snapshot, &query);
    tracing::debug!(query = %query.text, hits = hits.len(), "history search");
    Ok(hits.into_iter().map(TransactionRow::from).collect())
}
