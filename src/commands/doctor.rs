// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::load_snapshot;
use crate::models::Transaction;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

/// Rows that the time-based reports silently skip or that look suspicious.
pub fn issues(snapshot: &[Transaction]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for t in snapshot {
        if t.calendar_date().is_none() {
            rows.push(vec![
                "unparseable_date".into(),
                format!("#{} {} '{}'", t.id, t.title, t.date),
            ]);
        }
        if t.amount.is_sign_negative() && !t.amount.is_zero() {
            rows.push(vec![
                "negative_amount".into(),
                format!("#{} {} {}", t.id, t.title, t.amount),
            ]);
        }
        if t.title.trim().is_empty() {
            rows.push(vec!["empty_title".into(), format!("#{}", t.id)]);
        }
    }
    rows
}

pub fn handle(conn: &Connection) -> Result<()> {
    let snapshot = load_snapshot(conn)?;
    let rows = issues(&snapshot);
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
