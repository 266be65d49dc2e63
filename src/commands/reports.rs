// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{granularity, month_ordering, reference_date};
use crate::analytics::{
    bucketize_with, cash_flow_by_month, Balances, CategoryTotals, ColorAssignment, Insights,
    Palette, Totals,
};
use crate::db::load_snapshot;
use crate::settings::get_currency;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("series", sub)) => series(conn, sub)?,
        Some(("balances", sub)) => balances(conn, sub)?,
        Some(("cashflow", sub)) => cashflow(conn, sub)?,
        Some(("insights", sub)) => insights(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = load_snapshot(conn)?;
    let totals = CategoryTotals::from_snapshot(&snapshot);
    let colors = ColorAssignment::from_snapshot(&snapshot, &Palette::default());
    let data = totals.breakdown(&colors);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = get_currency(conn)?.symbol();
        let rows = data
            .iter()
            .map(|row| {
                vec![
                    row.category.clone(),
                    fmt_money(&row.amount, symbol),
                    format!("{:.1}%", row.percentage),
                    colors.color_for(&row.category).unwrap_or("").to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share", "Color"], rows));
        println!("Total: {}", fmt_money(&totals.total_expense(), symbol));
    }
    Ok(())
}

fn series(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = load_snapshot(conn)?;
    let series = bucketize_with(
        &snapshot,
        granularity(sub)?,
        reference_date(sub)?,
        month_ordering(sub),
    );
    if json_flag {
        maybe_print_json(true, false, &series)?;
    } else if !maybe_print_json(false, jsonl_flag, &series.buckets)? {
        let symbol = get_currency(conn)?.symbol();
        let mut headers = vec!["Key", "Label", "Total"];
        headers.extend(series.categories.iter().map(String::as_str));
        let rows = series
            .buckets
            .iter()
            .map(|b| {
                let mut row = vec![b.key.clone(), b.label.clone(), fmt_money(&b.total, symbol)];
                row.extend(
                    series
                        .categories
                        .iter()
                        .map(|c| fmt_money(&b.amount_for(c), symbol)),
                );
                row
            })
            .collect();
        println!("{}", pretty_table(&headers, rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct BalanceReport {
    #[serde(flatten)]
    balances: Balances,
    total: Decimal,
    income: Decimal,
    expense: Decimal,
}

fn balances(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = load_snapshot(conn)?;
    let balances = Balances::from_snapshot(&snapshot);
    let totals = Totals::from_snapshot(&snapshot);
    let report = BalanceReport {
        balances,
        total: balances.total(),
        income: totals.income,
        expense: totals.expense,
    };
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let symbol = get_currency(conn)?.symbol();
        let rows = vec![
            vec!["Cash".to_string(), fmt_money(&balances.cash, symbol)],
            vec!["Non-cash".to_string(), fmt_money(&balances.non_cash, symbol)],
            vec!["Total".to_string(), fmt_money(&report.total, symbol)],
            vec!["Income".to_string(), fmt_money(&totals.income, symbol)],
            vec!["Expense".to_string(), fmt_money(&totals.expense, symbol)],
        ];
        println!("{}", pretty_table(&["Balance", "Amount"], rows));
    }
    Ok(())
}

fn cashflow(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);
    let snapshot = load_snapshot(conn)?;
    let flows = cash_flow_by_month(&snapshot);
    let skip = flows.len().saturating_sub(months);
    let data: Vec<_> = flows.into_iter().skip(skip).collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = get_currency(conn)?.symbol();
        let rows = data
            .iter()
            .map(|m| {
                vec![
                    m.key.clone(),
                    fmt_money(&m.income, symbol),
                    fmt_money(&m.expense, symbol),
                    fmt_money(&m.net(), symbol),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense", "Net"], rows));
    }
    Ok(())
}

/// Every derived view for `report insights`.
pub fn compute_insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<Insights> {
    let snapshot = load_snapshot(conn)?;
    Ok(Insights::compute(
        &snapshot,
        reference_date(sub)?,
        granularity(sub)?,
        month_ordering(sub),
        &Palette::default(),
    ))
}

fn insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let insights = compute_insights(conn, sub)?;
    maybe_print_json(true, false, &insights)?;
    Ok(())
}
