// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlens::analytics::{CategoryTotals, ColorAssignment, Palette};
use spendlens::models::{PaymentChannel, Transaction, TransactionKind};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: i64, kind: TransactionKind, amount: &str, category: &str) -> Transaction {
    Transaction {
        id,
        kind,
        title: format!("t{}", id),
        amount: dec(amount),
        category: category.to_string(),
        note: None,
        date: "2024-01-01".to_string(),
        payment_channel: PaymentChannel::NonCash,
    }
}

fn expense(id: i64, amount: &str, category: &str) -> Transaction {
    tx(id, TransactionKind::Expense, amount, category)
}

#[test]
fn only_expenses_are_summed_per_category() {
    let snapshot = vec![
        expense(1, "50", "Food"),
        expense(2, "30", "Food"),
        tx(3, TransactionKind::Income, "1000", "Salary"),
    ];
    let totals = CategoryTotals::from_snapshot(&snapshot);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("Food"), dec("80"));
    assert_eq!(totals.get("Salary"), Decimal::ZERO);
    assert_eq!(totals.total_expense(), dec("80"));
}

#[test]
fn category_shared_by_income_and_expense_counts_expense_only() {
    let snapshot = vec![
        expense(1, "20", "Other"),
        tx(2, TransactionKind::Income, "75", "Other"),
    ];
    let totals = CategoryTotals::from_snapshot(&snapshot);
    assert_eq!(totals.get("Other"), dec("20"));
}

#[test]
fn ranking_is_descending_and_stable_on_ties() {
    let snapshot = vec![
        expense(1, "10", "Alpha"),
        expense(2, "30", "Bravo"),
        expense(3, "10", "Charlie"),
        expense(4, "5", "Alpha"),
        expense(5, "15", "Delta"),
    ];
    let ranked = CategoryTotals::from_snapshot(&snapshot).ranked();
    let names: Vec<&str> = ranked.iter().map(|r| r.category.as_str()).collect();

    // Alpha and Delta tie on 15, Alpha was seen first
    assert_eq!(names, vec!["Bravo", "Alpha", "Delta", "Charlie"]);
    assert_eq!(ranked[0].amount, dec("30"));
}

#[test]
fn ranking_does_not_depend_on_iteration_order() {
    let snapshot = vec![
        expense(1, "12", "Food"),
        expense(2, "40", "Rent"),
        expense(3, "7", "Travel"),
        expense(4, "3", "Food"),
    ];
    let mut reversed = snapshot.clone();
    reversed.reverse();

    assert_eq!(
        CategoryTotals::from_snapshot(&snapshot).ranked(),
        CategoryTotals::from_snapshot(&reversed).ranked()
    );
}

#[test]
fn percentage_of_total_is_zero_without_expenses() {
    let empty = CategoryTotals::from_snapshot(&[]);
    assert!(empty.is_empty());
    assert_eq!(empty.total_expense(), Decimal::ZERO);
    assert_eq!(empty.percentage_of_total(dec("10")), Decimal::ZERO);

    let income_only =
        CategoryTotals::from_snapshot(&[tx(1, TransactionKind::Income, "100", "Salary")]);
    assert_eq!(income_only.percentage_of_total(dec("0")), Decimal::ZERO);
}

#[test]
fn percentage_of_total_is_share_of_all_expenses() {
    let totals = CategoryTotals::from_snapshot(&[expense(1, "20", "Food"), expense(2, "60", "Rent")]);
    assert_eq!(totals.percentage_of_total(dec("20")), dec("25"));
    assert_eq!(totals.percentage_of_total(dec("80")), dec("100"));
}

#[test]
fn breakdown_carries_share_and_palette_slot() {
    let snapshot = vec![
        tx(1, TransactionKind::Income, "900", "Salary"),
        expense(2, "25", "Food"),
        expense(3, "75", "Rent"),
    ];
    let totals = CategoryTotals::from_snapshot(&snapshot);
    let colors = ColorAssignment::from_snapshot(&snapshot, &Palette::default());
    let rows = totals.breakdown(&colors);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, "Rent");
    assert_eq!(rows[0].percentage, dec("75"));
    assert_eq!(rows[0].slot, Some(1));
    assert_eq!(rows[1].category, "Food");
    assert_eq!(rows[1].slot, Some(0));
}

#[test]
fn removing_a_transaction_leaves_no_stale_category() {
    let mut snapshot = vec![expense(1, "9.99", "Games"), expense(2, "5", "Food")];
    let before = CategoryTotals::from_snapshot(&snapshot);
    snapshot.retain(|t| t.id != 1);
    let after = CategoryTotals::from_snapshot(&snapshot);

    assert_eq!(before.total_expense() - after.total_expense(), dec("9.99"));
    assert_eq!(after.get("Games"), Decimal::ZERO);
    assert_eq!(after.categories(), &["Food".to_string()]);
}

#[test]
fn totals_saturate_at_the_decimal_limit() {
    let huge = Decimal::MAX.to_string();
    let totals = CategoryTotals::from_snapshot(&[
        expense(1, &huge, "Luxury"),
        expense(2, &huge, "Luxury"),
        expense(3, "1", "Food"),
    ]);
    assert_eq!(totals.get("Luxury"), Decimal::MAX);
    assert_eq!(totals.total_expense(), Decimal::MAX);
    assert_eq!(totals.percentage_of_total(Decimal::MAX), dec("100"));
    assert_eq!(totals.ranked()[0].category, "Luxury");
}
