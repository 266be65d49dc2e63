// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlens::analytics::colors::PaletteError;
use spendlens::analytics::{ColorAssignment, Palette};
use spendlens::models::{PaymentChannel, Transaction, TransactionKind};

fn tx(id: i64, kind: TransactionKind, category: &str) -> Transaction {
    Transaction {
        id,
        kind,
        title: format!("t{}", id),
        amount: "1".parse().unwrap(),
        category: category.to_string(),
        note: None,
        date: "2024-01-01".to_string(),
        payment_channel: PaymentChannel::NonCash,
    }
}

#[test]
fn slots_follow_first_seen_expense_order() {
    let snapshot = vec![
        tx(1, TransactionKind::Expense, "Food"),
        tx(2, TransactionKind::Income, "Salary"),
        tx(3, TransactionKind::Expense, "Food"),
        tx(4, TransactionKind::Expense, "Rent"),
    ];
    let colors = ColorAssignment::from_snapshot(&snapshot, &Palette::default());

    assert_eq!(colors.len(), 2);
    assert_eq!(colors.slot_for("Food"), Some(0));
    assert_eq!(colors.slot_for("Rent"), Some(1));
    assert_eq!(colors.slot_for("Salary"), None);
    assert_eq!(colors.color_for("Food"), Some("#4F46E5"));
    assert_eq!(colors.color_for("Rent"), Some("#22C55E"));
    assert_eq!(colors.slot_for("Travel"), None);

    let order: Vec<String> = colors.iter().map(|c| c.category).collect();
    assert_eq!(order, vec!["Food", "Rent"]);
}

#[test]
fn income_categories_never_take_a_slot() {
    let snapshot = vec![
        tx(1, TransactionKind::Income, "Salary"),
        tx(2, TransactionKind::Income, "Bonus"),
        tx(3, TransactionKind::Expense, "Food"),
    ];
    let colors = ColorAssignment::from_snapshot(&snapshot, &Palette::default());

    assert_eq!(colors.slot_for("Food"), Some(0));
    assert_eq!(colors.slot_for("Salary"), None);
    assert_eq!(colors.slot_for("Bonus"), None);
    assert_eq!(colors.len(), 1);
}

#[test]
fn slots_wrap_around_the_palette() {
    let palette = Palette::new(["red", "blue"]).unwrap();
    let snapshot: Vec<Transaction> = ["A", "B", "C", "D", "E"]
        .iter()
        .enumerate()
        .map(|(i, c)| tx(i as i64, TransactionKind::Expense, c))
        .collect();
    let colors = ColorAssignment::from_snapshot(&snapshot, &palette);

    assert_eq!(colors.slot_for("C"), Some(0));
    assert_eq!(colors.slot_for("D"), Some(1));
    assert_eq!(colors.color_for("E"), Some("red"));
}

#[test]
fn assignment_is_stable_within_a_pass() {
    let snapshot = vec![
        tx(1, TransactionKind::Expense, "Food"),
        tx(2, TransactionKind::Expense, "Rent"),
        tx(3, TransactionKind::Expense, "Food"),
    ];
    let a = ColorAssignment::from_snapshot(&snapshot, &Palette::default());
    let b = ColorAssignment::from_snapshot(&snapshot, &Palette::default());
    assert_eq!(a, b);
    assert_eq!(a.slot_for("Food"), a.slot_for("Food"));
}

#[test]
fn empty_palette_is_rejected() {
    let err = Palette::new(Vec::<String>::new()).unwrap_err();
    assert_eq!(err, PaletteError::Empty);
}

#[test]
fn default_palette_has_six_colors() {
    let palette = Palette::default();
    assert_eq!(palette.colors().len(), 6);
    assert_eq!(palette.get(5), Some("#14B8A6"));
    assert_eq!(palette.get(6), None);
}

#[test]
fn empty_snapshot_assigns_nothing() {
    let colors = ColorAssignment::from_snapshot(&[], &Palette::default());
    assert!(colors.is_empty());
    assert_eq!(colors.iter().count(), 0);
}
