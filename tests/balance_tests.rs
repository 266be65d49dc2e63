// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlens::analytics::{cash_flow_by_month, Balances, Totals};
use spendlens::models::{PaymentChannel, Transaction, TransactionKind};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(
    id: i64,
    kind: TransactionKind,
    amount: &str,
    date: &str,
    channel: PaymentChannel,
) -> Transaction {
    Transaction {
        id,
        kind,
        title: format!("t{}", id),
        amount: dec(amount),
        category: "Misc".to_string(),
        note: None,
        date: date.to_string(),
        payment_channel: channel,
    }
}

fn sample_snapshot() -> Vec<Transaction> {
    vec![
        tx(1, TransactionKind::Expense, "50", "2024-01-01", PaymentChannel::Cash),
        tx(2, TransactionKind::Expense, "30", "2024-01-02", PaymentChannel::NonCash),
        tx(3, TransactionKind::Income, "1000", "2024-01-01", PaymentChannel::NonCash),
    ]
}

#[test]
fn balances_split_by_channel() {
    let b = Balances::from_snapshot(&sample_snapshot());
    assert_eq!(b.cash, dec("-50"));
    assert_eq!(b.non_cash, dec("970"));
    assert_eq!(b.total(), dec("920"));
    assert_eq!(b.get(PaymentChannel::Cash), dec("-50"));
}

#[test]
fn balances_of_empty_snapshot_are_zero() {
    let b = Balances::from_snapshot(&[]);
    assert_eq!(b, Balances::default());
    assert_eq!(b.cash, Decimal::ZERO);
    assert_eq!(b.non_cash, Decimal::ZERO);
}

#[test]
fn balances_do_not_depend_on_order() {
    let snapshot = sample_snapshot();
    let mut shuffled = snapshot.clone();
    shuffled.rotate_left(1);
    assert_eq!(
        Balances::from_snapshot(&snapshot),
        Balances::from_snapshot(&shuffled)
    );
}

#[test]
fn unparseable_dates_still_count_towards_balances() {
    let snapshot = vec![tx(
        1,
        TransactionKind::Income,
        "12",
        "yesterday",
        PaymentChannel::Cash,
    )];
    assert_eq!(Balances::from_snapshot(&snapshot).cash, dec("12"));
    assert!(cash_flow_by_month(&snapshot).is_empty());
}

#[test]
fn totals_report_income_expense_and_net() {
    let totals = Totals::from_snapshot(&sample_snapshot());
    assert_eq!(totals.income, dec("1000"));
    assert_eq!(totals.expense, dec("80"));
    assert_eq!(totals.net(), dec("920"));
}

#[test]
fn cash_flow_is_grouped_per_month_oldest_first() {
    let snapshot = vec![
        tx(1, TransactionKind::Expense, "20", "2024-02-14", PaymentChannel::Cash),
        tx(2, TransactionKind::Income, "500", "2024-02-01", PaymentChannel::NonCash),
        tx(3, TransactionKind::Expense, "5", "2023-11-30", PaymentChannel::NonCash),
        tx(4, TransactionKind::Income, "100", "2023-11-01T10:00:00Z", PaymentChannel::Cash),
    ];
    let flows = cash_flow_by_month(&snapshot);

    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].key, "2023-11");
    assert_eq!(flows[0].label, "Nov");
    assert_eq!(flows[0].income, dec("100"));
    assert_eq!(flows[0].expense, dec("5"));
    assert_eq!(flows[1].key, "2024-02");
    assert_eq!(flows[1].net(), dec("480"));
}

#[test]
fn sums_saturate_instead_of_overflowing() {
    let huge = Decimal::MAX.to_string();
    let snapshot = vec![
        tx(1, TransactionKind::Expense, &huge, "2024-01-01", PaymentChannel::Cash),
        tx(2, TransactionKind::Expense, &huge, "2024-01-02", PaymentChannel::Cash),
        tx(3, TransactionKind::Income, &huge, "2024-01-02", PaymentChannel::NonCash),
        tx(4, TransactionKind::Income, &huge, "2024-01-03", PaymentChannel::NonCash),
    ];
    let b = Balances::from_snapshot(&snapshot);
    assert_eq!(b.cash, Decimal::MIN);
    assert_eq!(b.non_cash, Decimal::MAX);
    assert_eq!(b.total(), Decimal::ZERO);

    let totals = Totals::from_snapshot(&snapshot);
    assert_eq!(totals.expense, Decimal::MAX);
    assert_eq!(totals.net(), Decimal::ZERO);
    assert_eq!(cash_flow_by_month(&snapshot)[0].expense, Decimal::MAX);
}
