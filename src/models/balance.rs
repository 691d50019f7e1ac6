//! Derived balance summary
//!
//! The balance is never persisted; it is recomputed from the full transaction
//! set on every request.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::transaction::Transaction;

/// Income/outcome/total summary over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balance {
    /// Sum of all income values
    pub income: Money,

    /// Sum of all outcome values
    pub outcome: Money,

    /// income - outcome
    pub total: Money,
}

impl Balance {
    /// Compute the balance over a set of transactions
    ///
    /// Partitions by kind and sums each side; an empty set yields all zeros.
    pub fn of(transactions: &[Transaction]) -> Self {
        let income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.value)
            .sum();

        let outcome: Money = transactions
            .iter()
            .filter(|t| t.is_outcome())
            .map(|t| t.value)
            .sum();

        Self {
            income,
            outcome,
            total: income - outcome,
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "income {} / outcome {} / total {}",
            self.income, self.outcome, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, TransactionKind};

    fn txn(value: i64, kind: TransactionKind) -> Transaction {
        Transaction::new("test", Money::from_cents(value), kind, CategoryId::new())
    }

    #[test]
    fn test_empty_set_is_all_zeros() {
        let balance = Balance::of(&[]);
        assert_eq!(balance.income, Money::zero());
        assert_eq!(balance.outcome, Money::zero());
        assert_eq!(balance.total, Money::zero());
    }

    #[test]
    fn test_partition_and_sum() {
        let transactions = vec![
            txn(500_000, TransactionKind::Income),
            txn(120_000, TransactionKind::Outcome),
            txn(30_000, TransactionKind::Outcome),
            txn(10_000, TransactionKind::Income),
        ];

        let balance = Balance::of(&transactions);
        assert_eq!(balance.income, Money::from_cents(510_000));
        assert_eq!(balance.outcome, Money::from_cents(150_000));
        assert_eq!(balance.total, Money::from_cents(360_000));
    }

    #[test]
    fn test_total_invariant() {
        let transactions = vec![
            txn(123, TransactionKind::Income),
            txn(456, TransactionKind::Outcome),
            txn(789, TransactionKind::Income),
        ];

        let balance = Balance::of(&transactions);
        assert_eq!(balance.total, balance.income - balance.outcome);
        assert!(!balance.income.is_negative());
        assert!(!balance.outcome.is_negative());
    }

    #[test]
    fn test_total_can_go_negative() {
        // The derived total may be negative even though each side is a
        // non-negative sum of magnitudes.
        let transactions = vec![txn(100, TransactionKind::Outcome)];
        let balance = Balance::of(&transactions);
        assert_eq!(balance.total, Money::from_cents(-100));
    }

    #[test]
    fn test_serialization() {
        let balance = Balance {
            income: Money::from_cents(1000),
            outcome: Money::from_cents(400),
            total: Money::from_cents(600),
        };
        let json = serde_json::to_string(&balance).unwrap();
        assert_eq!(json, r#"{"income":1000,"outcome":400,"total":600}"#);
    }
}
