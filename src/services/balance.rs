//! Balance service
//!
//! Computes the derived income/outcome/total summary over the full
//! transaction set. No caching and no incremental maintenance: every call
//! recomputes from scratch.

use crate::error::LedgerResult;
use crate::models::Balance;
use crate::storage::Storage;

/// Service for balance computation
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Compute the current balance over all stored transactions
    pub fn current(&self) -> LedgerResult<Balance> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(Balance::of(&transactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::{CategoryId, Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_current_balance_empty_store() {
        let (_dir, storage) = test_storage();
        let balance = BalanceService::new(&storage).current().unwrap();
        assert_eq!(balance, Balance::default());
    }

    #[test]
    fn test_current_balance() {
        let (_dir, storage) = test_storage();
        let category = CategoryId::new();

        storage
            .transactions
            .insert(Transaction::new(
                "Salary",
                Money::from_cents(500_000),
                TransactionKind::Income,
                category,
            ))
            .unwrap();
        storage
            .transactions
            .insert(Transaction::new(
                "Rent",
                Money::from_cents(120_000),
                TransactionKind::Outcome,
                category,
            ))
            .unwrap();

        let balance = BalanceService::new(&storage).current().unwrap();
        assert_eq!(balance.income, Money::from_cents(500_000));
        assert_eq!(balance.outcome, Money::from_cents(120_000));
        assert_eq!(balance.total, Money::from_cents(380_000));
    }
}
