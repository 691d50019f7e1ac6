//! Transaction service
//!
//! Business logic for creating, listing, and deleting single transactions:
//! input validation, the insufficient-funds check, and lazy category
//! resolution by title.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Balance, Category, Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
///
/// Explicit per-operation input struct; fields are validated before any
/// business logic runs.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub value: Money,
    pub kind: TransactionKind,
    pub category: String,
}

/// Options for filtering transaction listings
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by category title
    pub category: Option<String>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    ///
    /// An outcome whose value exceeds the current total balance is rejected
    /// with `InsufficientFunds`; a value exactly equal to the total is
    /// allowed. The category is resolved by exact title, created on first
    /// reference. The balance read and the insert are not one atomic unit;
    /// single-request-at-a-time use is assumed.
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(LedgerError::Validation(
                "Transaction title cannot be empty".into(),
            ));
        }

        if input.value.is_negative() {
            return Err(LedgerError::Validation(
                "Transaction value must be non-negative".into(),
            ));
        }

        let category_title = input.category.trim();
        if category_title.is_empty() {
            return Err(LedgerError::Validation(
                "Category title cannot be empty".into(),
            ));
        }

        if input.kind == TransactionKind::Outcome {
            let transactions = self.storage.transactions.get_all()?;
            let total = Balance::of(&transactions).total;
            if input.value > total {
                return Err(LedgerError::InsufficientFunds {
                    needed: input.value,
                    available: total,
                });
            }
        }

        let category = match self.storage.categories.get_by_title(category_title)? {
            Some(existing) => existing,
            None => {
                let category = Category::new(category_title);
                category
                    .validate()
                    .map_err(|e| LedgerError::Validation(e.to_string()))?;
                self.storage.categories.insert(category.clone())?;
                category
            }
        };

        let txn = Transaction::new(title, input.value, input.kind, category.id);
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.categories.save()?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List transactions with optional filtering
    pub fn list(&self, filter: TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = if let Some(title) = &filter.category {
            match self.storage.categories.get_by_title(title)? {
                Some(category) => self.storage.transactions.get_by_category(category.id)?,
                None => Vec::new(),
            }
        } else {
            self.storage.transactions.get_all()?
        };

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Delete a transaction by ID
    ///
    /// Fails with `NotFound` if no such transaction exists. The category is
    /// left in place even when it becomes orphaned.
    pub fn delete(&self, id: TransactionId) -> LedgerResult<()> {
        self.storage
            .transactions
            .remove(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.save()?;
        Ok(())
    }
}
