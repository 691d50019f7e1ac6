//! Transaction model
//!
//! A transaction records a single income or outcome movement with a title,
//! a non-negative value, and the category it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Outcome,
}

impl TransactionKind {
    /// The literal string used in CSV files and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(format!(
                "unknown transaction type '{}' (expected 'income' or 'outcome')",
                other
            )),
        }
    }
}

/// A ledger transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Short description of the transaction
    pub title: String,

    /// Non-negative magnitude; the kind carries the direction
    pub value: Money,

    /// Whether this is income or outcome
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// The category this transaction belongs to
    pub category_id: CategoryId,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        value: Money,
        kind: TransactionKind,
        category_id: CategoryId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            title: title.into(),
            value,
            kind,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an outcome transaction
    pub fn is_outcome(&self) -> bool {
        self.kind == TransactionKind::Outcome
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        if self.value.is_negative() {
            return Err(TransactionValidationError::NegativeValue(self.value));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.title, self.value)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NegativeValue(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Transaction title cannot be empty"),
            Self::NegativeValue(value) => {
                write!(f, "Transaction value must be non-negative (got {})", value)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
