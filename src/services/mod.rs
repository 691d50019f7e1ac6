//! Business logic layer
//!
//! Services borrow the storage coordinator and implement the ledger
//! operations on top of the two repositories.

pub mod balance;
pub mod import;
pub mod transaction;

pub use balance::BalanceService;
pub use import::ImportService;
pub use transaction::{CreateTransactionInput, TransactionFilter, TransactionService};
