//! Display formatting for terminal output

pub mod balance;
pub mod transaction;

pub use balance::format_balance;
pub use transaction::{format_transaction_register, format_transaction_row};
