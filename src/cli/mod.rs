//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod import;
pub mod transaction;

pub use import::handle_import_command;
pub use transaction::{handle_transaction_command, TransactionCommands};
