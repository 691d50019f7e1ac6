//! Transaction CLI commands
//!
//! Bridges clap argument parsing with the transaction and balance services.

use clap::Subcommand;

use crate::display::{format_balance, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionId, TransactionKind};
use crate::services::{
    BalanceService, CreateTransactionInput, TransactionFilter, TransactionService,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction title
        title: String,
        /// Value (e.g., "5000" or "1200.50")
        value: String,
        /// Transaction type: "income" or "outcome"
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Category title (created if it doesn't exist)
        #[arg(short, long)]
        category: String,
    },

    /// List transactions with the current balance
    List {
        /// Filter by category title
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            title,
            value,
            kind,
            category,
        } => {
            let value = Money::parse(&value)
                .map_err(|e| LedgerError::Validation(e.to_string()))?;
            let kind: TransactionKind = kind
                .parse()
                .map_err(LedgerError::Validation)?;

            let service = TransactionService::new(storage);
            let txn = service.create(CreateTransactionInput {
                title,
                value,
                kind,
                category,
            })?;

            println!("Created transaction {}: {}", txn.id, txn);
            Ok(())
        }

        TransactionCommands::List { category, limit } => {
            let service = TransactionService::new(storage);
            let transactions = service.list(TransactionFilter { category, limit })?;
            let categories = storage.categories.get_all()?;

            print!("{}", format_transaction_register(&transactions, &categories));

            let balance = BalanceService::new(storage).current()?;
            println!();
            print!("{}", format_balance(&balance));
            Ok(())
        }

        TransactionCommands::Delete { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| LedgerError::transaction_not_found(id.clone()))?;

            TransactionService::new(storage).delete(id)?;
            println!("Deleted transaction {}", id);
            Ok(())
        }
    }
}
