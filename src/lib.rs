//! ledger-cli - Command-line personal finance ledger
//!
//! Records income/outcome transactions grouped by category, computes a
//! running balance, and bulk imports transactions from CSV files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management, and upload staging
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, balance)
//! - `storage`: JSON file storage layer (the transaction and category stores)
//! - `services`: Business logic layer (create, balance, CSV import, delete)
//! - `display`: Terminal output formatting
//! - `cli`: clap command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::LedgerError;
