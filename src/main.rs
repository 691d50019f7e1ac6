use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger::cli::{handle_import_command, handle_transaction_command, TransactionCommands};
use ledger::config::{paths::LedgerPaths, settings::Settings};
use ledger::display::format_balance;
use ledger::services::BalanceService;
use ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Command-line personal finance ledger",
    long_about = "A small personal finance ledger: records income and outcome \
                  transactions grouped by category, computes a running balance, \
                  and bulk imports transactions from CSV files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Import transactions from a CSV file
    Import {
        /// Path to a CSV file (title,type,value,category with a header row)
        file: String,
    },

    /// Show the current balance
    Balance,

    /// Initialize the ledger data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &file)?;
        }
        Some(Commands::Balance) => {
            let balance = BalanceService::new(&storage).current()?;
            print!("{}", format_balance(&balance));
        }
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            ledger::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Add a transaction with 'ledger transaction add' or bulk");
            println!("import a CSV with 'ledger import <file>'.");
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Uploads directory: {}", paths.uploads_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("ledger - Command-line personal finance ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
