//! Import CLI command
//!
//! Stages the given CSV file into the uploads directory, then runs the
//! import service against the staged copy. The staged copy is consumed by
//! the import; the caller's original file is never modified.

use std::path::Path;

use crate::config::upload;
use crate::display::format_transaction_register;
use crate::error::LedgerResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &str) -> LedgerResult<()> {
    let staged = upload::stage_file(storage.paths(), Path::new(file))?;

    let imported = ImportService::new(storage).import_file(&staged)?;
    let categories = storage.categories.get_all()?;

    println!("Imported {} transaction(s) from {}", imported.len(), file);
    println!();
    print!("{}", format_transaction_register(&imported, &categories));

    Ok(())
}
