//! Storage initialization
//!
//! Creates the directory layout and empty data files. Categories are not
//! seeded; they are created lazily the first time a transaction names them.

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

use super::Storage;

/// Initialize storage at the given paths
///
/// Idempotent: existing data files are left untouched.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    storage.save_all()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_data_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.transactions_file().exists());
        assert!(paths.categories_file().exists());
        assert!(paths.uploads_dir().exists());
    }

    #[test]
    fn test_initialize_is_idempotent_and_preserves_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        // Write a category, re-initialize, and make sure it survives
        let storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        storage
            .categories
            .insert(crate::models::Category::new("Food"))
            .unwrap();
        storage.save_all().unwrap();

        initialize_storage(&paths).unwrap();

        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.categories.count().unwrap(), 1);
    }
}
