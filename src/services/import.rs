//! CSV import service
//!
//! Bulk-ingests transactions from a CSV file: parses rows, reconciles
//! category titles against the category store (creating the missing ones in
//! one batch), batch-inserts the transactions, and removes the source file.
//!
//! File format: comma-delimited, first row is a header and is skipped,
//! data rows are `title,type,value,category` with `type` one of the literal
//! strings `income` or `outcome`.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// A parsed CSV row that survived field validation
#[derive(Debug, Clone)]
struct CsvRow {
    title: String,
    kind: TransactionKind,
    value: Money,
    category: String,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import transactions from a CSV file
    ///
    /// Rows whose title, type, or value field is empty after trimming are
    /// skipped silently. A non-empty but unparseable type or value aborts
    /// the whole import with nothing persisted, as does malformed CSV
    /// structure. The source file is deleted only after the batch insert
    /// has been persisted; on failure it is left in place.
    ///
    /// Returns the persisted transactions in row order.
    pub fn import_file(&self, path: &Path) -> LedgerResult<Vec<Transaction>> {
        let (rows, category_titles) = self.parse_rows(path)?;

        // Reconciliation starts only once every row has been read.
        let existing = self.storage.categories.get_by_titles(&category_titles)?;
        let existing_titles: HashSet<&str> = existing.iter().map(|c| c.title.as_str()).collect();

        // Titles present in the CSV but absent from the store, de-duplicated
        // in first-occurrence order.
        let mut seen: HashSet<&str> = HashSet::new();
        let missing: Vec<&str> = category_titles
            .iter()
            .map(|t| t.as_str())
            .filter(|t| !existing_titles.contains(t))
            .filter(|t| seen.insert(*t))
            .collect();

        let new_categories: Vec<Category> = missing.iter().map(|t| Category::new(*t)).collect();
        self.storage.categories.insert_batch(new_categories.clone())?;

        // Resolve each row's category by exact title. Existing categories
        // take precedence over newly created ones, and within each group the
        // first occurrence wins, so duplicate titles resolve deterministically.
        let mut by_title: HashMap<&str, &Category> = HashMap::new();
        for category in existing.iter().chain(new_categories.iter()) {
            by_title.entry(category.title.as_str()).or_insert(category);
        }

        let mut created = Vec::with_capacity(rows.len());
        for row in &rows {
            let category = by_title.get(row.category.as_str()).ok_or_else(|| {
                LedgerError::Import(format!("no category resolved for '{}'", row.category))
            })?;
            created.push(Transaction::new(
                row.title.clone(),
                row.value,
                row.kind,
                category.id,
            ));
        }

        self.storage.transactions.insert_batch(created.clone())?;
        self.storage.transactions.save()?;
        self.storage.categories.save()?;

        // The import owns its staged file; remove it now that the batch is
        // persisted. Earlier failures leave the file behind on purpose.
        std::fs::remove_file(path)
            .map_err(|e| LedgerError::Io(format!("Failed to remove {}: {}", path.display(), e)))?;

        Ok(created)
    }

    /// Parse the CSV file into surviving rows plus the ordered list of
    /// category titles they reference (duplicates preserved)
    fn parse_rows(&self, path: &Path) -> LedgerResult<(Vec<CsvRow>, Vec<String>)> {
        let file = File::open(path)
            .map_err(|e| LedgerError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        let mut category_titles = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            // Data rows start on line 2, after the header.
            let line = idx + 2;

            let record = result
                .map_err(|e| LedgerError::Import(format!("malformed CSV at line {}: {}", line, e)))?;

            let title = record.get(0).unwrap_or("").trim();
            let kind_raw = record.get(1).unwrap_or("").trim();
            let value_raw = record.get(2).unwrap_or("").trim();
            let category = record.get(3).unwrap_or("").trim();

            // Silent skip is the defined policy for incomplete rows.
            if title.is_empty() || kind_raw.is_empty() || value_raw.is_empty() {
                continue;
            }

            let kind: TransactionKind = kind_raw
                .parse()
                .map_err(|e| LedgerError::Import(format!("line {}: {}", line, e)))?;

            let value = Money::parse(value_raw)
                .map_err(|e| LedgerError::Import(format!("line {}: {}", line, e)))?;
            if value.is_negative() {
                return Err(LedgerError::Import(format!(
                    "line {}: value must be non-negative (got {})",
                    line, value
                )));
            }

            category_titles.push(category.to_string());
            rows.push(CsvRow {
                title: title.to_string(),
                kind,
                value,
                category: category.to_string(),
            });
        }

        Ok((rows, category_titles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::Balance;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    const SAMPLE: &str = "\
title,type,value,category
Salary,income,5000,Income
Rent,outcome,1200,House
";

    #[test]
    fn test_import_creates_transactions_and_categories() {
        let (dir, storage) = test_storage();
        let path = write_csv(&dir, "import.csv", SAMPLE);

        let imported = ImportService::new(&storage).import_file(&path).unwrap();

        assert_eq!(imported.len(), 2);
        assert_eq!(imported[0].title, "Salary");
        assert_eq!(imported[0].kind, TransactionKind::Income);
        assert_eq!(imported[0].value, Money::from_dollars(5000));
        assert_eq!(imported[1].title, "Rent");

        assert!(storage.categories.get_by_title("Income").unwrap().is_some());
        assert!(storage.categories.get_by_title("House").unwrap().is_some());
        assert_eq!(storage.categories.count().unwrap(), 2);
        assert_eq!(storage.transactions.count().unwrap(), 2);

        let balance = Balance::of(&storage.transactions.get_all().unwrap());
        assert_eq!(balance.total, Money::from_dollars(3800));
    }

    #[test]
    fn test_import_removes_source_file() {
        let (dir, storage) = test_storage();
        let path = write_csv(&dir, "import.csv", SAMPLE);

        ImportService::new(&storage).import_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_import_skips_rows_with_empty_required_fields() {
        let (dir, storage) = test_storage();
        let csv = "\
title,type,value,category
Snacks,outcome,,Food
,income,100,Food
Candy,,50,Food
Salary,income,5000,Income
";
        let path = write_csv(&dir, "import.csv", csv);

        let imported = ImportService::new(&storage).import_file(&path).unwrap();

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].title, "Salary");
        // Categories of skipped rows are never collected
        assert!(storage.categories.get_by_title("Food").unwrap().is_none());
    }

    #[test]
    fn test_reimport_creates_no_additional_categories() {
        let (dir, storage) = test_storage();
        let service = ImportService::new(&storage);

        let first = write_csv(&dir, "first.csv", SAMPLE);
        service.import_file(&first).unwrap();
        assert_eq!(storage.categories.count().unwrap(), 2);

        let second = write_csv(&dir, "second.csv", SAMPLE);
        service.import_file(&second).unwrap();

        assert_eq!(storage.categories.count().unwrap(), 2);
        assert_eq!(storage.transactions.count().unwrap(), 4);
    }

    #[test]
    fn test_duplicate_titles_within_csv_create_one_category() {
        let (dir, storage) = test_storage();
        let csv = "\
title,type,value,category
Groceries,outcome,100,Food
Snacks,outcome,20,Food
Takeout,outcome,35,Food
";
        let path = write_csv(&dir, "import.csv", csv);

        let imported = ImportService::new(&storage).import_file(&path).unwrap();

        assert_eq!(imported.len(), 3);
        assert_eq!(storage.categories.count().unwrap(), 1);

        let food = storage.categories.get_by_title("Food").unwrap().unwrap();
        assert!(imported.iter().all(|t| t.category_id == food.id));
    }

    #[test]
    fn test_rows_attach_to_existing_categories() {
        let (dir, storage) = test_storage();

        let existing = Category::new("Income");
        storage.categories.insert(existing.clone()).unwrap();
        storage.categories.save().unwrap();

        let path = write_csv(&dir, "import.csv", SAMPLE);
        let imported = ImportService::new(&storage).import_file(&path).unwrap();

        assert_eq!(imported[0].category_id, existing.id);
        assert_eq!(storage.categories.count().unwrap(), 2); // Income + House
    }

    #[test]
    fn test_unknown_type_aborts_import() {
        let (dir, storage) = test_storage();
        let csv = "\
title,type,value,category
Salary,income,5000,Income
Oops,transfer,100,Misc
";
        let path = write_csv(&dir, "import.csv", csv);

        let err = ImportService::new(&storage).import_file(&path).unwrap_err();

        assert!(matches!(err, LedgerError::Import(_)));
        assert!(err.to_string().contains("line 3"));
        // Nothing persisted, file left in place
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.categories.count().unwrap(), 0);
        assert!(path.exists());
    }

    #[test]
    fn test_negative_value_aborts_import() {
        let (dir, storage) = test_storage();
        let csv = "\
title,type,value,category
Refund,income,-50,Misc
";
        let path = write_csv(&dir, "import.csv", csv);

        let err = ImportService::new(&storage).import_file(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Import(_)));
        assert!(path.exists());
    }

    #[test]
    fn test_header_only_file_imports_nothing() {
        let (dir, storage) = test_storage();
        let path = write_csv(&dir, "import.csv", "title,type,value,category\n");

        let imported = ImportService::new(&storage).import_file(&path).unwrap();

        assert!(imported.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let (dir, storage) = test_storage();
        let csv = "\
title,type,value,category
  Salary , income , 5000 , Income
";
        let path = write_csv(&dir, "import.csv", csv);

        let imported = ImportService::new(&storage).import_file(&path).unwrap();

        assert_eq!(imported[0].title, "Salary");
        assert!(storage.categories.get_by_title("Income").unwrap().is_some());
    }
}
