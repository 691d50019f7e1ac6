//! Upload staging for CSV import
//!
//! Copies an inbound file into the uploads directory under a
//! random-hex-prefixed name. The import service consumes and deletes the
//! staged copy, so the caller's original file is never touched.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// Stage a file for import
///
/// Returns the path of the staged copy inside the uploads directory. The
/// staged name is `<random hex>-<original filename>` so repeated imports of
/// the same file never collide.
pub fn stage_file(paths: &LedgerPaths, source: &Path) -> Result<PathBuf, LedgerError> {
    if !source.is_file() {
        return Err(LedgerError::Import(format!(
            "No such file: {}",
            source.display()
        )));
    }

    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LedgerError::Import(format!("Invalid file name: {}", source.display())))?;

    std::fs::create_dir_all(paths.uploads_dir())
        .map_err(|e| LedgerError::Io(format!("Failed to create uploads directory: {}", e)))?;

    let prefix = Uuid::new_v4().simple().to_string();
    let staged = paths.uploads_dir().join(format!("{}-{}", &prefix[..20], file_name));

    std::fs::copy(source, &staged).map_err(|e| {
        LedgerError::Io(format!(
            "Failed to stage {}: {}",
            source.display(),
            e
        ))
    })?;

    Ok(staged)
}
