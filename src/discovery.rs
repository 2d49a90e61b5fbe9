use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{CashflowError, Result};

const CSV_SUFFIX: &str = ".csv";

fn is_csv_name(name: &str) -> bool {
    name.len() > CSV_SUFFIX.len() && name.ends_with(CSV_SUFFIX)
}

/// Pick the most recently modified `*.csv` file directly inside `dir`.
///
/// Entries are visited in name order. Directories are ignored, and entries whose
/// metadata cannot be read are skipped without complaint. On equal modification
/// times the first file seen is kept.
pub fn find_newest_csv(dir: &Path) -> Result<PathBuf> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| CashflowError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<_> = read_dir.filter_map(|entry| entry.ok()).collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !is_csv_name(name) {
            continue;
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        let is_newer = match &newest {
            Some((best, _)) => modified > *best,
            None => true,
        };
        if is_newer {
            log::debug!("candidate {name} (modified {modified:?})");
            newest = Some((modified, entry.path()));
        }
    }

    newest
        .map(|(_, path)| path)
        .ok_or_else(|| CashflowError::NoCsvFiles(dir.to_path_buf()))
}
