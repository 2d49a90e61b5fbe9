use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::error::{CashflowError, Result};

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS example (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_number TEXT,
    description TEXT,
    transaction_date TEXT,
    transaction_type TEXT,
    transaction_amount REAL,
    balance REAL
);
";

/// A bundled SQLite still reads a name starting with `file:` as a URI, so
/// relative names of that shape are anchored to the current directory.
fn store_path(db_path: &Path) -> PathBuf {
    if db_path.is_relative() && db_path.to_string_lossy().starts_with("file:") {
        Path::new(".").join(db_path)
    } else {
        db_path.to_path_buf()
    }
}

/// Open (or create) the store in shared-cache, read-write-create mode.
pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_SHARED_CACHE
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(store_path(db_path), flags).map_err(|source| CashflowError::OpenDb {
        path: db_path.to_path_buf(),
        source,
    })
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA).map_err(CashflowError::Schema)
}

#[cfg(test)]
pub fn count_transactions(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT count(*) FROM transactions", [], |row| row.get(0))
}
