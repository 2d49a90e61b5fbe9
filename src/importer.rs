use std::io::Read;
use std::path::Path;

use rusqlite::Connection;

use crate::error::{CashflowError, QuoteFault, Result};
use crate::models::CsvRow;

/// Minimum number of fields a data row needs to become a transaction.
pub const MIN_FIELDS: usize = 6;

// ---------------------------------------------------------------------------
// CSV reading
// ---------------------------------------------------------------------------

/// Read the whole file into memory, header included.
///
/// Quoting is checked before parsing: a `"` inside an unquoted field, or a
/// quoted field that is not closed by `"` followed by a delimiter, line end or
/// end of file, fails the read.
pub fn read_rows(file_path: &Path) -> Result<Vec<CsvRow>> {
    let mut file = std::fs::File::open(file_path).map_err(|source| CashflowError::OpenCsv {
        path: file_path.to_path_buf(),
        source,
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|source| CashflowError::OpenCsv {
            path: file_path.to_path_buf(),
            source,
        })?;

    check_quoting(&data)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[derive(Clone, Copy)]
enum Field {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
    CrAfterQuote,
}

fn check_quoting(data: &[u8]) -> Result<()> {
    let mut line = 1;
    let mut field_line = 1;
    let mut state = Field::Start;
    let err = |line: usize, fault: QuoteFault| CashflowError::Quote { line, fault };

    for &b in data {
        state = match (state, b) {
            (Field::Start, b'"') => {
                field_line = line;
                Field::Quoted
            }
            (Field::Start | Field::Unquoted | Field::QuoteInQuoted, b',') => Field::Start,
            (Field::Start | Field::Unquoted | Field::QuoteInQuoted | Field::CrAfterQuote, b'\n') => {
                line += 1;
                Field::Start
            }
            (Field::Unquoted, b'"') => return Err(err(line, QuoteFault::Bare)),
            (Field::Start | Field::Unquoted, _) => Field::Unquoted,
            (Field::Quoted, b'"') => Field::QuoteInQuoted,
            (Field::Quoted, b'\n') => {
                line += 1;
                Field::Quoted
            }
            (Field::Quoted, _) => Field::Quoted,
            // `""` inside a quoted field is an escaped quote
            (Field::QuoteInQuoted, b'"') => Field::Quoted,
            (Field::QuoteInQuoted, b'\r') => Field::CrAfterQuote,
            (Field::QuoteInQuoted | Field::CrAfterQuote, _) => {
                return Err(err(line, QuoteFault::Unbalanced))
            }
        };
    }

    match state {
        Field::Quoted => Err(err(field_line, QuoteFault::Unbalanced)),
        _ => Ok(()),
    }
}

/// Number of rows after the header; zero for an empty file.
pub fn data_row_count(rows: &[CsvRow]) -> usize {
    rows.len().saturating_sub(1)
}

// ---------------------------------------------------------------------------
// Table loading
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct LoadResult {
    /// Data rows seen, including the ones skipped or rejected.
    pub attempted: usize,
    pub inserted: usize,
    pub skipped_short: usize,
    pub failed: usize,
}

/// Replace the contents of `transactions` with the data rows of `rows`.
///
/// The header (row 0) is never inserted. Rows with fewer than [`MIN_FIELDS`]
/// fields are dropped, and a failing insert is logged without stopping the load.
/// Amount and balance are bound as text and left to the REAL column affinity.
pub fn replace_transactions(conn: &Connection, rows: &[CsvRow]) -> Result<LoadResult> {
    conn.execute("DELETE FROM transactions", [])
        .map_err(CashflowError::Truncate)?;

    let mut result = LoadResult {
        attempted: data_row_count(rows),
        inserted: 0,
        skipped_short: 0,
        failed: 0,
    };

    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() < MIN_FIELDS {
            result.skipped_short += 1;
            continue;
        }
        match insert_row(conn, row) {
            Ok(()) => result.inserted += 1,
            Err(e) => {
                log::warn!("failed to insert row {i}: {e}");
                result.failed += 1;
            }
        }
    }
    Ok(result)
}

fn insert_row(conn: &Connection, row: &[String]) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO transactions (account_number, description, transaction_date, transaction_type, transaction_amount, balance) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    stmt.execute(rusqlite::params![row[0], row[1], row[2], row[3], row[4], row[5]])?;
    Ok(())
}
