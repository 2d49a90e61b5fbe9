use rusqlite::{Connection, Row};

use crate::error::{CashflowError, Result};
use crate::fmt::grouped;
use crate::models::Transaction;

fn row_to_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        account_number: row.get(0)?,
        description: row.get(1)?,
        transaction_date: row.get(2)?,
        transaction_type: row.get(3)?,
        transaction_amount: row.get(4)?,
        balance: row.get(5)?,
    })
}

/// Visit stored transactions in text order of `transaction_date`, row by row.
///
/// Each row reaches `visit` as decoded, so a row that fails to decode arrives as
/// its `Err` in place. A cursor error ends the listing early and is logged; only
/// a failure to run the query is fatal.
pub fn for_each_by_date<F>(conn: &Connection, mut visit: F) -> Result<()>
where
    F: FnMut(rusqlite::Result<Transaction>),
{
    let mut stmt = conn
        .prepare(
            "SELECT account_number, description, transaction_date, transaction_type, transaction_amount, balance \
             FROM transactions ORDER BY transaction_date",
        )
        .map_err(CashflowError::Query)?;
    let mut rows = stmt.query([]).map_err(CashflowError::Query)?;

    loop {
        match rows.next() {
            Ok(Some(row)) => visit(row_to_transaction(row)),
            Ok(None) => break,
            Err(e) => {
                log::warn!("row iteration error: {e}");
                break;
            }
        }
    }
    Ok(())
}

/// `account | description | date | type | amount | balance`
pub fn format_line(txn: &Transaction) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        txn.account_number,
        txn.description,
        txn.transaction_date,
        txn.transaction_type,
        grouped(txn.transaction_amount),
        grouped(txn.balance),
    )
}
