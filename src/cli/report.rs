use colored::Colorize;
use rusqlite::Connection;

use crate::cli::RunConfig;
use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::reports::{for_each_by_date, format_line};

pub fn print_transactions(conn: &Connection) -> Result<()> {
    println!("{}", "Transactions ordered by date:".bold());
    for_each_by_date(conn, |row| match row {
        Ok(txn) => println!("{}", format_line(&txn)),
        Err(e) => log::warn!("failed to scan row: {e}"),
    })
}

pub fn run(config: &RunConfig) -> Result<()> {
    let conn = get_connection(&config.db_path)?;
    init_db(&conn)?;
    print_transactions(&conn)
}
