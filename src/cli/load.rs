use crate::cli::report::print_transactions;
use crate::cli::RunConfig;
use crate::db::{get_connection, init_db};
use crate::discovery::find_newest_csv;
use crate::error::Result;
use crate::importer::{data_row_count, read_rows, replace_transactions};

pub fn run(config: &RunConfig) -> Result<()> {
    let conn = get_connection(&config.db_path)?;
    init_db(&conn)?;
    log::debug!("schema ready in {}", config.db_path.display());

    let file_path = find_newest_csv(&config.scan_dir)?;
    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    println!("Loading newest CSV file: {file_name}");

    let rows = read_rows(&file_path)?;
    println!("Read {} rows from CSV file.", data_row_count(&rows));
    // Header plus the first few data rows.
    for row in rows.iter().take(config.preview_rows + 1) {
        println!("{}", row.join(", "));
    }

    let result = replace_transactions(&conn, &rows)?;
    log::debug!(
        "{} inserted, {} short, {} failed",
        result.inserted,
        result.skipped_short,
        result.failed
    );
    println!("Inserted {} transactions into the database.", result.attempted);

    println!();
    print_transactions(&conn)
}
