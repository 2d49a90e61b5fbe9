pub mod load;
pub mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::{expand_home, Settings};

#[derive(Parser)]
#[command(
    name = "cashflow",
    about = "Load the newest CSV statement into SQLite and list its transactions by date."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory scanned for CSV files (default: current directory)
    #[arg(long, global = true)]
    pub dir: Option<String>,

    /// Database file (default: cashflow.db)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Number of data rows shown in the CSV preview
    #[arg(long, global = true)]
    pub preview: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the newest CSV file, replacing stored transactions (default).
    Load,
    /// Print stored transactions without loading a file.
    Report,
}

/// Paths and limits for one run, after applying CLI flags over settings.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub scan_dir: PathBuf,
    pub db_path: PathBuf,
    pub preview_rows: usize,
}

impl RunConfig {
    pub fn resolve(cli: &Cli, settings: Settings) -> Self {
        Self {
            scan_dir: expand_home(cli.dir.as_deref().unwrap_or(&settings.scan_dir)),
            db_path: expand_home(cli.db.as_deref().unwrap_or(&settings.db_path)),
            preview_rows: cli.preview.unwrap_or(settings.preview_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_settings() {
        let cli = Cli::parse_from(["cashflow"]);
        let config = RunConfig::resolve(&cli, Settings::default());
        assert!(cli.command.is_none());
        assert_eq!(config.scan_dir, PathBuf::from("."));
        assert_eq!(config.db_path, PathBuf::from("cashflow.db"));
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from(["cashflow", "report", "--db", "other.db", "--preview", "2"]);
        let settings = Settings {
            scan_dir: "/statements".to_string(),
            db_path: "books.db".to_string(),
            preview_rows: 9,
        };
        let config = RunConfig::resolve(&cli, settings);
        assert!(matches!(cli.command, Some(Commands::Report)));
        assert_eq!(config.scan_dir, PathBuf::from("/statements"));
        assert_eq!(config.db_path, PathBuf::from("other.db"));
        assert_eq!(config.preview_rows, 2);
    }
}
