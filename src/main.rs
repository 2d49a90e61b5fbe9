mod cli;
mod db;
mod discovery;
mod error;
mod fmt;
mod importer;
mod models;
mod reports;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, RunConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = settings::load_settings().and_then(|settings| {
        let config = RunConfig::resolve(&cli, settings);
        match cli.command {
            None | Some(Commands::Load) => cli::load::run(&config),
            Some(Commands::Report) => cli::report::run(&config),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
