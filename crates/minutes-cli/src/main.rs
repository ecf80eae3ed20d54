//! Minutes CLI - Command-line interface for transcript action item extraction.

use clap::Parser;
use minutes_cli::commands;
use minutes_cli::{Cli, Command, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> minutes_cli::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Logs go to stderr so stdout stays valid JSON
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let output = match &cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config)?,
        Command::Prompt(args) => commands::execute_prompt(args, &config)?,
        Command::Import(args) => commands::execute_import(args, &config)?,
    };

    println!("{}", output);
    Ok(())
}
