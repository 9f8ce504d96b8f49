//! modhub CLI
//!
//! Command-line interface for browsing and searching a content catalog.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Install the logger. Normal output goes through `log::info!`, so the
/// default format prints info messages bare and prefixes everything else
/// with its level.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_env("MODHUB_LOG")
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog_dir = cli.catalog.as_deref();
    match cli.command {
        Commands::Search {
            query,
            item,
            kind,
            category,
            listing,
        } => commands::search::run_search(catalog_dir, query, item, kind, category, listing),
        Commands::Items {
            query,
            kind,
            listing,
        } => commands::items::run_items(catalog_dir, query, kind, listing),
        Commands::Categories { item, kind } => {
            commands::categories::run_categories(catalog_dir, &item, kind)
        }
        Commands::Tags {
            item,
            kind,
            category,
        } => commands::tags::run_tags(catalog_dir, item, kind, category),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
