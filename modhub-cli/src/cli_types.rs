//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "modhub")]
#[command(about = "Browse and search a content catalog", long_about = None)]
pub(crate) struct Cli {
    /// Catalog directory (defaults to ./catalog)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging, sorting, and output arguments shared by listing commands.
#[derive(Args, Clone)]
pub(crate) struct ListingArgs {
    /// Sort order: relevance, downloads, updatedAt, name
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<String>,

    /// Results per page
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Tag IDs that must all be present (e.g., v1.20,fabric)
    #[arg(short, long)]
    pub tag: Vec<String>,

    /// Tag IDs under a facet key (e.g., loaders=fabric,forge)
    #[arg(long, value_name = "KEY=IDS")]
    pub facet: Vec<String>,

    /// Match any tag within a facet instead of requiring all
    #[arg(long)]
    pub grouped: bool,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search and list resources
    Search {
        /// Text to search for in names, descriptions, tags, and authors
        query: Option<String>,

        /// Parent item slug (e.g., minecraft)
        #[arg(short, long)]
        item: Option<String>,

        /// Parent item kind: game, web-project, app, art-music
        #[arg(short, long)]
        kind: Option<String>,

        /// Category slug within the item (e.g., mods)
        #[arg(long)]
        category: Option<String>,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Search and list catalog items
    Items {
        /// Text to search for
        query: Option<String>,

        /// Item kind: game, web-project, app, art-music
        #[arg(short, long)]
        kind: Option<String>,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// List an item's resource categories
    Categories {
        /// Item slug
        item: String,

        /// Item kind, when the slug is used by several kinds
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show tag counts per facet
    Tags {
        /// Parent item slug
        #[arg(short, long)]
        item: Option<String>,

        /// Parent item kind
        #[arg(short, long)]
        kind: Option<String>,

        /// Category slug
        #[arg(long)]
        category: Option<String>,
    },

    /// Inspect engine settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
