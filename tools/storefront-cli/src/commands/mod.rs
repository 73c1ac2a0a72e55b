//! CLI command implementations.

pub mod config;
pub mod filters;
pub mod search;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use storefront_search::search::{LlmProvider, PriceRange};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Restrict to a brand (repeatable).
    #[arg(short, long = "brand")]
    pub brands: Vec<String>,

    /// Restrict to a CPU family.
    #[arg(long)]
    pub cpu: Option<String>,

    /// Restrict to a price range, e.g. 10000-20000.
    #[arg(short, long)]
    pub price: Option<PriceRange>,

    /// Ranking backend (openai or gemini).
    #[arg(long)]
    pub provider: Option<LlmProvider>,

    /// Also write the rendered results page to this file.
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,
}

/// Arguments for the filters command.
#[derive(Args)]
pub struct FiltersArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
