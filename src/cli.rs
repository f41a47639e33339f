use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eemis-lookup")]
#[command(about = "Registry identifier lookup (national ID / tax ID / business registration)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up an identifier against the registry
    Lookup {
        /// Identifier to look up (national ID, tax ID, or business
        /// registration number; classified by shape)
        #[arg(required = true)]
        query: String,

        /// Print the raw result as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Write the embedded photo (decoded PNG) to this file
        #[arg(long)]
        photo_out: Option<PathBuf>,

        /// Bypass the response cache for this call and refresh the entry
        #[arg(long)]
        no_cache: bool,
    },

    /// Show or edit configuration
    Config {
        /// Set the upstream registry base URL
        #[arg(long)]
        set_base_url: Option<String>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },

    /// Response cache management
    Cache {
        /// Delete the cache file
        #[arg(long)]
        clear: bool,

        /// Show cache information
        #[arg(long)]
        info: bool,
    },
}
