use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for bstv
#[derive(Parser, Debug)]
#[command(name = "bstv")]
#[command(about = "View the Shields tooltip catalog from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tooltip variants with their ids
    List,

    /// View the tooltip catalog
    Catalog {
        /// Glob patterns to filter by variant name or resource key (OR logic)
        #[arg(short, long = "query")]
        query: Vec<String>,

        /// Print a single entry, looked up by name or decimal id
        #[arg(long, conflicts_with = "query")]
        get: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json-object")]
        output: OutputType,
    },
}

/// Output format for catalog entries
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputType {
    /// JSON object keyed by variant name
    JsonObject,
    /// JSON array of entries, descriptions included
    JsonArray,
}
