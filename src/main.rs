mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        cli::Commands::List => commands::list_variants(),
        cli::Commands::Catalog { query, get, output } => {
            let patterns: Vec<&str> = query.iter().map(String::as_str).collect();
            commands::view_catalog(&patterns, get, output)
        }
    }
}
