//! market-finder - Fast GPU listing search and best-store recommendation CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use market_finder::catalog::Catalog;
use market_finder::commands::{BestCommand, SearchCommand};
use market_finder::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "market-finder",
    version,
    about = "Fast GPU listing search and best-store recommendation CLI",
    long_about = "Searches a scraped multi-store GPU catalog and recommends the store with the cheapest matching listing."
)]
struct Cli {
    /// Path to the catalog CSV
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search listings by title
    #[command(alias = "s")]
    Search {
        /// Search term (e.g. "RTX 4060")
        term: String,

        /// Also print the best-store recommendation for the matches
        #[arg(long)]
        best: bool,

        /// Minimum price filter
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price filter
        #[arg(long)]
        max_price: Option<f64>,

        /// Restrict to these stores (comma-separated)
        #[arg(long, value_delimiter = ',')]
        stores: Option<Vec<String>>,

        /// Maximum number of listings to display
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Recommend the cheapest listing for a search term
    #[command(alias = "b")]
    Best {
        /// Search term; omit to consider the whole catalog
        #[arg(default_value = "")]
        term: String,
    },

    /// Show the whole catalog
    #[command(alias = "l")]
    List,

    /// List stores present in the catalog
    Stores,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(catalog) = cli.catalog {
        config.catalog = catalog;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    // One catalog snapshot per invocation; every query recomputes from it.
    let catalog = Catalog::from_file(&config.catalog)?;

    match cli.command {
        Commands::Search { term, best, min_price, max_price, stores, max } => {
            if min_price.is_some() {
                config.min_price = min_price;
            }
            if max_price.is_some() {
                config.max_price = max_price;
            }
            if let Some(stores) = stores {
                config.stores = stores;
            }
            if max.is_some() {
                config.max_results = max;
            }

            let cmd = SearchCommand::new(config).with_best(best);
            let output = cmd.execute(&catalog, &term)?;
            println!("{}", output);
        }

        Commands::Best { term } => {
            let cmd = BestCommand::new(config);
            let output = cmd.execute(&catalog, &term)?;
            println!("{}", output);
        }

        Commands::List => {
            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&catalog, "")?;
            println!("{}", output);
        }

        Commands::Stores => {
            println!("Stores in catalog:\n");
            println!("{:<20} {:<10}", "Store", "Listings");
            println!("{:-<20} {:-<10}", "", "");

            for (store, count) in catalog.store_counts() {
                println!("{:<20} {:<10}", store, count);
            }
        }
    }

    Ok(())
}
