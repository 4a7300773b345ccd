//! Cafe Desk CLI - seed file and reporting tools.
//!
//! # Usage
//!
//! ```bash
//! # Check a seed file loads cleanly
//! cafe-cli seed validate seed/demo.yaml
//!
//! # Write the built-in seed to a file as a starting point
//! cafe-cli seed export --out seed/demo.yaml
//!
//! # List beverages matching "latte"
//! cafe-cli menu list --query latte --category beverages
//!
//! # Order counts for a seed file
//! cafe-cli orders stats --seed seed/demo.yaml
//! ```
//!
//! # Commands
//!
//! - `seed validate` - Load a seed file through the ledger and catalog
//! - `seed export` - Write the built-in seed as YAML
//! - `menu list` - Print menu items, optionally filtered
//! - `orders stats` - Print order counts and popular items

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cafe-cli")]
#[command(author, version, about = "Cafe Desk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with seed files
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
    /// Inspect the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Inspect orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Validate a YAML seed file
    Validate {
        /// Path to the seed file
        file: PathBuf,
    },
    /// Export the built-in seed as YAML
    Export {
        /// Output path
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// List menu items
    List {
        /// Seed file (defaults to the built-in seed)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Case-insensitive search over name and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category name, or `all`
        #[arg(short, long, default_value = "all")]
        category: String,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Show order counts per status
    Stats {
        /// Seed file (defaults to the built-in seed)
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { action } => match action {
            SeedAction::Validate { file } => commands::seed::validate(&file).await?,
            SeedAction::Export { out } => commands::seed::export(&out).await?,
        },
        Commands::Menu { action } => match action {
            MenuAction::List {
                seed,
                query,
                category,
            } => commands::menu::list(seed.as_deref(), &query, &category).await?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::Stats { seed } => commands::orders::stats(seed.as_deref()).await?,
        },
    }
    Ok(())
}
