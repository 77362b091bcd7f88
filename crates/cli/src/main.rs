//! `BrightCart` CLI - catalog browsing and order quotes.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! bc-cli catalog
//!
//! # List one category
//! bc-cli catalog --category audio
//!
//! # Show a product's detail view
//! bc-cli show 3
//!
//! # Quote an order: two backpacks and a speaker
//! bc-cli quote 1:2 6
//! ```
//!
//! # Commands
//!
//! - `catalog` - List products, optionally by category
//! - `show` - Show one product with its options
//! - `quote` - Price a set of products with shipping and tax

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use brightcart_core::ProductId;

mod commands;

use commands::quote::QuoteLine;

#[derive(Parser)]
#[command(name = "bc-cli")]
#[command(author, version, about = "BrightCart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Category to filter by (`all`, `audio`, `wearables`, ...)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Show a product with its color and size options
    Show {
        /// Product ID
        id: ProductId,
    },
    /// Price an order from `ID[:QTY]` lines
    Quote {
        /// Lines as `ID` or `ID:QTY`
        #[arg(required = true)]
        lines: Vec<QuoteLine>,
    },
}

fn main() {
    // Load .env for RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Catalog { category } => commands::catalog::list(&category)?,
        Commands::Show { id } => commands::catalog::show(id)?,
        Commands::Quote { lines } => commands::quote::quote(&lines)?,
    }
    Ok(())
}
