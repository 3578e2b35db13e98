//! Gallery CLI - Drive the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the first page with the default selection
//! gallery browse
//!
//! # Food photos under $100, cheapest first, on a phone-sized viewport
//! gallery browse -c Food -p '$20 - $100' -s price-asc -w 375
//!
//! # Write the rendered page to a file
//! gallery render -o storefront.html --open-cart
//!
//! # Cart operations against the local store
//! gallery cart add 3
//! gallery cart remove 0
//! gallery cart show
//! ```
//!
//! # Commands
//!
//! - `browse` - Print the current gallery page
//! - `render` - Render the full page to HTML
//! - `cart` - Show or change the persisted cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use gallery_storefront::config::StorefrontConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::browse::BrowseArgs;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(author, version, about = "Gallery storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current gallery page
    Browse {
        #[command(flatten)]
        args: BrowseArgs,
    },
    /// Render the full page to HTML
    Render {
        #[command(flatten)]
        args: BrowseArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,

        /// Render with the cart drawer open
        #[arg(long)]
        open_cart: bool,

        /// Render with the filter sidebar open
        #[arg(long)]
        open_sidebar: bool,
    },
    /// Show or change the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List cart entries and the total
    Show,
    /// Add a catalog photo by ID
    Add {
        /// Photo ID
        id: gallery_core::PhotoId,
    },
    /// Add the photo of the day
    AddFeatured,
    /// Remove the entry at a position (0-based)
    Remove {
        /// Entry index
        index: usize,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gallery_storefront=info,gallery=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(storage = %config.storage_path.display(), "Configuration loaded");

    match cli.command {
        Commands::Browse { args } => commands::browse::browse(&config, &args)?,
        Commands::Render {
            args,
            output,
            open_cart,
            open_sidebar,
        } => {
            let panels = commands::browse::Panels {
                cart: open_cart,
                sidebar: open_sidebar,
            };
            commands::browse::render(&config, &args, panels, output.as_deref())?;
        }
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&config)?,
            CartAction::Add { id } => commands::cart::add(&config, id)?,
            CartAction::AddFeatured => commands::cart::add_featured(&config)?,
            CartAction::Remove { index } => commands::cart::remove(&config, index)?,
            CartAction::Clear => commands::cart::clear(&config)?,
        },
    }
    Ok(())
}
