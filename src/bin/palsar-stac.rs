//! Command-line utility for creating ALOS PALSAR STAC records
//!
//! Usage:
//!     palsar-stac create-collection MOS alos-palsar-mosaic.json
//!     palsar-stac create-item N00E072_21_F02DAR.xml N00E072_21_F02DAR.json

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use palsar_stac::core::{create_collection, create_item_from_href};
use palsar_stac::types::Product;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palsar-stac")]
#[command(about = "Create STAC metadata for ALOS PALSAR mosaic and FNF products")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a STAC Collection for a product family
    CreateCollection {
        /// Product selector, MOS or FNF
        product: Product,
        /// Destination path for the Collection JSON
        destination: PathBuf,
    },
    /// Create a STAC Item from one observation asset
    CreateItem {
        /// Href of the FNF raster or the mosaic XML metadata companion
        source: String,
        /// Destination path for the Item JSON
        destination: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::CreateCollection {
            product,
            destination,
        } => {
            let collection = create_collection(product);
            fs::write(&destination, serde_json::to_string_pretty(&collection)?)
                .with_context(|| format!("failed to write {}", destination.display()))?;
            println!("wrote collection {} to {}", collection.id, destination.display());
        }
        Commands::CreateItem {
            source,
            destination,
        } => {
            let item = create_item_from_href(&source, None)
                .with_context(|| format!("failed to derive item from {}", source))?;
            fs::write(&destination, serde_json::to_string_pretty(&item)?)
                .with_context(|| format!("failed to write {}", destination.display()))?;
            println!("wrote item {} to {}", item.id, destination.display());
        }
    }

    Ok(())
}
