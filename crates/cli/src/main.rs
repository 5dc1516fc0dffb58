//! Item Packer CLI

mod report;
mod settings;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use item_packer_core::{PackStore, StorageConfig};
use tracing_subscriber::{fmt, EnvFilter};

use crate::report::{render_calculation, render_packs};
use crate::settings::{save_config, CatalogArgs};

#[derive(Parser)]
#[command(name = "item-packer")]
#[command(about = "Calculate pack breakdowns for item orders")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate orders for one or more item counts
    Calculate {
        /// Requested item counts
        #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..))]
        items: Vec<u64>,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Print orders as JSON
        #[arg(long)]
        json: bool,

        /// Print the retained order history after calculating
        #[arg(long)]
        history: bool,
    },

    /// Show the configured pack catalog
    Packs {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Print packs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    InitConfig {
        /// Output path
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Calculate {
            items,
            catalog,
            json,
            history,
        } => {
            let store = PackStore::new(catalog.resolve()?).context("invalid pack catalog")?;

            let mut orders = Vec::with_capacity(items.len());
            for requested in items {
                let order = store
                    .calculate_order(requested)
                    .with_context(|| format!("failed to calculate order for {} items", requested))?;
                orders.push(order);
            }

            let retained = if history { Some(store.orders()?) } else { None };
            println!(
                "{}",
                render_calculation(&orders, retained.as_deref(), json)?
            );
        }

        Commands::Packs { catalog, json } => {
            let store = PackStore::new(catalog.resolve()?).context("invalid pack catalog")?;
            let packs = store.packs()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&packs)?);
            } else {
                println!("{}", render_packs(&packs));
            }
        }

        Commands::InitConfig { file, force } => {
            if file.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", file.display());
            }
            save_config(&file, &StorageConfig::new().with_standard_packs())?;
            println!("Config written to: {}", file.display());
        }
    }

    Ok(())
}
