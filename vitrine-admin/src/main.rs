//! Vitrine Admin
//!
//! A headless admin editor for the storefront configuration document:
//! pull the live JSON, edit it field-by-field through typed paths, upload
//! media, and publish the result as a new durable object.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::ConfigLoader;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_core::edit::{DocumentField, ProductField};

/// Vitrine Admin - headless storefront configuration editor
#[derive(Parser, Debug)]
#[command(name = "vitrine-admin")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./vitrine.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the live document and print it (or write it to a file)
    Pull {
        /// Write the document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Upload media files sequentially; prints one reference per file
    Upload {
        /// Files to upload, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Publish a local document file and print its new public address
    Publish {
        /// The document file to publish
        file: PathBuf,
    },
    /// Set a scalar document field (e.g. `set hero.accent-title "Gold" -f site.json`)
    Set {
        /// Field path: brand-name, hero.*, about.*, contact.*
        path: DocumentField,
        value: String,
        /// Local document file to edit
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Product operations on a local document file
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ProductCommand {
    /// Append a new empty product; prints its generated id
    Add {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Remove a product by id
    Remove {
        id: String,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Set a scalar product field (name, price, description, category,
    /// order-button-name, order-url)
    Set {
        id: String,
        field: ProductField,
        value: String,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Append a detail tag
    DetailAdd {
        id: String,
        text: String,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Remove a detail by position
    DetailRemove {
        id: String,
        index: usize,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Remove a media item by position
    MediaRemove {
        id: String,
        index: usize,
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    match args.command {
        Command::Pull { out } => {
            let loaded = ConfigLoader::new(&args.config).load()?;
            commands::pull::run(&loaded, out).await
        }
        Command::Upload { files } => {
            let loaded = ConfigLoader::new(&args.config).load()?;
            commands::upload::run(&loaded, files).await
        }
        Command::Publish { file } => {
            let loaded = ConfigLoader::new(&args.config).load()?;
            commands::publish::run(&loaded, &file).await
        }
        Command::Set { path, value, file } => commands::edit::set(&file, path, &value),
        Command::Product { command } => match command {
            ProductCommand::Add { file } => commands::edit::product_add(&file),
            ProductCommand::Remove { id, file } => commands::edit::product_remove(&file, &id),
            ProductCommand::Set {
                id,
                field,
                value,
                file,
            } => commands::edit::product_set(&file, &id, field, &value),
            ProductCommand::DetailAdd { id, text, file } => {
                commands::edit::detail_add(&file, &id, &text)
            }
            ProductCommand::DetailRemove { id, index, file } => {
                commands::edit::detail_remove(&file, &id, index)
            }
            ProductCommand::MediaRemove { id, index, file } => {
                commands::edit::media_remove(&file, &id, index)
            }
        },
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
