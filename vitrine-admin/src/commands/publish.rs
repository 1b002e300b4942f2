//! `publish` — upload a local document file as a new durable object.

use std::path::Path;

use vitrine_sdk::client::Publisher;
use vitrine_sdk::objects::SiteDocument;

use crate::config::LoadedConfig;

/// Parse the local document (validating the full shape) and publish it.
///
/// Prints the new public address. The fetch address is *not* updated:
/// repoint it to the printed URL out-of-band, or the storefront keeps
/// serving the previous version.
pub async fn run(config: &LoadedConfig, file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let document: SiteDocument = serde_json::from_str(&raw)?;

    let publisher = Publisher::new(config.media_host.clone());
    let address = publisher.publish(&document).await?;

    tracing::info!(products = document.products.len(), "document published");
    println!("{address}");
    println!("note: the load address is unchanged; repoint it to the URL above");
    Ok(())
}
