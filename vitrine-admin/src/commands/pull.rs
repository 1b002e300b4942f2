//! `pull` — fetch the live document.

use std::path::PathBuf;

use vitrine_sdk::client::DocumentClient;

use crate::config::LoadedConfig;

/// Fetch the live document and pretty-print it, or write it to `out` for
/// local editing.
pub async fn run(config: &LoadedConfig, out: Option<PathBuf>) -> anyhow::Result<()> {
    let client = DocumentClient::new(config.document_url.clone());

    tracing::info!(url = %client.document_url(), "fetching document");
    let document = client.fetch().await?;

    let json = serde_json::to_string_pretty(&document)?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            tracing::info!(path = %path.display(), "document written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
