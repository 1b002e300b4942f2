//! Local document edits: typed field sets and product operations.
//!
//! These commands work on a pulled document file; nothing here talks to
//! the network. Writes are atomic (temp file + rename) so an interrupted
//! edit never truncates the document.

use std::path::Path;

use vitrine_core::edit;
use vitrine_core::edit::{DocumentField, ProductField};
use vitrine_sdk::objects::SiteDocument;

/// Replace one scalar field of the document.
pub fn set(file: &Path, field: DocumentField, value: &str) -> anyhow::Result<()> {
    let document = load_document(file)?;
    store_document(file, &edit::set_field(&document, field, value))
}

/// Append a new empty product and print its generated id.
pub fn product_add(file: &Path) -> anyhow::Result<()> {
    let document = load_document(file)?;
    let (next, id) = edit::add_product(&document);
    store_document(file, &next)?;
    println!("{id}");
    Ok(())
}

/// Remove a product by id.
pub fn product_remove(file: &Path, id: &str) -> anyhow::Result<()> {
    let document = load_document(file)?;
    store_document(file, &edit::remove_product(&document, id))
}

/// Replace one scalar field of a product.
pub fn product_set(file: &Path, id: &str, field: ProductField, value: &str) -> anyhow::Result<()> {
    let document = load_document(file)?;
    store_document(file, &edit::update_product(&document, id, field, value))
}

/// Append a detail tag to a product.
pub fn detail_add(file: &Path, id: &str, text: &str) -> anyhow::Result<()> {
    let document = load_document(file)?;
    store_document(file, &edit::add_detail(&document, id, text))
}

/// Remove a product detail by position.
pub fn detail_remove(file: &Path, id: &str, index: usize) -> anyhow::Result<()> {
    let document = load_document(file)?;
    store_document(file, &edit::remove_detail(&document, id, index))
}

/// Remove a product media item by position.
pub fn media_remove(file: &Path, id: &str, index: usize) -> anyhow::Result<()> {
    let document = load_document(file)?;
    store_document(file, &edit::remove_media(&document, id, index))
}

fn load_document(file: &Path) -> anyhow::Result<SiteDocument> {
    let raw = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&raw)?)
}

fn store_document(file: &Path, document: &SiteDocument) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(document)?;

    // Write atomically: write to temp file, then rename
    let temp_path = file.with_extension("json.tmp");
    std::fs::write(&temp_path, json)?;
    std::fs::rename(&temp_path, file)?;
    Ok(())
}
