//! Locally persisted wishlist.
//!
//! A visitor's wishlist is a set of product ids, kept in insertion order
//! and persisted as a JSON string array in a single file after every
//! toggle. The in-memory list is authoritative for the session; storage
//! is best-effort and a missing or corrupt file simply means "no wishlist
//! yet".

use std::path::{Path, PathBuf};

/// File name of the durable wishlist key.
pub const STORAGE_FILE: &str = "wishlist.json";

/// A persisted set of product ids.
#[derive(Debug)]
pub struct WishlistStore {
    ids: Vec<String>,
    path: PathBuf,
}

impl WishlistStore {
    /// Open the wishlist at `path`.
    ///
    /// Never fails: an absent or malformed file yields an empty wishlist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { ids, path }
    }

    /// Open the wishlist in the platform data directory
    /// (`<data_dir>/vitrine/wishlist.json`).
    pub fn open_default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        Self::open(base.join("vitrine").join(STORAGE_FILE))
    }

    /// Flip membership for `id` and persist the whole set. Returns the
    /// new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id.to_string()),
        }
        self.persist();
        self.is_liked(id)
    }

    /// Whether `id` is currently wishlisted.
    pub fn is_liked(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// The wishlisted ids, oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Where this wishlist persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string(&self.ids) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), error = %err, "wishlist write failed");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "wishlist serialization failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = WishlistStore::open(dir.path().join(STORAGE_FILE));
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let store = WishlistStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WishlistStore::open(dir.path().join(STORAGE_FILE));

        let before = store.is_liked("prod_1");
        assert!(store.toggle("prod_1"));
        assert!(!store.toggle("prod_1"));
        assert_eq!(store.is_liked("prod_1"), before);
    }

    #[test]
    fn test_every_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);

        let mut store = WishlistStore::open(&path);
        store.toggle("prod_1");
        store.toggle("prod_2");

        let raw = std::fs::read_to_string(&path).unwrap();
        let on_disk: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, vec!["prod_1", "prod_2"]);

        store.toggle("prod_1");
        let raw = std::fs::read_to_string(&path).unwrap();
        let on_disk: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, vec!["prod_2"]);
    }

    #[test]
    fn test_reopen_reads_persisted_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);

        let mut store = WishlistStore::open(&path);
        store.toggle("prod_9");
        drop(store);

        let reopened = WishlistStore::open(&path);
        assert!(reopened.is_liked("prod_9"));
        assert_eq!(reopened.len(), 1);
    }
}
