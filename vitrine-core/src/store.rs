//! Shared document state with change notification.
//!
//! `DocumentStore` owns the single in-memory copy of the site document and
//! is passed by reference to every consumer; there is no ambient/singleton
//! access. Consumers that need to react to edits subscribe for a
//! [`DocumentWatcher`] and `await` the next change instead of polling.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::{RwLock, RwLockReadGuard, watch};

use vitrine_sdk::client::{DocumentClient, FetchError};
use vitrine_sdk::objects::SiteDocument;

/// What consumers see: the document (if loaded), whether a load is in
/// flight, and the last load error for display.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    pub document: Option<SiteDocument>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// A shared, versioned store for the site document.
pub struct DocumentStore {
    inner: Arc<DocumentStoreInner>,
}

struct DocumentStoreInner {
    state: RwLock<DocumentState>,
    version: AtomicU64,
    version_tx: watch::Sender<u64>,
    load_started: AtomicBool,
}

/// Receives notifications when a [`DocumentStore`] is updated.
///
/// Call [`changed()`](DocumentWatcher::changed) to wait for the next
/// update.
pub struct DocumentWatcher {
    version_rx: watch::Receiver<u64>,
}

// -- DocumentStore ------------------------------------------------------

impl DocumentStore {
    /// Create an empty store: no document, not loading, no error.
    pub fn new() -> Self {
        let (version_tx, _) = watch::channel(0u64);
        Self {
            inner: Arc::new(DocumentStoreInner {
                state: RwLock::new(DocumentState::default()),
                version: AtomicU64::new(0),
                version_tx,
                load_started: AtomicBool::new(false),
            }),
        }
    }

    /// Fetch the document through `client` and store the outcome.
    ///
    /// Exactly one load happens per store lifetime: the first call wins
    /// and every later call returns `Ok(())` without touching the state.
    /// There is no retry and no polling; the address is fixed
    /// configuration, resolved once.
    pub async fn load(&self, client: &DocumentClient) -> Result<(), FetchError> {
        self.load_with(client.fetch()).await
    }

    /// Same contract as [`load`](DocumentStore::load) with an injected
    /// fetch future.
    pub async fn load_with<F>(&self, fetch: F) -> Result<(), FetchError>
    where
        F: Future<Output = Result<SiteDocument, FetchError>>,
    {
        if self.inner.load_started.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        {
            let mut state = self.inner.state.write().await;
            state.is_loading = true;
        }
        self.notify();

        let result = fetch.await;

        let mut state = self.inner.state.write().await;
        state.is_loading = false;
        match result {
            Ok(document) => {
                state.document = Some(document);
                state.error = None;
                drop(state);
                self.notify();
                Ok(())
            }
            Err(err) => {
                state.document = None;
                state.error = Some(err.to_string());
                drop(state);
                self.notify();
                Err(err)
            }
        }
    }

    /// Replace the document wholesale and notify all watchers.
    ///
    /// Every edit flows through here as a whole-value replacement, so no
    /// two edits can interleave partial writes to the same nested object.
    pub async fn update(&self, document: SiteDocument) {
        {
            let mut state = self.inner.state.write().await;
            state.document = Some(document);
        }
        self.notify();
    }

    /// Read the current state.
    pub async fn read(&self) -> RwLockReadGuard<'_, DocumentState> {
        self.inner.state.read().await
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> DocumentWatcher {
        DocumentWatcher {
            version_rx: self.inner.version_tx.subscribe(),
        }
    }

    fn notify(&self) {
        let new_version = self.inner.version.fetch_add(1, Ordering::Relaxed) + 1;
        let _ = self.inner.version_tx.send(new_version);
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DocumentStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// -- DocumentWatcher ----------------------------------------------------

impl DocumentWatcher {
    /// Wait until the store is updated.
    ///
    /// Returns `Ok(())` when a new version is available, or `Err` if the
    /// [`DocumentStore`] has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.version_rx.changed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_sdk::objects::SiteDocument;

    fn acme() -> SiteDocument {
        SiteDocument {
            brand_name: "Acme".to_string(),
            ..SiteDocument::default()
        }
    }

    #[tokio::test]
    async fn test_successful_load_exposes_document() {
        let store = DocumentStore::new();
        store.load_with(async { Ok(acme()) }).await.unwrap();

        let state = store.read().await;
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.document.as_ref().unwrap().brand_name, "Acme");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_document_empty_and_records_error() {
        let store = DocumentStore::new();
        let err = store
            .load_with(async {
                Err(FetchError::Parse(
                    serde_json::from_str::<SiteDocument>("not json").unwrap_err(),
                ))
            })
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
        let state = store.read().await;
        assert!(state.document.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn test_second_load_is_a_no_op() {
        let store = DocumentStore::new();
        store.load_with(async { Ok(acme()) }).await.unwrap();

        let mut other = acme();
        other.brand_name = "Other".to_string();
        store.load_with(async { Ok(other) }).await.unwrap();

        let state = store.read().await;
        assert_eq!(state.document.as_ref().unwrap().brand_name, "Acme");
    }

    #[tokio::test]
    async fn test_update_wakes_watchers() {
        let store = DocumentStore::new();
        let mut watcher = store.subscribe();

        store.update(acme()).await;
        watcher.changed().await.unwrap();

        let state = store.read().await;
        assert!(state.document.is_some());
    }
}
