//! Fetching the live site document.

use reqwest::Client;
use url::Url;

use super::FetchError;
use crate::objects::SiteDocument;

/// Typed HTTP client for the fixed document address.
///
/// The address is resolved once per deployment and never changes at
/// runtime; publishing produces a *new* address that this client does not
/// learn about.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    http: Client,
    document_url: Url,
}

impl DocumentClient {
    /// Create a new `DocumentClient` for the given fixed document address.
    pub fn new(document_url: Url) -> Self {
        Self {
            http: Client::new(),
            document_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// The address this client fetches from.
    pub fn document_url(&self) -> &Url {
        &self.document_url
    }

    /// `GET` the document and deserialize it.
    ///
    /// Non-2xx responses map to [`FetchError::Status`]; malformed bodies
    /// map to [`FetchError::Parse`].
    pub async fn fetch(&self) -> Result<SiteDocument, FetchError> {
        let resp = self.http.get(self.document_url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(FetchError::Parse)
    }
}
