//! Publishing the edited document as a new durable object.

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use url::Url;

use super::{UploadError, post_multipart};
use crate::config::MediaHost;
use crate::objects::SiteDocument;

/// File name the serialized document is uploaded under.
const DOCUMENT_FILE_NAME: &str = "site-config.json";

/// Serializes the current document and uploads it as a raw object.
///
/// The returned address is *not* written back anywhere: the fetch URL and
/// the publish URL are independent, and the operator repoints the fetch
/// address out-of-band.
#[derive(Debug, Clone)]
pub struct Publisher {
    http: Client,
    host: MediaHost,
}

impl Publisher {
    pub fn new(host: MediaHost) -> Self {
        Self {
            http: Client::new(),
            host,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Upload `document` as a new object and return its public address.
    ///
    /// The payload is pretty-printed JSON, matching what every editor
    /// version has published so far.
    pub async fn publish(&self, document: &SiteDocument) -> Result<Url, UploadError> {
        let endpoint = self.host.raw_upload_url()?;
        let payload = serde_json::to_vec_pretty(document)?;

        let part = Part::bytes(payload)
            .file_name(DOCUMENT_FILE_NAME)
            .mime_str("application/json")?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.host.upload_preset.clone());

        let resp = post_multipart(&self.http, endpoint, form).await?;
        Ok(resp.secure_url)
    }
}
