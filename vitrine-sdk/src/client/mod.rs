//! HTTP clients for the media host.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the document types do not pull in `reqwest`.
//!
//! None of these operations support cancellation: once a fetch, upload or
//! publish future is first polled, the request runs to completion or error
//! and the caller gets no abort handle. A subsequent call starts a new,
//! independent request. No retries happen here either; every retry is
//! operator-initiated.

mod document;
mod media;
mod publish;

pub use document::DocumentClient;
pub use media::{MediaFile, MediaUploader};
pub use publish::Publisher;

use reqwest::StatusCode;
use reqwest::multipart::Form;
use url::Url;

use crate::objects::{MediaReference, UploadResponse};

/// Errors produced while fetching the site document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The host returned a non-2xx status code.
    #[error("document fetch failed: status {status}, body: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body was not a valid site document.
    #[error("json error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors produced while uploading media or publishing a document.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Transport-level failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The host rejected the upload with a non-2xx status code.
    #[error("upload rejected: status {status}, body: {body}")]
    Rejected { status: StatusCode, body: String },

    /// Upload response could not be deserialized, or the document could
    /// not be serialized for publishing.
    #[error("json error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The upload endpoint URL could not be built.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// A batch upload that stopped at its first failure.
///
/// Files before `failed_index` were uploaded successfully and their
/// references are durable on the host; they are handed back in `uploaded`
/// so the caller decides whether to keep them.
#[derive(Debug, thiserror::Error)]
#[error("batch upload failed at file {failed_index}: {source}")]
pub struct BatchUploadError {
    pub uploaded: Vec<MediaReference>,
    pub failed_index: usize,
    #[source]
    pub source: UploadError,
}

pub(crate) async fn post_multipart(
    http: &reqwest::Client,
    endpoint: Url,
    form: Form,
) -> Result<UploadResponse, UploadError> {
    let resp = http.post(endpoint).multipart(form).send().await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(UploadError::Rejected { status, body });
    }

    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(UploadError::Parse)
}
