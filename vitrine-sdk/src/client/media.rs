//! Media asset uploads.

use reqwest::Client;
use reqwest::multipart::{Form, Part};

use super::{BatchUploadError, UploadError, post_multipart};
use crate::config::MediaHost;
use crate::objects::{MediaKind, MediaReference};

/// A file queued for upload, with its declared content type.
///
/// The content type decides the resulting [`MediaKind`]; the bytes are
/// never sniffed.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// The [`MediaKind`] this file will be referenced as.
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_content_type(&self.content_type)
    }
}

/// Uploads binary assets to the media host's unsigned upload endpoint.
#[derive(Debug, Clone)]
pub struct MediaUploader {
    http: Client,
    host: MediaHost,
}

impl MediaUploader {
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

    /// Upload one file and return its typed reference.
    pub async fn upload(&self, file: &MediaFile) -> Result<MediaReference, UploadError> {
        let endpoint = self.host.media_upload_url()?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.host.upload_preset.clone());

        let resp = post_multipart(&self.http, endpoint, form).await?;

        Ok(MediaReference {
            url: resp.secure_url.into(),
            kind: file.kind(),
        })
    }

    /// Upload a batch strictly in order, one at a time.
    ///
    /// Stops at the first failure. References obtained before the failure
    /// are durable on the host and are returned inside the error; whether
    /// to keep them is the caller's call.
    pub async fn upload_batch(
        &self,
        files: &[MediaFile],
    ) -> Result<Vec<MediaReference>, BatchUploadError> {
        let mut uploaded = Vec::with_capacity(files.len());

        for (index, file) in files.iter().enumerate() {
            match self.upload(file).await {
                Ok(reference) => uploaded.push(reference),
                Err(source) => {
                    return Err(BatchUploadError {
                        uploaded,
                        failed_index: index,
                        source,
                    });
                }
            }
        }

        Ok(uploaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_follows_declared_content_type() {
        let video = MediaFile::new("clip.mp4", "video/mp4", vec![0u8; 4]);
        assert_eq!(video.kind(), MediaKind::Video);

        let gif = MediaFile::new("loop.gif", "image/gif", vec![0u8; 4]);
        assert_eq!(gif.kind(), MediaKind::Gif);

        let photo = MediaFile::new("ring.png", "image/png", vec![0u8; 4]);
        assert_eq!(photo.kind(), MediaKind::Image);
    }
}
