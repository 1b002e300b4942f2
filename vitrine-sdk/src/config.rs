//! Deployment-time constants for talking to the media host.
//!
//! The load address, the account (cloud) name and the upload preset are
//! fixed configuration, not user input. The fetch URL and the publish URL
//! are independent: publishing creates a new object and never repoints the
//! load address.

use url::Url;

/// Media-host account identity plus the unsigned upload profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHost {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl MediaHost {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
        }
    }

    /// `POST` target for binary media uploads.
    pub fn media_upload_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "https://api.cloudinary.com/v1_1/{}/upload",
            self.cloud_name
        ))
    }

    /// `POST` target for raw (non-media) uploads, used to publish the
    /// serialized document.
    pub fn raw_upload_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "https://api.cloudinary.com/v1_1/{}/raw/upload",
            self.cloud_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_shapes() {
        let host = MediaHost::new("demo", "unsigned-products");
        assert_eq!(
            host.media_upload_url().unwrap().as_str(),
            "https://api.cloudinary.com/v1_1/demo/upload"
        );
        assert_eq!(
            host.raw_upload_url().unwrap().as_str(),
            "https://api.cloudinary.com/v1_1/demo/raw/upload"
        );
    }
}
