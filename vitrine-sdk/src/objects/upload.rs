use serde::{Deserialize, Serialize};
use url::Url;

/// The slice of the media host's upload response that matters here.
///
/// The host returns a much larger JSON object; only the durable public
/// address is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub secure_url: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_host_response() {
        // Trimmed from a real Cloudinary response body.
        let raw = r#"{
            "asset_id": "b5e6d2b39ba3e0869d67141ba7dba6cf",
            "public_id": "eneivicys42bq5f2jpn2",
            "version": 1570979139,
            "resource_type": "image",
            "bytes": 120253,
            "url": "http://res.cloudinary.com/demo/image/upload/v1570979139/eneivicys42bq5f2jpn2.jpg",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1570979139/eneivicys42bq5f2jpn2.jpg"
        }"#;
        let resp: UploadResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.secure_url.scheme(), "https");
    }

    #[test]
    fn test_missing_secure_url_is_an_error() {
        let raw = r#"{"url": "http://res.cloudinary.com/demo/x.jpg"}"#;
        assert!(serde_json::from_str::<UploadResponse>(raw).is_err());
    }
}
