//! TOML file configuration structures.
//!
//! These structs directly map to the `vitrine.toml` file format.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub site: SiteSection,
    pub media_host: MediaHostSection,
}

/// Where the live document is fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    /// The fixed document address. Publishing never changes it; repoint
    /// it by hand after a publish.
    pub document_url: Url,
}

/// Media-host account and upload profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaHostSection {
    /// The media-host account (cloud) name.
    pub cloud_name: String,
    /// The unsigned upload preset used for both media and raw uploads.
    pub upload_preset: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let toml_str = r#"
[site]
document_url = "https://res.cloudinary.com/demo/raw/upload/v1/site-config.json"

[media_host]
cloud_name = "demo"
upload_preset = "storefront-unsigned"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.site.document_url.scheme(), "https");
        assert_eq!(config.media_host.cloud_name, "demo");
        assert_eq!(config.media_host.upload_preset, "storefront-unsigned");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let toml_str = r#"
[site]
document_url = "https://res.cloudinary.com/demo/raw/upload/v1/site-config.json"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
