use serde::{Deserialize, Serialize};

/// A typed pointer to a hosted binary asset.
///
/// Renderers dispatch purely on [`kind`](MediaReference::kind); the URL is
/// never inspected. The wire key for the kind is `type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaReference {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// What a [`MediaReference`] points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
    Gif,
}

impl MediaKind {
    /// Derive the kind from a file's declared content type.
    ///
    /// Checked in order: anything containing `video` is a video, anything
    /// containing `gif` is a gif, everything else is an image.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.contains("video") {
            MediaKind::Video
        } else if content_type.contains("gif") {
            MediaKind::Gif
        } else {
            MediaKind::Image
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Gif => write!(f, "gif"),
        }
    }
}
