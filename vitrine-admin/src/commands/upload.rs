//! `upload` — push media files to the host, one at a time.

use std::path::{Path, PathBuf};

use vitrine_sdk::client::{MediaFile, MediaUploader};

use crate::config::LoadedConfig;

/// Upload the files strictly in the order given and print one reference
/// JSON object per success.
///
/// The batch stops at the first failure; references uploaded before it
/// are durable on the host, so they are still printed before the error is
/// reported.
pub async fn run(config: &LoadedConfig, paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(read_media_file(path)?);
    }

    let uploader = MediaUploader::new(config.media_host.clone());
    match uploader.upload_batch(&files).await {
        Ok(references) => {
            for reference in &references {
                println!("{}", serde_json::to_string(reference)?);
            }
            tracing::info!(count = references.len(), "batch uploaded");
            Ok(())
        }
        Err(batch_err) => {
            for reference in &batch_err.uploaded {
                println!("{}", serde_json::to_string(reference)?);
            }
            tracing::error!(
                file = %paths[batch_err.failed_index].display(),
                kept = batch_err.uploaded.len(),
                "upload failed; references above were already stored"
            );
            Err(batch_err.into())
        }
    }
}

fn read_media_file(path: &Path) -> anyhow::Result<MediaFile> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.bin".to_string());
    let content_type = content_type_for(path);
    Ok(MediaFile::new(file_name, content_type, bytes))
}

/// Declared content type by extension. The CLI stands in for the browser
/// here: the media kind is derived from this declaration, never from the
/// bytes.
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_sdk::objects::MediaKind;

    #[test]
    fn test_content_type_table() {
        assert_eq!(content_type_for(Path::new("a/ring.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("loop.gif")), "image/gif");
        assert_eq!(
            content_type_for(Path::new("mystery")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_declared_types_map_to_expected_kinds() {
        let kind = |p: &str| MediaKind::from_content_type(content_type_for(Path::new(p)));
        assert_eq!(kind("clip.mov"), MediaKind::Video);
        assert_eq!(kind("loop.gif"), MediaKind::Gif);
        assert_eq!(kind("ring.jpeg"), MediaKind::Image);
        assert_eq!(kind("mystery"), MediaKind::Image);
    }
}
