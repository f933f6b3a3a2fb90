//! Image Attachments
//!
//! Moment images travel as self-describing data URIs
//! (`data:<mime>;base64,<payload>`). Nothing here checks size or type.

use base64::Engine;

/// MIME type used when the file extension says nothing
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode raw bytes as a data URI
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

/// MIME type declared by a data URI, if it is one
pub fn data_uri_mime(uri: &str) -> Option<&str> {
    let rest = uri.strip_prefix("data:")?;
    let header = rest.split_once(',').map(|(header, _)| header)?;
    let mime = header.split(';').next().unwrap_or_default();
    if mime.is_empty() {
        None
    } else {
        Some(mime)
    }
}

/// Errors reading an image from disk
#[cfg(feature = "native")]
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read image {path:?}: {error}")]
    Io {
        path: std::path::PathBuf,
        error: std::io::Error,
    },
}

/// Read a file and encode it as a data URI, guessing the MIME type from
/// the extension
#[cfg(feature = "native")]
pub async fn load_image(path: &std::path::Path) -> Result<String, ImageError> {
    let bytes = tokio::fs::read(path).await.map_err(|error| ImageError::Io {
        path: path.to_path_buf(),
        error,
    })?;

    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME);

    tracing::debug!(path = ?path, mime, bytes = bytes.len(), "Encoded image attachment");

    Ok(encode_data_uri(mime, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(encode_data_uri("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(encode_data_uri("image/gif", b"ab"), "data:image/gif;base64,YWI=");
    }

    #[test]
    fn test_data_uri_mime() {
        assert_eq!(data_uri_mime("data:image/jpeg;base64,AAAA"), Some("image/jpeg"));
        assert_eq!(data_uri_mime("data:;base64,AAAA"), None);
        assert_eq!(data_uri_mime("https://example.com/a.png"), None);
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_load_image_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"abc").unwrap();

        let uri = load_image(&path).await.unwrap();
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_load_image_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.zzzunknown");
        std::fs::write(&path, b"ab").unwrap();

        let uri = load_image(&path).await.unwrap();
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_load_image_missing_file() {
        let err = load_image(std::path::Path::new("/nonexistent/moment.png"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("moment.png"));
    }
}
