//! Inline data-URL encoding for uploaded media.
//!
//! Uploaded files and drawn signatures are stored inside the submission log
//! itself as `data:<mime>;base64,<payload>` strings, so a log entry is
//! self-contained and survives the original file disappearing. The flip
//! side is size: inline encoding is what makes the log eviction policy
//! necessary.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CoreError;
use crate::submission::MediaFile;

/// Scheme prefix of every inline data URL.
pub const DATA_URL_PREFIX: &str = "data:";

const BASE64_MARKER: &str = ";base64,";

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode raw bytes as a base64 data URL with the given MIME type.
pub fn encode_bytes(mime: &str, bytes: &[u8]) -> String {
    format!("{DATA_URL_PREFIX}{mime}{BASE64_MARKER}{}", STANDARD.encode(bytes))
}

/// Read a file and encode it as a data URL, guessing the MIME type from
/// the extension (octet-stream when unknown).
pub async fn encode_file(path: &Path) -> Result<String, CoreError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CoreError::MediaRead {
            path: path.to_path_buf(),
            source,
        })?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(encode_bytes(mime.essence_str(), &bytes))
}

/// Read a file into a [`MediaFile`] ready to attach to a submission.
///
/// The stored name is the file name component of the path.
pub async fn media_file_from_path(path: &Path) -> Result<MediaFile, CoreError> {
    let url = encode_file(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(MediaFile {
        name,
        url,
        kind: mime.essence_str().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Split a base64 data URL back into its MIME type and raw bytes.
pub fn decode(data_url: &str) -> Result<(String, Vec<u8>), CoreError> {
    let rest = data_url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| CoreError::MalformedDataUrl("missing data: prefix".to_string()))?;
    let (mime, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| CoreError::MalformedDataUrl("missing ;base64, marker".to_string()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| CoreError::MalformedDataUrl(format!("invalid base64 payload: {e}")))?;
    Ok((mime.to_string(), bytes))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_bytes_produces_expected_shape() {
        let url = encode_bytes("image/png", b"hi");
        assert_eq!(url, "data:image/png;base64,aGk=");
    }

    #[test]
    fn decode_round_trips() {
        let original = b"signature strokes".to_vec();
        let url = encode_bytes("image/png", &original);
        let (mime, bytes) = decode(&url).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, original);
    }

    #[test]
    fn decode_rejects_missing_prefix() {
        assert!(matches!(
            decode("image/png;base64,aGk="),
            Err(CoreError::MalformedDataUrl(_))
        ));
    }

    #[test]
    fn decode_rejects_missing_marker() {
        assert!(matches!(
            decode("data:image/png,plain"),
            Err(CoreError::MalformedDataUrl(_))
        ));
    }

    #[test]
    fn decode_rejects_bad_payload() {
        assert!(decode("data:image/png;base64,!!!").is_err());
    }

    #[tokio::test]
    async fn encode_file_guesses_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        tokio::fs::write(&path, b"not really video").await.unwrap();

        let url = encode_file(&path).await.unwrap();
        assert!(url.starts_with("data:video/mp4;base64,"));
    }

    #[tokio::test]
    async fn unknown_extension_falls_back_to_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.weird");
        tokio::fs::write(&path, b"bytes").await.unwrap();

        let file = media_file_from_path(&path).await.unwrap();
        assert_eq!(file.kind, "application/octet-stream");
        assert_eq!(file.name, "blob.weird");
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = encode_file(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        match err {
            CoreError::MediaRead { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here.png"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
