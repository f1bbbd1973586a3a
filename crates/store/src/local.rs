//! Filesystem document layer: named whole-snapshot JSON files.

use std::path::PathBuf;

use impact_core::types::new_entity_id;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use crate::error::StoreError;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "IMPACT_DATA_DIR";

/// Data directory used when `IMPACT_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Document name of the site configuration snapshot.
pub const SITE_CONFIG_DOC: &str = "site_config";

/// Document name of the submission log.
pub const SUBMISSIONS_DOC: &str = "submissions";

/// Filesystem-backed store of named JSON documents.
///
/// A document named `site_config` lives at `{base}/site_config.json`.
/// Writes land in a `.tmp` sibling first and are renamed into place, so
/// a crash mid-write never leaves a torn document behind.
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `base_path`, creating the directory tree.
    pub async fn new(base_path: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_path)
            .await
            .map_err(|source| StoreError::Io {
                path: base_path.clone(),
                source,
            })?;
        let tmp = base_path.join(".tmp");
        fs::create_dir_all(&tmp)
            .await
            .map_err(|source| StoreError::Io { path: tmp, source })?;
        Ok(Self { base_path })
    }

    /// Create a store rooted at `IMPACT_DATA_DIR` (default `./data`).
    pub async fn from_env() -> Result<Self, StoreError> {
        let base =
            std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::new(PathBuf::from(base)).await
    }

    /// Filesystem path of a named document.
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{name}.json"))
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path.join(".tmp").join(new_entity_id())
    }

    /// Read a document. `Ok(None)` when no document with this name exists.
    pub async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        let path = self.document_path(name);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };
        let value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            name: name.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Write a document as a whole snapshot.
    pub async fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Serialize {
            name: name.to_string(),
            source,
        })?;
        self.write_bytes(name, &bytes).await
    }

    /// Write already-serialized document bytes.
    ///
    /// The submission log serializes once to measure its size and hands the
    /// same bytes here rather than serializing twice.
    pub async fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.document_path(name);
        let temp = self.temp_path();

        if let Err(e) = fs::write(&temp, bytes).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StoreError::Io {
                path: temp,
                source: e,
            });
        }
        if let Err(e) = fs::rename(&temp, &path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StoreError::Io { path, source: e });
        }
        Ok(())
    }
}
