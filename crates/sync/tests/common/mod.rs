//! Shared helpers for impact-sync integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Mutex;

use impact_core::site::SiteConfig;
use impact_drive::{ConfigRemote, DriveError, RemoteWrite};
use impact_store::LocalStore;

/// In-memory stand-in for the Drive-backed remote.
///
/// Holds at most one configuration document, like the real remote holds
/// at most one `ai_impact_media_config.json`.
pub struct InMemoryRemote {
    granted: bool,
    fail_writes: bool,
    document: Mutex<Option<SiteConfig>>,
}

impl InMemoryRemote {
    /// A remote whose credential either resolves (`granted`) or not,
    /// seeded with an optional existing document.
    pub fn new(granted: bool, initial: Option<SiteConfig>) -> Self {
        Self {
            granted,
            fail_writes: false,
            document: Mutex::new(initial),
        }
    }

    /// Make every write fail with an API error, as an unreachable or
    /// quota-limited remote would.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Snapshot of the stored document.
    pub async fn document(&self) -> Option<SiteConfig> {
        self.document.lock().await.clone()
    }
}

#[async_trait]
impl ConfigRemote for InMemoryRemote {
    async fn authenticate(&self) -> bool {
        self.granted
    }

    async fn read_config(&self) -> Option<SiteConfig> {
        self.document.lock().await.clone()
    }

    async fn write_config(&self, config: &SiteConfig) -> Result<RemoteWrite, DriveError> {
        if self.fail_writes {
            return Err(DriveError::Api {
                status: 500,
                body: "write disabled".to_string(),
            });
        }
        let mut document = self.document.lock().await;
        let outcome = if document.is_some() {
            RemoteWrite::Updated
        } else {
            RemoteWrite::Created
        };
        *document = Some(config.clone());
        Ok(outcome)
    }
}

/// Fresh local store in a temp directory. Keep the `TempDir` alive for
/// the duration of the test.
pub async fn temp_local() -> (Arc<LocalStore>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let local = LocalStore::new(dir.path().to_path_buf())
        .await
        .expect("Failed to create local store");
    (Arc::new(local), dir)
}
