//! Trait seam between the sync machinery and the remote mirror.

use async_trait::async_trait;
use impact_core::site::SiteConfig;

use crate::client::{DriveClient, RemoteWrite};
use crate::error::DriveError;

/// The remote operations the reconciliation flow and site service need.
///
/// [`DriveClient`] is the production implementation; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait ConfigRemote: Send + Sync {
    /// Resolve or reuse an access credential. Returns whether a usable
    /// credential is granted.
    async fn authenticate(&self) -> bool;

    /// Fetch the remote document. `None` when absent or unreachable.
    async fn read_config(&self) -> Option<SiteConfig>;

    /// Create or update the remote document with a full snapshot.
    async fn write_config(&self, config: &SiteConfig) -> Result<RemoteWrite, DriveError>;
}

#[async_trait]
impl ConfigRemote for DriveClient {
    async fn authenticate(&self) -> bool {
        self.session().authenticate().await
    }

    async fn read_config(&self) -> Option<SiteConfig> {
        DriveClient::read_config(self).await
    }

    async fn write_config(&self, config: &SiteConfig) -> Result<RemoteWrite, DriveError> {
        DriveClient::write_config(self, config).await
    }
}
