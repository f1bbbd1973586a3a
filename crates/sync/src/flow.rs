//! Startup reconciliation between local storage and the remote mirror.
//!
//! One run walks `Uninitialized -> LocalLoaded -> (RemoteChecked |
//! RemoteUnavailable) -> Ready`. When both sides hold a document the
//! remote one replaces the local one wholesale; there is no field merge
//! and no timestamp comparison. Runs are independent and idempotent
//! given stable remote state, so the daemon simply re-runs the flow on
//! an interval.

use std::sync::Arc;

use impact_core::site::SiteConfig;
use impact_drive::ConfigRemote;
use impact_store::ConfigStore;

/// Phase of a reconciliation run, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Uninitialized,
    LocalLoaded,
    RemoteChecked,
    RemoteUnavailable,
    Ready,
}

/// Where the configuration in effect after a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No usable remote; the local (or default) snapshot stands alone.
    LocalOnly,
    /// The remote document replaced the local snapshot.
    Remote,
    /// No remote document existed; the local snapshot was pushed up.
    PushedLocal,
}

/// Outcome of one reconciliation run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub source: ConfigSource,
    /// The configuration in effect once the flow reached `Ready`.
    pub config: SiteConfig,
}

/// The reconciliation state machine.
pub struct SyncFlow {
    config_store: Arc<ConfigStore>,
    remote: Arc<dyn ConfigRemote>,
}

impl SyncFlow {
    pub fn new(config_store: Arc<ConfigStore>, remote: Arc<dyn ConfigRemote>) -> Self {
        Self {
            config_store,
            remote,
        }
    }

    /// Run the flow once through to `Ready`.
    ///
    /// Never fails: every remote problem degrades to a local-only
    /// outcome, and a failed local write-back after a remote pull is
    /// logged but still yields the remote snapshot.
    pub async fn run(&self) -> SyncReport {
        self.enter(SyncPhase::Uninitialized);

        let local = self.config_store.load().await;
        self.enter(SyncPhase::LocalLoaded);

        if !self.remote.authenticate().await {
            tracing::info!("No remote credential, reconciliation stays local");
            self.enter(SyncPhase::RemoteUnavailable);
            return self.finish(ConfigSource::LocalOnly, local);
        }

        match self.remote.read_config().await {
            Some(remote_config) => {
                self.enter(SyncPhase::RemoteChecked);
                // Remote wins over local; persist the pulled snapshot so
                // the next local-only start sees it.
                if let Err(e) = self.config_store.save(remote_config.clone()).await {
                    tracing::error!(
                        error = %e,
                        "Failed to persist pulled remote configuration locally"
                    );
                }
                self.finish(ConfigSource::Remote, remote_config)
            }
            None => match self.remote.write_config(&local).await {
                Ok(outcome) => {
                    self.enter(SyncPhase::RemoteChecked);
                    tracing::info!(
                        outcome = ?outcome,
                        "No remote document, established it from the local snapshot"
                    );
                    self.finish(ConfigSource::PushedLocal, local)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Remote unreachable, reconciliation stays local");
                    self.enter(SyncPhase::RemoteUnavailable);
                    self.finish(ConfigSource::LocalOnly, local)
                }
            },
        }
    }

    fn enter(&self, phase: SyncPhase) {
        tracing::debug!(phase = ?phase, "Reconciliation phase");
    }

    fn finish(&self, source: ConfigSource, config: SiteConfig) -> SyncReport {
        self.enter(SyncPhase::Ready);
        tracing::info!(source = ?source, "Reconciliation complete");
        SyncReport { source, config }
    }
}
