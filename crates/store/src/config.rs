//! The owned, process-wide site configuration cache.

use std::sync::Arc;

use impact_core::defaults::default_site_config;
use impact_core::site::SiteConfig;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::local::{LocalStore, SITE_CONFIG_DOC};

/// Cached site configuration over the `site_config` document.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Owns the single in-process cache so no
/// global state is needed; its lifecycle is the application's lifecycle.
pub struct ConfigStore {
    local: Arc<LocalStore>,
    cached: RwLock<Option<SiteConfig>>,
}

impl ConfigStore {
    /// Create a store over the given document layer with an empty cache.
    pub fn new(local: Arc<LocalStore>) -> Self {
        Self {
            local,
            cached: RwLock::new(None),
        }
    }

    /// Current configuration.
    ///
    /// Resolution order: the in-process cache, then the local document,
    /// then the built-in defaults. The result is cached, but seeding from
    /// defaults never writes to disk; only [`ConfigStore::save`] persists.
    pub async fn load(&self) -> SiteConfig {
        if let Some(config) = self.cached.read().await.as_ref() {
            return config.clone();
        }

        let config = match self.local.read::<SiteConfig>(SITE_CONFIG_DOC).await {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::info!("No stored site configuration, using built-in defaults");
                default_site_config()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Stored site configuration unreadable, using built-in defaults"
                );
                default_site_config()
            }
        };

        *self.cached.write().await = Some(config.clone());
        config
    }

    /// Replace the cache and persist the full snapshot.
    ///
    /// The local write is awaited; pushing to any remote mirror is the
    /// caller's concern.
    pub async fn save(&self, config: SiteConfig) -> Result<(), StoreError> {
        *self.cached.write().await = Some(config.clone());
        self.local.write(SITE_CONFIG_DOC, &config).await
    }

    /// Whether a configuration document exists on disk.
    pub async fn has_local_document(&self) -> bool {
        tokio::fs::try_exists(self.local.document_path(SITE_CONFIG_DOC))
            .await
            .unwrap_or(false)
    }
}
