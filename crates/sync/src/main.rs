//! `impact-syncd` -- configuration reconciliation daemon.
//!
//! Keeps the local site configuration and the remote Drive document in
//! agreement. On each cycle it re-resolves the Drive credential, prefers
//! the remote document when one exists, and pushes the local configuration
//! when the remote has none.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default  | Description                              |
//! |----------------------|----------|----------|------------------------------------------|
//! | `IMPACT_DATA_DIR`    | no       | `./data` | Directory for local JSON documents       |
//! | `DRIVE_ACCESS_TOKEN` | no       | --       | OAuth access token for the Drive API     |
//! | `DRIVE_TOKEN_FILE`   | no       | --       | File to read the access token from       |
//! | `DRIVE_API_BASE`     | no       | Drive v3 | Override for the Drive metadata endpoint |
//! | `DRIVE_UPLOAD_BASE`  | no       | Drive v3 | Override for the Drive upload endpoint   |
//! | `SYNC_INTERVAL_SECS` | no       | `300`    | Seconds between reconciliation cycles    |

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impact_drive::{ConfigRemote, DriveClient, DriveSession};
use impact_store::{ConfigStore, LocalStore};
use impact_sync::SyncFlow;

/// Default interval between reconciliation cycles.
const DEFAULT_INTERVAL_SECS: u64 = 300;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "impact_syncd=info,impact_sync=info,impact_store=info,impact_drive=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let interval_secs: u64 = std::env::var("SYNC_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let local = match LocalStore::from_env().await {
        Ok(local) => Arc::new(local),
        Err(e) => {
            tracing::error!(error = %e, "Failed to open local data directory");
            std::process::exit(1);
        }
    };

    let config_store = Arc::new(ConfigStore::new(local));
    let session = Arc::new(DriveSession::new());
    let remote: Arc<dyn ConfigRemote> = Arc::new(DriveClient::from_env(Arc::clone(&session)));
    let flow = SyncFlow::new(config_store, remote);

    tracing::info!(interval_secs, "Starting impact-syncd");

    let cancel = CancellationToken::new();
    let sync_task = tokio::spawn(run_sync_loop(
        flow,
        session,
        Duration::from_secs(interval_secs),
        cancel.clone(),
    ));

    shutdown_signal().await;
    cancel.cancel();
    // A cycle stuck on a hung remote call should not hold up shutdown.
    let _ = tokio::time::timeout(Duration::from_secs(5), sync_task).await;

    tracing::info!("impact-syncd stopped");
}

/// Run the reconciliation loop until `cancel` is triggered.
///
/// The first cycle runs immediately on startup. Before every later cycle
/// the credential session is reset so tokens rotated on disk or in the
/// environment are picked up without a restart.
async fn run_sync_loop(
    flow: SyncFlow,
    session: Arc<DriveSession>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    let mut first_run = true;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Sync loop stopping");
                break;
            }
            _ = interval.tick() => {
                if !first_run {
                    session.reset().await;
                }
                first_run = false;

                let report = flow.run().await;
                tracing::info!(
                    source = ?report.source,
                    movies = report.config.movies.len(),
                    "Reconciliation cycle complete"
                );
            }
        }
    }
}

/// Wait for a shutdown signal.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the daemon
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
