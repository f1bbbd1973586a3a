//! Credential state for the drive session.
//!
//! The credential is an explicit three-state value rather than an ambient
//! token flag: a denied grant is remembered and stays denied until
//! [`DriveSession::reset`], so callers can distinguish "never asked" from
//! "asked and refused". Resolution is headless: a token is taken from the
//! environment or read from a token file, in that order.

use std::path::PathBuf;

use tokio::sync::RwLock;

/// Environment variable carrying a ready-to-use bearer token.
pub const ACCESS_TOKEN_ENV: &str = "DRIVE_ACCESS_TOKEN";

/// Environment variable naming a file whose contents are the bearer token.
pub const TOKEN_FILE_ENV: &str = "DRIVE_TOKEN_FILE";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A bearer token for the drive API. Redacted in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Where credential resolution currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialState {
    /// No resolution attempted yet.
    Unresolved,
    /// A usable token was obtained.
    Granted(AccessToken),
    /// Resolution was attempted and no token was available. Stays denied
    /// until [`DriveSession::reset`].
    Denied,
}

// ---------------------------------------------------------------------------
// DriveSession
// ---------------------------------------------------------------------------

/// Holds the credential state for one process.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared between the reconciliation flow and the site service.
pub struct DriveSession {
    state: RwLock<CredentialState>,
}

impl DriveSession {
    /// A session with no resolution attempted yet.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CredentialState::Unresolved),
        }
    }

    /// A session pre-granted with a known token.
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            state: RwLock::new(CredentialState::Granted(token)),
        }
    }

    /// Resolve the credential if not yet resolved; idempotent.
    ///
    /// Returns whether a usable token is granted afterwards. A previously
    /// granted token is reused; a previous denial is final until
    /// [`DriveSession::reset`].
    pub async fn authenticate(&self) -> bool {
        let mut state = self.state.write().await;
        match &*state {
            CredentialState::Granted(_) => true,
            CredentialState::Denied => false,
            CredentialState::Unresolved => {
                let resolved = resolve_credential(
                    std::env::var(ACCESS_TOKEN_ENV).ok(),
                    std::env::var(TOKEN_FILE_ENV).ok().map(PathBuf::from),
                )
                .await;
                let granted = matches!(resolved, CredentialState::Granted(_));
                *state = resolved;
                granted
            }
        }
    }

    /// Current state, cloned.
    pub async fn state(&self) -> CredentialState {
        self.state.read().await.clone()
    }

    /// The granted token, if any.
    pub async fn token(&self) -> Option<AccessToken> {
        match &*self.state.read().await {
            CredentialState::Granted(token) => Some(token.clone()),
            _ => None,
        }
    }

    /// Forget the current resolution so the next
    /// [`DriveSession::authenticate`] starts over.
    pub async fn reset(&self) {
        *self.state.write().await = CredentialState::Unresolved;
    }
}

impl Default for DriveSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Try each credential source in order.
async fn resolve_credential(
    env_token: Option<String>,
    token_file: Option<PathBuf>,
) -> CredentialState {
    if let Some(token) = env_token {
        let token = token.trim();
        if !token.is_empty() {
            tracing::info!("Drive access granted from environment token");
            return CredentialState::Granted(AccessToken::new(token));
        }
    }

    if let Some(path) = token_file {
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) if !contents.trim().is_empty() => {
                tracing::info!(path = %path.display(), "Drive access granted from token file");
                return CredentialState::Granted(AccessToken::new(contents.trim()));
            }
            Ok(_) => {
                tracing::warn!(path = %path.display(), "Drive token file is empty");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read drive token file");
            }
        }
    }

    tracing::info!("No drive credential available, staying local-only");
    CredentialState::Denied
}
