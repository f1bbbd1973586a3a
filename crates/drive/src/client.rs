//! REST adapter for the single well-known configuration document.
//!
//! Wraps a Drive-style file API: name lookup among non-trashed files,
//! `alt=media` content reads, and `multipart/related` create-or-update
//! writes. Only [`DriveClient::write_config`] surfaces errors; lookups and
//! reads degrade to `None` because a missing or unreachable remote is a
//! normal state for this system.

use std::sync::Arc;
use std::time::Duration;

use impact_core::site::SiteConfig;
use serde::Deserialize;

use crate::auth::DriveSession;
use crate::error::DriveError;

/// Well-known name of the remote configuration document.
pub const CONFIG_FILE_NAME: &str = "ai_impact_media_config.json";

/// Default API base for metadata and content reads.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Default upload base for document writes.
pub const DEFAULT_UPLOAD_BASE: &str = "https://www.googleapis.com/upload/drive/v3";

/// Environment variable overriding the API base.
pub const API_BASE_ENV: &str = "DRIVE_API_BASE";

/// Environment variable overriding the upload base.
pub const UPLOAD_BASE_ENV: &str = "DRIVE_UPLOAD_BASE";

/// HTTP request timeout for a single drive call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const MULTIPART_BOUNDARY: &str = "foo_bar_baz";
const MULTIPART_CONTENT_TYPE: &str = "multipart/related; boundary=foo_bar_baz";

/// Server-assigned identifier of a drive file.
pub type DocumentId = String;

/// Outcome of a remote write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteWrite {
    /// The existing document was updated in place.
    Updated,
    /// No document existed; one was created.
    Created,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<FileRef>,
}

#[derive(Debug, Deserialize)]
struct FileRef {
    id: DocumentId,
}

// ---------------------------------------------------------------------------
// DriveClient
// ---------------------------------------------------------------------------

/// HTTP client scoped to the one remote configuration document.
pub struct DriveClient {
    client: reqwest::Client,
    session: Arc<DriveSession>,
    api_base: String,
    upload_base: String,
}

impl DriveClient {
    /// Create a client with the default API bases.
    pub fn new(session: Arc<DriveSession>) -> Self {
        Self::with_bases(
            session,
            DEFAULT_API_BASE.to_string(),
            DEFAULT_UPLOAD_BASE.to_string(),
        )
    }

    /// Create a client honouring `DRIVE_API_BASE` / `DRIVE_UPLOAD_BASE`
    /// overrides.
    pub fn from_env(session: Arc<DriveSession>) -> Self {
        let api_base =
            std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let upload_base =
            std::env::var(UPLOAD_BASE_ENV).unwrap_or_else(|_| DEFAULT_UPLOAD_BASE.to_string());
        Self::with_bases(session, api_base, upload_base)
    }

    /// Create a client against explicit API bases.
    pub fn with_bases(session: Arc<DriveSession>, api_base: String, upload_base: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            session,
            api_base,
            upload_base,
        }
    }

    /// The credential session this client operates under.
    pub fn session(&self) -> &Arc<DriveSession> {
        &self.session
    }

    /// Look up the well-known document among non-trashed files.
    ///
    /// Returns the first match, or `None` for zero matches, a missing
    /// credential, or any lookup failure.
    pub async fn find_document(&self) -> Option<DocumentId> {
        let token = self.session.token().await?;
        let query = format!("name = '{CONFIG_FILE_NAME}' and trashed = false");

        let result = self
            .client
            .get(format!("{}/files", self.api_base))
            .bearer_auth(token.as_str())
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id, name)"),
                ("spaces", "drive"),
            ])
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<FileList>().await {
                    Ok(list) => list.files.into_iter().next().map(|f| f.id),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to parse drive file list");
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "Drive lookup rejected"
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Drive lookup failed");
                None
            }
        }
    }

    /// Fetch and deserialize the remote document body.
    ///
    /// `None` when the document is absent, the credential is missing, or
    /// any fetch or parse step fails.
    pub async fn read_config(&self) -> Option<SiteConfig> {
        let token = self.session.token().await?;
        let id = self.find_document().await?;

        let result = self
            .client
            .get(format!("{}/files/{}", self.api_base, id))
            .bearer_auth(token.as_str())
            .query(&[("alt", "media")])
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<SiteConfig>().await {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to parse remote configuration");
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "Remote configuration read rejected"
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Remote configuration read failed");
                None
            }
        }
    }

    /// Create or update the remote document with a full snapshot.
    ///
    /// Updates in place when [`DriveClient::find_document`] finds an id,
    /// otherwise creates a fresh document under the well-known name. No
    /// optimistic-concurrency check; the last writer wins.
    pub async fn write_config(&self, config: &SiteConfig) -> Result<RemoteWrite, DriveError> {
        let token = self
            .session
            .token()
            .await
            .ok_or(DriveError::NoCredential)?;
        let content = serde_json::to_string(config)?;
        let body = multipart_body(&content);

        let (response, outcome) = match self.find_document().await {
            Some(id) => {
                let response = self
                    .client
                    .patch(format!("{}/files/{}", self.upload_base, id))
                    .query(&[("uploadType", "multipart")])
                    .bearer_auth(token.as_str())
                    .header(reqwest::header::CONTENT_TYPE, MULTIPART_CONTENT_TYPE)
                    .body(body)
                    .send()
                    .await?;
                (response, RemoteWrite::Updated)
            }
            None => {
                let response = self
                    .client
                    .post(format!("{}/files", self.upload_base))
                    .query(&[("uploadType", "multipart")])
                    .bearer_auth(token.as_str())
                    .header(reqwest::header::CONTENT_TYPE, MULTIPART_CONTENT_TYPE)
                    .body(body)
                    .send()
                    .await?;
                (response, RemoteWrite::Created)
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DriveError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(outcome)
    }
}

/// Assemble the two-part `multipart/related` body: document metadata, then
/// the serialized configuration.
fn multipart_body(content: &str) -> String {
    let metadata = serde_json::json!({
        "name": CONFIG_FILE_NAME,
        "mimeType": "application/json",
    });
    format!(
        "\r\n--{MULTIPART_BOUNDARY}\r\n\
         Content-Type: application/json\r\n\r\n\
         {metadata}\r\n\
         --{MULTIPART_BOUNDARY}\r\n\
         Content-Type: application/json\r\n\r\n\
         {content}\r\n\
         --{MULTIPART_BOUNDARY}--"
    )
}
