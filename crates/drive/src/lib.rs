//! Remote mirror of the site configuration on a Drive-style file API.
//!
//! The remote side of sync is a single well-known JSON document in cloud
//! file storage. This crate provides:
//!
//! - [`DriveSession`] — explicit credential state
//!   (unresolved / granted / denied) resolved from headless sources.
//! - [`DriveClient`] — REST adapter restricted to the one document:
//!   lookup by name, content read, multipart create-or-update.
//! - [`ConfigRemote`] — the trait seam the reconciliation flow and the
//!   site service depend on, so both test against in-memory fakes.
//!
//! Remote absence is a normal state, not a fault: read paths degrade to
//! `None` with a log line, and only writes surface errors.

pub mod auth;
pub mod client;
pub mod error;
pub mod remote;

pub use auth::{AccessToken, CredentialState, DriveSession};
pub use client::{DriveClient, RemoteWrite, CONFIG_FILE_NAME};
pub use error::DriveError;
pub use remote::ConfigRemote;
