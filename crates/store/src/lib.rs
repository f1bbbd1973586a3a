//! Local durable storage for site content and submissions.
//!
//! Persistence is two whole-document JSON files in a data directory:
//!
//! - [`LocalStore`] — the document layer: atomic whole-file reads and
//!   writes of named JSON documents.
//! - [`ConfigStore`] — the owned, process-wide configuration cache over
//!   the `site_config` document.
//! - [`SubmissionLog`] — the append-at-front casting submission log over
//!   the `submissions` document, with size-bounded eviction.
//!
//! Snapshots are always read and written whole; there are no field-level
//! updates and no transactions.

pub mod config;
pub mod error;
pub mod local;
pub mod submissions;

pub use config::ConfigStore;
pub use error::StoreError;
pub use local::LocalStore;
pub use submissions::{SubmissionLog, MAX_LOG_BYTES, TARGET_LOG_BYTES};
