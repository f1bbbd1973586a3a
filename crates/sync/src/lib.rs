//! Reconciliation and the site service facade.
//!
//! Ties the other crates together:
//!
//! - [`SyncFlow`] — the startup reconciliation state machine between the
//!   local document and the remote mirror (remote-preferred, whole
//!   snapshots only).
//! - [`SiteService`] — the one handle application surfaces talk to:
//!   configuration load/save with deferred remote push, casting and
//!   sponsor submission intake, statistics, and generated copy.
//! - [`notify`] — best-effort confirmation email over SMTP, log-only
//!   when no SMTP host is configured.
//!
//! The `impact-syncd` binary entrypoint lives in `main.rs`.

pub mod flow;
pub mod notify;
pub mod service;

pub use flow::{ConfigSource, SyncFlow, SyncPhase, SyncReport};
pub use notify::{ConfirmationKind, Mailer, MailerConfig};
pub use service::{SiteService, SubmissionReceipt};
