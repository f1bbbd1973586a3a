//! High-level site operations.
//!
//! [`SiteService`] is the single entry point callers use. It loads and
//! saves the site configuration with a detached remote push, records
//! casting submissions, answers sponsor inquiries, and produces the admin
//! health report. Construct one per process and share it behind an `Arc`.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;

use impact_core::error::CoreError;
use impact_core::site::SiteConfig;
use impact_core::submission::{
    validate_new_submission, validate_sponsor_inquiry, NewSubmission, SponsorInquiry, Submission,
    SubmissionStats,
};
use impact_drive::ConfigRemote;
use impact_genai::CopyGenerator;
use impact_store::{ConfigStore, StoreError, SubmissionLog};

use crate::notify::{ConfirmationKind, Mailer};

// ---------------------------------------------------------------------------
// SubmissionReceipt
// ---------------------------------------------------------------------------

/// Everything produced by accepting a casting submission.
#[derive(Debug)]
pub struct SubmissionReceipt {
    /// The recorded submission, with its minted id and timestamp.
    pub submission: Submission,
    /// Generated casting feedback for the applicant. Always non-empty.
    pub feedback: String,
    /// Handle for the detached log write. Callers that need the write to
    /// be durable before responding can await it; most drop it.
    pub recorded: JoinHandle<()>,
}

// ---------------------------------------------------------------------------
// SiteService
// ---------------------------------------------------------------------------

/// Site operations over the local store, the remote document, generated
/// copy, and confirmation mail.
pub struct SiteService {
    config_store: Arc<ConfigStore>,
    submissions: Arc<SubmissionLog>,
    remote: Arc<dyn ConfigRemote>,
    copy: CopyGenerator,
    mailer: Arc<Mailer>,
}

impl SiteService {
    pub fn new(
        config_store: Arc<ConfigStore>,
        submissions: Arc<SubmissionLog>,
        remote: Arc<dyn ConfigRemote>,
        copy: CopyGenerator,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            config_store,
            submissions,
            remote,
            copy,
            mailer,
        }
    }

    /// Current site configuration (cached, stored, or built-in seed).
    pub async fn load(&self) -> SiteConfig {
        self.config_store.load().await
    }

    /// Persist `config` locally, then push it to the remote document in a
    /// detached task.
    ///
    /// The local write is awaited and its failure is the only failure this
    /// returns. The push task authenticates first and skips quietly when no
    /// credential resolves; push errors are logged, never surfaced. The
    /// returned handle completes when the push attempt has finished.
    pub async fn save(&self, config: SiteConfig) -> Result<JoinHandle<()>, StoreError> {
        let pushed = config.clone();
        self.config_store.save(config).await?;

        let remote = Arc::clone(&self.remote);
        Ok(tokio::spawn(async move {
            if !remote.authenticate().await {
                tracing::debug!("No remote credential, skipping configuration push");
                return;
            }
            match remote.write_config(&pushed).await {
                Ok(outcome) => {
                    tracing::info!(?outcome, "Pushed site configuration to remote");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to push site configuration to remote");
                }
            }
        }))
    }

    /// Accept a casting submission.
    ///
    /// Validates the input, mints the submission, starts the detached log
    /// write, sends the confirmation email best-effort, and generates the
    /// applicant feedback. Only validation can fail.
    pub async fn submit_casting(
        &self,
        input: NewSubmission,
    ) -> Result<SubmissionReceipt, CoreError> {
        validate_new_submission(&input)?;
        let submission = input.into_submission(Utc::now());

        let recorded = self.submissions.record_detached(submission.clone());

        if let Err(e) = self
            .mailer
            .send_confirmation(&submission.email, &submission.name, ConfirmationKind::Casting)
            .await
        {
            tracing::warn!(error = %e, submission_id = %submission.id, "Failed to send casting confirmation");
        }

        let feedback = self
            .copy
            .casting_feedback(&submission.name, &submission.bio)
            .await;

        Ok(SubmissionReceipt {
            submission,
            feedback,
            recorded,
        })
    }

    /// Accept a sponsor inquiry and return the generated acknowledgement.
    ///
    /// Inquiries are not persisted. The confirmation email is best-effort;
    /// only validation can fail.
    pub async fn submit_sponsor(&self, inquiry: SponsorInquiry) -> Result<String, CoreError> {
        validate_sponsor_inquiry(&inquiry)?;

        if let Err(e) = self
            .mailer
            .send_confirmation(&inquiry.email, &inquiry.name, ConfirmationKind::Sponsor)
            .await
        {
            tracing::warn!(error = %e, company = %inquiry.company, "Failed to send sponsor confirmation");
        }

        Ok(self
            .copy
            .sponsor_reply(&inquiry.company, &inquiry.message)
            .await)
    }

    /// Per-platform counts over every recorded submission.
    pub async fn submission_stats(&self) -> Result<SubmissionStats, StoreError> {
        let submissions = self.submissions.list_all().await?;
        Ok(SubmissionStats::from_submissions(&submissions))
    }

    /// Generated system health report for the admin console. A failed log
    /// read degrades to zero counts rather than an error.
    pub async fn health_report(&self) -> String {
        let stats = match self.submissions.list_all().await {
            Ok(submissions) => SubmissionStats::from_submissions(&submissions),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read submission log for health report");
                SubmissionStats::from_submissions(&[])
            }
        };
        self.copy.system_health_report(&stats).await
    }
}
