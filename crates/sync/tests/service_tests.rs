//! Integration tests for the site service.
//!
//! Exercise the full composition: real stores over a temp directory, the
//! in-memory remote, a fake text generator, and a log-only mailer.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use common::{temp_local, InMemoryRemote};

use impact_core::defaults::default_site_config;
use impact_core::error::CoreError;
use impact_core::site::SiteConfig;
use impact_core::submission::{MediaFile, NewSubmission, Platform, SubmissionStatus};
use impact_drive::ConfigRemote;
use impact_genai::{CopyGenerator, GenAiError, TextGenerator};
use impact_store::{ConfigStore, LocalStore, SubmissionLog};
use impact_sync::{Mailer, SiteService};

// ---------------------------------------------------------------------------
// Fakes and builders
// ---------------------------------------------------------------------------

struct StaticGenerator(&'static str);

#[async_trait]
impl TextGenerator for StaticGenerator {
    async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, GenAiError> {
        Ok(self.0.to_string())
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, GenAiError> {
        Err(GenAiError::NoApiKey)
    }
}

fn build_service(
    local: Arc<LocalStore>,
    remote: Arc<dyn ConfigRemote>,
    generator: Arc<dyn TextGenerator>,
) -> SiteService {
    SiteService::new(
        Arc::new(ConfigStore::new(Arc::clone(&local))),
        Arc::new(SubmissionLog::new(local)),
        remote,
        CopyGenerator::new(generator),
        Arc::new(Mailer::new(None)),
    )
}

fn casting_input(name: &str) -> NewSubmission {
    NewSubmission {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        social_handle: format!("@{}", name.to_lowercase()),
        platform: Platform::Instagram,
        bio: "Stunt performer and underwater welder.".to_string(),
        files: vec![MediaFile {
            name: "reel.mp4".to_string(),
            url: "data:video/mp4;base64,AAAA".to_string(),
            kind: "video/mp4".to_string(),
        }],
        signature: "data:image/png;base64,iVBO".to_string(),
    }
}

fn custom_config() -> SiteConfig {
    let mut config = default_site_config();
    config.movies.truncate(2);
    config
}

// ---------------------------------------------------------------------------
// Test: save persists locally and pushes to a granted remote
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_persists_locally_and_pushes_to_remote() {
    let (local, _dir) = temp_local().await;
    let remote = Arc::new(InMemoryRemote::new(true, None));
    let service = build_service(
        Arc::clone(&local),
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        Arc::new(StaticGenerator("ok")),
    );

    let push = service
        .save(custom_config())
        .await
        .expect("Failed to save config");
    push.await.expect("Push task panicked");

    assert_eq!(service.load().await, custom_config());
    assert_eq!(remote.document().await, Some(custom_config()));
}

// ---------------------------------------------------------------------------
// Test: save without a credential keeps the remote untouched
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_without_credential_skips_remote_push() {
    let (local, _dir) = temp_local().await;
    let remote = Arc::new(InMemoryRemote::new(false, None));
    let service = build_service(
        Arc::clone(&local),
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        Arc::new(StaticGenerator("ok")),
    );

    let push = service
        .save(custom_config())
        .await
        .expect("Failed to save config");
    push.await.expect("Push task panicked");

    // Local edits survive even when the push never happens.
    assert_eq!(service.load().await, custom_config());
    assert_eq!(remote.document().await, None);
}

// ---------------------------------------------------------------------------
// Test: a failed remote push never surfaces from save
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_remote_push_is_swallowed() {
    let (local, _dir) = temp_local().await;
    let remote = Arc::new(InMemoryRemote::new(true, None).with_failing_writes());
    let service = build_service(
        Arc::clone(&local),
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        Arc::new(StaticGenerator("ok")),
    );

    let push = service
        .save(custom_config())
        .await
        .expect("Failed to save config");
    push.await.expect("Push task panicked");

    assert_eq!(service.load().await, custom_config());
    assert_eq!(remote.document().await, None);
}

// ---------------------------------------------------------------------------
// Test: casting submission mints a record and returns generated feedback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_casting_records_and_returns_feedback() {
    let (local, _dir) = temp_local().await;
    let log = Arc::new(SubmissionLog::new(Arc::clone(&local)));
    let remote = Arc::new(InMemoryRemote::new(false, None));
    let service = SiteService::new(
        Arc::new(ConfigStore::new(Arc::clone(&local))),
        Arc::clone(&log),
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        CopyGenerator::new(Arc::new(StaticGenerator("Impressive reel, Ada."))),
        Arc::new(Mailer::new(None)),
    );

    let receipt = service
        .submit_casting(casting_input("Ada"))
        .await
        .expect("Submission rejected");

    assert_eq!(receipt.feedback, "Impressive reel, Ada.");
    assert!(!receipt.submission.id.is_empty());
    assert_eq!(receipt.submission.status, SubmissionStatus::Pending);

    receipt.recorded.await.expect("Record task panicked");
    let entries = log.list_all().await.expect("Failed to read log");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Ada");
    assert_eq!(entries[0].files.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: newest submission sits at the front of the log
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submissions_are_logged_newest_first() {
    let (local, _dir) = temp_local().await;
    let log = Arc::new(SubmissionLog::new(Arc::clone(&local)));
    let remote = Arc::new(InMemoryRemote::new(false, None));
    let service = SiteService::new(
        Arc::new(ConfigStore::new(Arc::clone(&local))),
        Arc::clone(&log),
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        CopyGenerator::new(Arc::new(StaticGenerator("ok"))),
        Arc::new(Mailer::new(None)),
    );

    let first = service
        .submit_casting(casting_input("First"))
        .await
        .expect("Submission rejected");
    first.recorded.await.expect("Record task panicked");

    let second = service
        .submit_casting(casting_input("Second"))
        .await
        .expect("Submission rejected");
    second.recorded.await.expect("Record task panicked");

    let entries = log.list_all().await.expect("Failed to read log");
    let names: Vec<&str> = entries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Second", "First"]);
}

// ---------------------------------------------------------------------------
// Test: invalid casting input is rejected before anything happens
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_casting_rejects_invalid_email() {
    let (local, _dir) = temp_local().await;
    let remote = Arc::new(InMemoryRemote::new(false, None));
    let service = build_service(
        local,
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        Arc::new(StaticGenerator("ok")),
    );

    let mut input = casting_input("Ada");
    input.email = "not-an-email".to_string();

    let result = service.submit_casting(input).await;
    assert_matches!(result, Err(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Test: sponsor inquiries fall back to canned copy when generation fails
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_sponsor_returns_fallback_when_generation_fails() {
    let (local, _dir) = temp_local().await;
    let remote = Arc::new(InMemoryRemote::new(false, None));
    let service = build_service(
        local,
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        Arc::new(FailingGenerator),
    );

    let reply = service
        .submit_sponsor(impact_core::submission::SponsorInquiry {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            company: "Hopper Industries".to_string(),
            message: "We would like to sponsor a season.".to_string(),
        })
        .await
        .expect("Inquiry rejected");

    assert_eq!(reply, impact_genai::copy::SPONSOR_FALLBACK);
}

// ---------------------------------------------------------------------------
// Test: stats count every platform, including ones with no submissions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submission_stats_cover_all_platforms() {
    let (local, _dir) = temp_local().await;
    let remote = Arc::new(InMemoryRemote::new(false, None));
    let service = build_service(
        local,
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        Arc::new(StaticGenerator("ok")),
    );

    let receipt = service
        .submit_casting(casting_input("Ada"))
        .await
        .expect("Submission rejected");
    receipt.recorded.await.expect("Record task panicked");

    let stats = service
        .submission_stats()
        .await
        .expect("Failed to compute stats");
    assert_eq!(stats.total, 1);
    assert_eq!(stats.platforms[&Platform::Instagram], 1);
    assert_eq!(stats.platforms[&Platform::YouTube], 0);
    assert_eq!(stats.platforms.len(), 4);
}

// ---------------------------------------------------------------------------
// Test: the health report always produces text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_report_falls_back_when_generation_fails() {
    let (local, _dir) = temp_local().await;
    let remote = Arc::new(InMemoryRemote::new(false, None));
    let service = build_service(
        local,
        Arc::clone(&remote) as Arc<dyn ConfigRemote>,
        Arc::new(FailingGenerator),
    );

    let report = service.health_report().await;
    assert_eq!(report, impact_genai::copy::HEALTH_FALLBACK);
}
