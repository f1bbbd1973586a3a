//! The casting submission log: append-at-front with size-bounded eviction.

use std::sync::Arc;

use impact_core::submission::Submission;
use tokio::task::JoinHandle;

use crate::error::StoreError;
use crate::local::{LocalStore, SUBMISSIONS_DOC};

/// Serialized log size above which eviction kicks in.
///
/// Submissions carry their media inline as data URLs, so the log grows in
/// megabyte steps; the bound keeps the document within a ~5 MB storage
/// quota.
pub const MAX_LOG_BYTES: usize = 4_500_000;

/// Serialized size eviction drives the log back under.
pub const TARGET_LOG_BYTES: usize = 4_000_000;

/// The submission log over the `submissions` document.
///
/// Entries are stored most-recent-first. Single writer assumed; there is
/// no locking here beyond the document layer's atomic writes.
pub struct SubmissionLog {
    local: Arc<LocalStore>,
}

impl SubmissionLog {
    pub fn new(local: Arc<LocalStore>) -> Self {
        Self { local }
    }

    /// Record a submission at the front of the log and persist it.
    ///
    /// If the serialized log exceeds [`MAX_LOG_BYTES`], the chronologically
    /// oldest entries (minimum timestamp, wherever they sit in the
    /// document) are evicted one at a time until the log is back under
    /// [`TARGET_LOG_BYTES`]. Returns the retained entry count.
    pub async fn record(&self, submission: Submission) -> Result<usize, StoreError> {
        let mut entries = self.read_entries().await;
        entries.insert(0, submission);

        let mut serialized = serialize_entries(&entries)?;
        if serialized.len() > MAX_LOG_BYTES {
            let before = entries.len();
            while serialized.len() > TARGET_LOG_BYTES && !entries.is_empty() {
                let oldest = entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, s)| s.timestamp)
                    .map(|(i, _)| i)
                    .unwrap();
                entries.remove(oldest);
                serialized = serialize_entries(&entries)?;
            }
            tracing::warn!(
                evicted = before - entries.len(),
                retained = entries.len(),
                bytes = serialized.len(),
                "Submission log over capacity, evicted oldest entries"
            );
        }

        self.local
            .write_bytes(SUBMISSIONS_DOC, serialized.as_bytes())
            .await?;
        Ok(entries.len())
    }

    /// Record on a spawned task the caller does not await.
    ///
    /// Completion or failure is logged either way; the handle is returned
    /// for callers (and tests) that do want to join it.
    pub fn record_detached(self: &Arc<Self>, submission: Submission) -> JoinHandle<()> {
        let log = Arc::clone(self);
        let id = submission.id.clone();
        tokio::spawn(async move {
            match log.record(submission).await {
                Ok(retained) => {
                    tracing::debug!(submission_id = %id, retained, "Submission recorded");
                }
                Err(e) => {
                    tracing::error!(submission_id = %id, error = %e, "Failed to record submission");
                }
            }
        })
    }

    /// The full log in stored order (most-recent-first).
    pub async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.read_entries().await)
    }

    /// Read the log, treating an absent or unreadable document as empty.
    async fn read_entries(&self) -> Vec<Submission> {
        match self.local.read::<Vec<Submission>>(SUBMISSIONS_DOC).await {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Submission log unreadable, starting empty");
                Vec::new()
            }
        }
    }
}

fn serialize_entries(entries: &[Submission]) -> Result<String, StoreError> {
    serde_json::to_string(entries).map_err(|source| StoreError::Serialize {
        name: SUBMISSIONS_DOC.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use impact_core::submission::{NewSubmission, Platform};

    async fn temp_log() -> (Arc<SubmissionLog>, Arc<LocalStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let local = Arc::new(LocalStore::new(dir.path().join("data")).await.unwrap());
        let log = Arc::new(SubmissionLog::new(Arc::clone(&local)));
        (log, local, dir)
    }

    fn submission(name: &str, ts_millis: i64, payload_bytes: usize) -> Submission {
        NewSubmission {
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            social_handle: "@someone".to_string(),
            platform: Platform::Instagram,
            bio: String::new(),
            files: vec![],
            signature: "s".repeat(payload_bytes),
        }
        .into_submission(Utc.timestamp_millis_opt(ts_millis).unwrap())
    }

    #[tokio::test]
    async fn empty_log_lists_nothing() {
        let (log, _local, _dir) = temp_log().await;
        assert!(log.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_are_prepended_most_recent_first() {
        let (log, _local, _dir) = temp_log().await;
        log.record(submission("first", 1_000, 10)).await.unwrap();
        log.record(submission("second", 2_000, 10)).await.unwrap();

        let names: Vec<String> = log
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["second", "first"]);
    }

    #[tokio::test]
    async fn record_returns_retained_count() {
        let (log, _local, _dir) = temp_log().await;
        assert_eq!(log.record(submission("a", 1, 10)).await.unwrap(), 1);
        assert_eq!(log.record(submission("b", 2, 10)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn corrupt_log_starts_empty() {
        let (log, local, _dir) = temp_log().await;
        local.write_bytes(SUBMISSIONS_DOC, b"[broken").await.unwrap();

        log.record(submission("fresh", 1, 10)).await.unwrap();
        let entries = log.list_all().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "fresh");
    }

    #[tokio::test]
    async fn oversized_log_evicts_down_to_target() {
        let (log, _local, _dir) = temp_log().await;

        // Each entry serializes to ~1 MB; five of them cross the 4.5 MB
        // threshold.
        for i in 0..4 {
            log.record(submission(&format!("s{i}"), i, 1_000_000))
                .await
                .unwrap();
        }
        let retained = log.record(submission("s4", 4, 1_000_000)).await.unwrap();

        let entries = log.list_all().await.unwrap();
        assert_eq!(entries.len(), retained);
        let serialized = serde_json::to_string(&entries).unwrap();
        assert!(serialized.len() <= TARGET_LOG_BYTES);

        // The survivors are exactly the newest entries, still in
        // most-recent-first order.
        let names: Vec<&str> = entries.iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<String> = (0..5)
            .rev()
            .map(|i| format!("s{i}"))
            .take(entries.len())
            .collect();
        assert_eq!(names, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn eviction_removes_chronologically_oldest_not_structural_tail() {
        let (log, local, _dir) = temp_log().await;

        // A document whose stored order is not chronological: the oldest
        // entry sits at the front.
        let stray_oldest = submission("ancient", 1, 1_000_000);
        let newer = vec![
            stray_oldest.clone(),
            submission("recent-a", 5_000, 1_000_000),
            submission("recent-b", 4_000, 1_000_000),
            submission("recent-c", 3_000, 1_000_000),
        ];
        local.write(SUBMISSIONS_DOC, &newer).await.unwrap();

        log.record(submission("newest", 6_000, 1_000_000))
            .await
            .unwrap();

        let entries = log.list_all().await.unwrap();
        assert!(entries.iter().all(|s| s.name != "ancient"));
        assert!(entries.iter().any(|s| s.name == "newest"));
        assert!(entries.iter().any(|s| s.name == "recent-a"));
    }

    #[tokio::test]
    async fn detached_record_lands_in_the_log() {
        let (log, _local, _dir) = temp_log().await;

        let handle = log.record_detached(submission("detached", 1, 10));
        handle.await.unwrap();

        let entries = log.list_all().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "detached");
    }
}
