//! Casting submissions, sponsor inquiries, and per-platform statistics.
//!
//! A [`Submission`] is a visitor's casting application: contact details,
//! uploaded media (inline-encoded data URLs), and a drawn signature. The
//! stored JSON uses camelCase keys and millisecond timestamps so the log
//! stays compatible with documents produced by earlier writers.

use std::collections::BTreeMap;

use chrono::serde::ts_milliseconds;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::{new_entity_id, EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an applicant or sponsor name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a submission bio or sponsor message.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Social platform an applicant is active on.
///
/// Variant names are serialized verbatim and must match the strings in
/// existing submission logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Twitter,
    TikTok,
    YouTube,
}

impl Platform {
    /// Every platform, in display order. Used to zero-fill distributions.
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::TikTok,
        Platform::YouTube,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of a submission. New submissions start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// An uploaded media file captured as an inline data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub name: String,
    /// Inline-encoded content (`data:<mime>;base64,...`).
    pub url: String,
    /// MIME type reported at capture time.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A recorded casting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub social_handle: String,
    pub platform: Platform,
    pub bio: String,
    #[serde(default)]
    pub files: Vec<MediaFile>,
    /// Drawn signature as an inline data URL.
    pub signature: String,
    /// Stored as Unix milliseconds.
    #[serde(with = "ts_milliseconds")]
    pub timestamp: Timestamp,
    #[serde(default)]
    pub status: SubmissionStatus,
}

/// Input for a new casting application, before an id and timestamp are
/// assigned. Validate with [`validate_new_submission`] before recording.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub social_handle: String,
    pub platform: Platform,
    pub bio: String,
    pub files: Vec<MediaFile>,
    pub signature: String,
}

impl NewSubmission {
    /// Mint a full [`Submission`]: fresh id, the given timestamp, and
    /// `Pending` status.
    pub fn into_submission(self, timestamp: Timestamp) -> Submission {
        Submission {
            id: new_entity_id(),
            name: self.name,
            email: self.email,
            social_handle: self.social_handle,
            platform: self.platform,
            bio: self.bio,
            files: self.files,
            signature: self.signature,
            timestamp,
            status: SubmissionStatus::default(),
        }
    }
}

/// A sponsor contact-form inquiry. Not persisted; validated, answered by
/// generated copy, and acknowledged by mail.
#[derive(Debug, Clone)]
pub struct SponsorInquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a person or company name: non-empty after trimming and within
/// the length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an email address using the standard address grammar.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "Invalid email address: {email}"
        )));
    }
    Ok(())
}

/// Validate a social handle: non-empty after trimming.
pub fn validate_social_handle(handle: &str) -> Result<(), CoreError> {
    if handle.trim().is_empty() {
        return Err(CoreError::Validation(
            "Social handle must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a free-text bio or message against the length limit.
pub fn validate_message(text: &str) -> Result<(), CoreError> {
    if text.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate every field of a new casting application.
pub fn validate_new_submission(input: &NewSubmission) -> Result<(), CoreError> {
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    validate_social_handle(&input.social_handle)?;
    validate_message(&input.bio)?;
    Ok(())
}

/// Validate every field of a sponsor inquiry.
pub fn validate_sponsor_inquiry(input: &SponsorInquiry) -> Result<(), CoreError> {
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    validate_name(&input.company)?;
    validate_message(&input.message)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Aggregate counts over the submission log, fed to the admin health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionStats {
    pub total: usize,
    /// Count per platform; every platform is present, zero-filled.
    pub platforms: BTreeMap<Platform, usize>,
}

impl SubmissionStats {
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let mut platforms: BTreeMap<Platform, usize> =
            Platform::ALL.iter().map(|p| (*p, 0)).collect();
        for submission in submissions {
            *platforms.entry(submission.platform).or_insert(0) += 1;
        }
        SubmissionStats {
            total: submissions.len(),
            platforms,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
