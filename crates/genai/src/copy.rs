//! The copy call sites: prompts, empty-response defaults, and failure
//! fallbacks.
//!
//! Each method returns a non-empty string unconditionally. An empty API
//! response gets the call site's default text; a failed call gets its
//! offline fallback and a warn log. Nothing here ever propagates an
//! error to the caller.

use std::sync::Arc;

use impact_core::submission::SubmissionStats;

use crate::client::{TextGenerator, FLASH_MODEL, PRO_MODEL};

// ---------------------------------------------------------------------------
// Canned text
// ---------------------------------------------------------------------------

pub const FEEDBACK_EMPTY_DEFAULT: &str = "Feedback generation complete.";
pub const FEEDBACK_FALLBACK: &str = "Transmission interrupted. AI Analysis offline.";

pub const SPONSOR_EMPTY_DEFAULT: &str = "Thank you for your submission.";
pub const SPONSOR_FALLBACK: &str =
    "Thank you for contacting AI Impact Media. We have received your inquiry.";

pub const QUOTE_EMPTY_DEFAULT: &str = "THE FUTURE IS YOURS";
pub const QUOTE_FALLBACK: &str = "CREATE YOUR DESTINY";

pub const HEALTH_EMPTY_DEFAULT: &str = "System Nominal. AI Monitoring Active.";
pub const HEALTH_FALLBACK: &str = "Error: Unable to interface with Core AI.";

pub const ANALYSIS_EMPTY_DEFAULT: &str = "Assessment pending.";
pub const ANALYSIS_FALLBACK: &str = "Data corrupted.";

pub const MONOLOGUE_EMPTY_DEFAULT: &str = "System failure. Improvise.";
pub const MONOLOGUE_FALLBACK: &str = "Could not generate script.";

// ---------------------------------------------------------------------------
// CopyGenerator
// ---------------------------------------------------------------------------

/// All generated-copy call sites behind one handle.
pub struct CopyGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl CopyGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Encouraging assessment shown to a casting applicant right after
    /// they submit.
    pub async fn casting_feedback(&self, name: &str, bio: &str) -> String {
        let prompt = format!(
            "You are an elite Hollywood Casting Director for a futuristic sci-fi franchise.\n\
             The applicant's name is {name}.\n\
             Their bio/experience is: \"{bio}\".\n\n\
             Provide a brief, encouraging, yet professional assessment (max 3 sentences) \
             on how they might fit into a futuristic/cyberpunk setting.\n\
             Use a futuristic, slightly dramatic tone."
        );
        self.finish(
            FLASH_MODEL,
            &prompt,
            FEEDBACK_EMPTY_DEFAULT,
            FEEDBACK_FALLBACK,
        )
        .await
    }

    /// Formal acknowledgement shown to a prospective sponsor.
    pub async fn sponsor_reply(&self, company: &str, message: &str) -> String {
        let prompt = format!(
            "Draft a formal, professional, and polite acknowledgement email response \
             for a potential corporate sponsor named \"{company}\".\n\
             They wrote: \"{message}\".\n\
             The tone must be formal business communication.\n\
             Keep it under 50 words. Mention \"AI Impact Media\"."
        );
        self.finish(
            FLASH_MODEL,
            &prompt,
            SPONSOR_EMPTY_DEFAULT,
            SPONSOR_FALLBACK,
        )
        .await
    }

    /// Short motivational tagline. Double quotes are stripped from the
    /// response before the emptiness check.
    pub async fn motivational_quote(&self) -> String {
        let prompt = "Generate a short, powerful, 5-word motivational quote about the \
                      future, actors, cinema, or dreams. Futuristic tone. Plain text only.";
        match self.generator.generate(FLASH_MODEL, prompt).await {
            Ok(text) => {
                let stripped = text.replace('"', "");
                if stripped.is_empty() {
                    QUOTE_EMPTY_DEFAULT.to_string()
                } else {
                    stripped
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Quote generation failed, using fallback copy");
                QUOTE_FALLBACK.to_string()
            }
        }
    }

    /// Admin-dashboard telemetry narrative over the submission counts.
    pub async fn system_health_report(&self, stats: &SubmissionStats) -> String {
        let distribution =
            serde_json::to_string(&stats.platforms).unwrap_or_else(|_| "{}".to_string());
        let prompt = format!(
            "You are the AI System Administrator (Core AI) for \"AI Impact Media\".\n\
             Analyze the current system telemetry:\n\
             - Total Casting Submissions: {}\n\
             - Platform Distribution: {}\n\
             - Server Latency: 42ms (Nominal)\n\
             - Database Integrity: 100%\n\n\
             Provide a high-level \"System Intelligence Report\" (max 60 words).\n\
             Identify trends in the platform distribution (e.g., if Instagram is high, \
             mention social engagement).\n\
             Use a highly technical, sci-fi/cyberpunk tone (e.g., \"Mainframe optimal\", \
             \"Data flux detected\").",
            stats.total, distribution
        );
        self.finish(PRO_MODEL, &prompt, HEALTH_EMPTY_DEFAULT, HEALTH_FALLBACK)
            .await
    }

    /// One-sentence scout assessment of a single applicant's bio.
    pub async fn candidate_analysis(&self, bio: &str) -> String {
        let prompt = format!(
            "Analyze this candidate bio for potential \"Star Power\" in a sci-fi \
             universe: \"{bio}\".\n\
             Give a concise, 1-sentence \"Scout Assessment\" highlighting their unique vibe."
        );
        self.finish(
            FLASH_MODEL,
            &prompt,
            ANALYSIS_EMPTY_DEFAULT,
            ANALYSIS_FALLBACK,
        )
        .await
    }

    /// Three-line audition monologue for the casting page.
    pub async fn monologue_script(&self) -> String {
        let prompt = "Write a short, intense 3-line sci-fi monologue for an actor to perform.\n\
                      Context: A rogue hacker warning the resistance about an imminent system \
                      purge.\n\
                      No stage directions, just the dialogue.";
        self.finish(
            FLASH_MODEL,
            prompt,
            MONOLOGUE_EMPTY_DEFAULT,
            MONOLOGUE_FALLBACK,
        )
        .await
    }

    /// Run one generation and apply the two-tier fallback policy.
    async fn finish(
        &self,
        model: &str,
        prompt: &str,
        empty_default: &str,
        failure_fallback: &str,
    ) -> String {
        match self.generator.generate(model, prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => empty_default.to_string(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    model,
                    "Text generation failed, using fallback copy"
                );
                failure_fallback.to_string()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
