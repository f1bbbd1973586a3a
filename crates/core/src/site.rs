//! Site content documents: the slideshows and the movie catalog.
//!
//! [`SiteConfig`] is the complete editable content document driving the
//! public pages. It is always read and written as a whole snapshot; the
//! order of each sequence is the display order. JSON field names are
//! camelCase so documents stay wire-compatible with those produced by
//! earlier writers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a slide display name.
pub const MAX_SLIDE_NAME_LENGTH: usize = 120;

/// Maximum length of a movie title.
pub const MAX_MOVIE_TITLE_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// An editable slideshow image with its display accent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideAsset {
    pub id: EntityId,
    pub name: String,
    /// Image reference; may be a large inline-encoded data URL.
    pub url: String,
    /// Display accent colour (any CSS colour value).
    pub color: String,
    /// Overlay quote, only used by the casting slideshow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

/// A produced film in the public catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: EntityId,
    pub title: String,
    /// Poster image reference; may be an inline-encoded data URL.
    pub thumbnail: String,
    pub video_url: String,
    pub genre: String,
    pub year: i32,
    pub description: String,
}

/// The complete editable content document.
///
/// Documents carry no version field; fields default to empty so snapshots
/// written by older schemas (e.g. before the movie catalog existed) still
/// parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub landing_slides: Vec<SlideAsset>,
    #[serde(default)]
    pub casting_slides: Vec<SlideAsset>,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl SiteConfig {
    /// Remove a movie by id. Returns whether a movie was removed; the
    /// relative order of the remaining catalog is preserved.
    pub fn remove_movie(&mut self, id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        self.movies.len() != before
    }

    /// Remove a slide by id from both slideshows. Returns whether a slide
    /// was removed.
    pub fn remove_slide(&mut self, id: &str) -> bool {
        let before = self.landing_slides.len() + self.casting_slides.len();
        self.landing_slides.retain(|s| s.id != id);
        self.casting_slides.retain(|s| s.id != id);
        self.landing_slides.len() + self.casting_slides.len() != before
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a slide display name: non-empty after trimming and within the
/// length limit.
pub fn validate_slide_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Slide name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_SLIDE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slide name exceeds maximum length of {MAX_SLIDE_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a movie title: non-empty after trimming and within the length
/// limit.
pub fn validate_movie_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Movie title must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_MOVIE_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Movie title exceeds maximum length of {MAX_MOVIE_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
