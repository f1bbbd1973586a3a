//! Generated marketing and analysis copy with guaranteed fallbacks.
//!
//! Short pieces of site copy (casting feedback, sponsor replies, quotes,
//! reports) are produced by a hosted text-generation API. Every call site
//! has two tiers of canned text: a default for an empty response and a
//! fallback for a failed call, so callers always receive a non-empty
//! string no matter what the API does.
//!
//! - [`TextGenerator`] — the generation seam; production impl is
//!   [`GeminiClient`], tests use fixed/failing fakes.
//! - [`CopyGenerator`] — the call sites themselves, prompts and
//!   fallbacks included.

pub mod client;
pub mod copy;
pub mod error;

pub use client::{GeminiClient, TextGenerator, FLASH_MODEL, PRO_MODEL};
pub use copy::CopyGenerator;
pub use error::GenAiError;
