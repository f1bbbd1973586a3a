//! `impact-core` — shared domain vocabulary for the Impact Media content
//! platform.
//!
//! Holds the content and submission document types, the built-in seed
//! content, the admin console gate, and the inline-media codec. Zero
//! internal dependencies so the store, drive, genai, and sync crates can
//! all build on the same types.

pub mod console;
pub mod data_url;
pub mod defaults;
pub mod error;
pub mod site;
pub mod submission;
pub mod types;
