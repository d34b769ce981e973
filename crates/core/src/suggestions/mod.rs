//! Response suggestion engine.
//!
//! Classifies an inbound customer message, assembles context from the
//! customer's profile, and produces one tone-templated candidate reply
//! per requested tone, each scored and explained. Results are ranked by
//! descending confidence.

mod analysis;
mod context;
mod engine;
mod scoring;
mod templates;
mod types;

pub use engine::ResponseEngine;
pub use types::*;

use crate::errors::DomainError;

/// Result type for suggestion operations
pub type SuggestionResult<T> = Result<T, DomainError>;

/// Tones evaluated when the request names no preference.
pub const DEFAULT_TONES: [Tone; 2] = [Tone::Friendly, Tone::Professional];

/// Confidence added when customer context is available.
pub const CONTEXT_BOOST: f64 = 0.10;

/// Upper bound for adjusted confidence.
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Trailing history messages counted into the context fragment.
pub const RECENT_HISTORY_WINDOW: usize = 3;
