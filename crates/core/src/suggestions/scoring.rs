//! Confidence scoring, ranking, and reasoning synthesis.
//!
//! Confidence is a heuristic in [0, 1] reflecting classification
//! certainty plus context availability, not a calibrated probability.
//! Reasoning text is fully deterministic; template randomness never
//! reaches it.

use std::cmp::Ordering;

use crate::domain::message::MessageCategory;

use super::types::{MessageAnalysis, ResponseSuggestion, Tone, Urgency};
use super::{CONTEXT_BOOST, MAX_CONFIDENCE};

/// Base confidence per classified category.
pub(super) fn base_confidence(category: MessageCategory) -> f64 {
    match category {
        MessageCategory::Order => 0.90,
        MessageCategory::Feedback => 0.85,
        MessageCategory::Complaint => 0.80,
        _ => 0.70,
    }
}

/// Base plus the context boost, capped at 1.0. There is no lower clamp;
/// inputs are never negative.
pub(super) fn adjusted_confidence(category: MessageCategory, has_context: bool) -> f64 {
    let mut confidence = base_confidence(category);
    if has_context {
        confidence += CONTEXT_BOOST;
    }
    confidence.min(MAX_CONFIDENCE)
}

/// Human-readable reasoning for one suggestion.
pub(super) fn reasoning(analysis: &MessageAnalysis, tone: Tone, context: &str) -> String {
    let mut reasoning = format!(
        "メッセージタイプ「{}」、感情「{}」に基づき、「{}」なトーンで回答を生成。",
        analysis.category.label(),
        analysis.sentiment.description(),
        tone.label(),
    );

    if !context.is_empty() {
        reasoning.push_str(" 顧客コンテキストを考慮。");
    }

    if analysis.urgency == Urgency::High {
        reasoning.push_str(" 緊急性が高いため、迅速な対応を意識。");
    }

    reasoning
}

/// Sort by descending confidence. The sort is stable, so equal scores
/// keep the tone-evaluation order.
pub(super) fn rank(suggestions: &mut [ResponseSuggestion]) {
    suggestions
        .sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal));
}
