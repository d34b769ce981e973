//! Inbound message analysis.
//!
//! A deterministic rule pass: classification by fixed cue priority,
//! keyword extraction over a fixed vocabulary, polarity-count sentiment,
//! and urgency cues. Matching is case-normalized substring containment,
//! not tokenization.

use crate::domain::message::MessageCategory;
use crate::domain::summary::Sentiment;

use super::types::{MessageAnalysis, Urgency};

// Classification cues, evaluated in priority order: order, then
// feedback, then complaint; anything else is an inquiry.
const ORDER_CUES: &[&str] = &["注文", "購入", "kg"];
const FEEDBACK_CUES: &[&str] = &["ありがとう", "美味しい"];
const COMPLAINT_CUES: &[&str] = &["問題", "不満", "クレーム"];

/// Fixed vocabulary for keyword extraction.
const KEYWORD_VOCABULARY: &[&str] = &[
    "みかん",
    "青島",
    "温州",
    "注文",
    "購入",
    "kg",
    "梱包",
    "美味しい",
    "ありがとう",
    "問題",
    "不満",
];

// Message-level sentiment lexicons.
const POSITIVE_KEYWORDS: &[&str] = &["美味しい", "ありがとう", "楽しみ", "良い", "最高"];
const NEGATIVE_KEYWORDS: &[&str] = &["問題", "不満", "クレーム", "悪い", "残念"];

const URGENT_CUES: &[&str] = &["急ぎ", "すぐ", "至急"];
const DEFERRAL_CUES: &[&str] = &["できれば", "お時間のある時"];

pub(super) fn analyze(content: &str) -> MessageAnalysis {
    let normalized = content.to_lowercase();

    MessageAnalysis {
        category: classify(&normalized),
        keywords: extract_keywords(&normalized),
        sentiment: message_sentiment(&normalized),
        urgency: estimate_urgency(&normalized),
    }
}

fn contains_any(normalized: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| normalized.contains(cue))
}

/// First matching cue group wins; swapping the order changes behavior
/// materially, so it stays fixed.
fn classify(normalized: &str) -> MessageCategory {
    if contains_any(normalized, ORDER_CUES) {
        MessageCategory::Order
    } else if contains_any(normalized, FEEDBACK_CUES) {
        MessageCategory::Feedback
    } else if contains_any(normalized, COMPLAINT_CUES) {
        MessageCategory::Complaint
    } else {
        MessageCategory::Inquiry
    }
}

fn extract_keywords(normalized: &str) -> Vec<String> {
    KEYWORD_VOCABULARY
        .iter()
        .filter(|keyword| normalized.contains(*keyword))
        .map(|keyword| (*keyword).to_string())
        .collect()
}

fn message_sentiment(normalized: &str) -> Sentiment {
    let positive = POSITIVE_KEYWORDS.iter().filter(|keyword| normalized.contains(*keyword)).count();
    let negative = NEGATIVE_KEYWORDS.iter().filter(|keyword| normalized.contains(*keyword)).count();

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn estimate_urgency(normalized: &str) -> Urgency {
    if contains_any(normalized, URGENT_CUES) {
        Urgency::High
    } else if contains_any(normalized, DEFERRAL_CUES) {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}
