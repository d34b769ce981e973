//! Customer profile summarization.
//!
//! Derives a per-customer profile (topics, sentiment, purchase history,
//! preferences) from a conversation history, and merges single new
//! messages into an existing profile without rescanning the whole
//! history.

mod lexicon;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::Utc;

use crate::domain::message::{Message, MessageCategory};
use crate::domain::summary::{CustomerId, CustomerSummary, Sentiment, SummaryId};
use crate::errors::DomainError;

/// Derives [`CustomerSummary`] values from conversation history.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProfileSummarizer;

impl ProfileSummarizer {
    pub fn new() -> Self {
        Self
    }

    /// Build a fresh summary from the full history.
    ///
    /// An empty history is the base case, not an error: it yields an
    /// empty profile with neutral sentiment.
    pub fn generate(&self, customer_id: &CustomerId, history: &[Message]) -> CustomerSummary {
        let mut key_topics = BTreeSet::new();
        let mut preferences = BTreeSet::new();
        let mut purchase_history = Vec::new();

        for message in history {
            let normalized = lexicon::normalize(&message.content);
            key_topics.extend(lexicon::topics_in(&normalized));
            preferences.extend(lexicon::preferences_in(&normalized));
            if is_purchase_record(message.category, &normalized) {
                purchase_history.push(message.content.clone());
            }
        }

        CustomerSummary {
            id: SummaryId::generate(),
            customer_id: customer_id.clone(),
            key_topics,
            sentiment: history_sentiment(history),
            purchase_history,
            preferences,
            last_updated: Utc::now(),
        }
    }

    /// Merge one new message into an existing summary.
    ///
    /// Only the topic and preference sets grow and the timestamp
    /// refreshes; sentiment and purchase history stay exactly as
    /// recorded on `existing`. The customer id is accepted for interface
    /// symmetry with [`ProfileSummarizer::generate`]; the returned
    /// summary keeps the identity of `existing`.
    pub fn update(
        &self,
        _customer_id: &CustomerId,
        existing: &CustomerSummary,
        new_message: &Message,
    ) -> Result<CustomerSummary, DomainError> {
        if new_message.content.is_empty() {
            return Err(DomainError::InvalidInput { field: "content" });
        }

        let normalized = lexicon::normalize(&new_message.content);

        let mut updated = existing.clone();
        updated.key_topics.extend(lexicon::topics_in(&normalized));
        updated.preferences.extend(lexicon::preferences_in(&normalized));
        updated.last_updated = Utc::now();

        Ok(updated)
    }
}

/// Polarity count across the whole history. Strict majority wins; ties
/// (including the empty history) are neutral.
fn history_sentiment(history: &[Message]) -> Sentiment {
    let mut positive = 0u32;
    let mut negative = 0u32;

    for message in history {
        let normalized = lexicon::normalize(&message.content);
        let (message_positive, message_negative) = lexicon::polarity(&normalized);
        positive += message_positive;
        negative += message_negative;
    }

    match positive.cmp(&negative) {
        Ordering::Greater => Sentiment::Positive,
        Ordering::Less => Sentiment::Negative,
        Ordering::Equal => Sentiment::Neutral,
    }
}

fn is_purchase_record(category: MessageCategory, normalized: &str) -> bool {
    category == MessageCategory::Order
        && lexicon::PRODUCT_FAMILY_KEYWORDS.iter().any(|keyword| normalized.contains(keyword))
        && lexicon::QUANTITY_UNIT_MARKERS.iter().any(|marker| normalized.contains(marker))
}
