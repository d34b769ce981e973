//! Customer context assembly.
//!
//! Renders known profile facts and recent-history depth into one short
//! free-text fragment. The fragment boosts confidence and is echoed into
//! reasoning text; nothing ever parses it back.

use std::fmt::Write;

use crate::domain::message::Message;
use crate::domain::summary::CustomerSummary;

use super::RECENT_HISTORY_WINDOW;

pub(super) fn build(summary: Option<&CustomerSummary>, history: Option<&[Message]>) -> String {
    let mut context = String::new();

    if let Some(summary) = summary {
        context.push_str("顧客情報: ");
        if !summary.preferences.is_empty() {
            let preferences = summary
                .preferences
                .iter()
                .map(|preference| preference.description())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(context, "好み（{preferences}）");
        }
        if !summary.purchase_history.is_empty() {
            let _ = write!(context, " 購入履歴（{}件）", summary.purchase_history.len());
        }
        let _ = write!(context, " 感情：{}", summary.sentiment.description());
    }

    if let Some(history) = history {
        if !history.is_empty() {
            let recent = history.len().min(RECENT_HISTORY_WINDOW);
            let _ = write!(context, " 最近のやり取り：{recent}件");
        }
    }

    context
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Utc;

    use crate::domain::message::{Message, MessageCategory, MessageId, SenderRole};
    use crate::domain::summary::{
        CustomerId, CustomerSummary, Preference, Sentiment, SummaryId,
    };

    use super::build;

    fn summary() -> CustomerSummary {
        CustomerSummary {
            id: SummaryId::generate(),
            customer_id: CustomerId("customer123".to_string()),
            key_topics: BTreeSet::new(),
            sentiment: Sentiment::Positive,
            purchase_history: vec!["青島みかん5kg".to_string()],
            preferences: BTreeSet::from([Preference::GiftPackaging]),
            last_updated: Utc::now(),
        }
    }

    fn history(len: usize) -> Vec<Message> {
        (0..len)
            .map(|index| Message {
                id: MessageId(index.to_string()),
                content: "こんにちは".to_string(),
                category: MessageCategory::Inquiry,
                timestamp: Utc::now(),
                sender: SenderRole::Customer,
            })
            .collect()
    }

    #[test]
    fn empty_inputs_yield_empty_context() {
        assert_eq!(build(None, None), "");
        assert_eq!(build(None, Some(&[])), "");
    }

    #[test]
    fn summary_fragment_names_preferences_purchases_and_sentiment() {
        let context = build(Some(&summary()), None);

        assert!(context.contains("顧客情報"));
        assert!(context.contains("贈答用梱包"));
        assert!(context.contains("購入履歴（1件）"));
        assert!(context.contains("感情：ポジティブ"));
    }

    #[test]
    fn empty_preference_and_purchase_fragments_are_omitted() {
        let mut bare = summary();
        bare.preferences.clear();
        bare.purchase_history.clear();

        let context = build(Some(&bare), None);

        assert!(!context.contains("好み"));
        assert!(!context.contains("購入履歴"));
        // Sentiment always renders, so a bare summary still produces context.
        assert!(context.contains("感情：ポジティブ"));
    }

    #[test]
    fn history_fragment_counts_at_most_three_recent_messages() {
        let short = build(None, Some(&history(2)));
        assert!(short.contains("最近のやり取り：2件"));

        let long = build(None, Some(&history(5)));
        assert!(long.contains("最近のやり取り：3件"));
    }
}
