//! Keyword tables driving profile extraction.
//!
//! Matching is case-normalized substring containment over the raw
//! message text; each label fires at most once per message no matter how
//! often its triggers occur.

use crate::domain::summary::{Preference, Topic};

pub(super) struct TopicRule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
}

pub(super) const TOPIC_RULES: &[TopicRule] = &[
    TopicRule { topic: Topic::PackagingInterest, triggers: &["梱包"] },
    TopicRule { topic: Topic::NewProductInterest, triggers: &["新しい商品", "新商品"] },
    TopicRule { topic: Topic::RepeatPurchaseIntent, triggers: &["次回も", "リピート"] },
];

pub(super) struct PreferenceRule {
    pub preference: Preference,
    pub triggers: &'static [&'static str],
}

pub(super) const PREFERENCE_RULES: &[PreferenceRule] = &[
    PreferenceRule { preference: Preference::GiftPackaging, triggers: &["贈答用", "ギフト"] },
    PreferenceRule { preference: Preference::FamilyOriented, triggers: &["家族", "みんな"] },
];

/// History-level sentiment lexicons. One point per keyword present per
/// message; occurrence counts and message length carry no weight.
pub(super) const POSITIVE_KEYWORDS: &[&str] = &["美味しい", "美味しかった", "楽しみ", "ありがとう"];
pub(super) const NEGATIVE_KEYWORDS: &[&str] = &["破れ", "問題", "クレーム", "不満"];

/// A message only counts as a purchase record when it names a product
/// family and a quantity unit.
pub(super) const PRODUCT_FAMILY_KEYWORDS: &[&str] = &["みかん"];
pub(super) const QUANTITY_UNIT_MARKERS: &[&str] = &["kg"];

pub(super) fn normalize(content: &str) -> String {
    content.to_lowercase()
}

pub(super) fn topics_in(normalized: &str) -> Vec<Topic> {
    TOPIC_RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|trigger| normalized.contains(trigger)))
        .map(|rule| rule.topic)
        .collect()
}

pub(super) fn preferences_in(normalized: &str) -> Vec<Preference> {
    PREFERENCE_RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|trigger| normalized.contains(trigger)))
        .map(|rule| rule.preference)
        .collect()
}

/// Positive and negative keyword counts for one message.
pub(super) fn polarity(normalized: &str) -> (u32, u32) {
    let positive = POSITIVE_KEYWORDS.iter().filter(|keyword| normalized.contains(*keyword)).count();
    let negative = NEGATIVE_KEYWORDS.iter().filter(|keyword| normalized.contains(*keyword)).count();
    (positive as u32, negative as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_trigger_fires_label_once() {
        let topics = topics_in("梱包と梱包について");
        assert_eq!(topics, vec![Topic::PackagingInterest]);
    }

    #[test]
    fn either_gift_trigger_fires_gift_packaging() {
        assert_eq!(preferences_in("贈答用でお願いします"), vec![Preference::GiftPackaging]);
        assert_eq!(preferences_in("ギフトにしたいです"), vec![Preference::GiftPackaging]);
    }

    #[test]
    fn polarity_counts_distinct_keywords() {
        // Two distinct positive keywords in one message contribute two points.
        let (positive, negative) = polarity("美味しいみかんをありがとう");
        assert_eq!(positive, 2);
        assert_eq!(negative, 0);
    }

    #[test]
    fn polarity_ignores_repeated_occurrences() {
        let (positive, _) = polarity("楽しみです。本当に楽しみです。");
        assert_eq!(positive, 1);
    }
}
