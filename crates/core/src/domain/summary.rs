use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummaryId(pub Uuid);

impl SummaryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Key-topic labels drawn from the fixed controlled vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    PackagingInterest,
    NewProductInterest,
    RepeatPurchaseIntent,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::PackagingInterest => "packaging-interest",
            Topic::NewProductInterest => "new-product-interest",
            Topic::RepeatPurchaseIntent => "repeat-purchase-intent",
        }
    }

    /// Japanese wording used when the topic surfaces in customer-facing text.
    pub fn description(&self) -> &'static str {
        match self {
            Topic::PackagingInterest => "梱包への関心",
            Topic::NewProductInterest => "新商品への関心",
            Topic::RepeatPurchaseIntent => "リピート希望",
        }
    }
}

/// Preference labels drawn from the fixed controlled vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    GiftPackaging,
    FamilyOriented,
}

impl Preference {
    pub fn label(&self) -> &'static str {
        match self {
            Preference::GiftPackaging => "gift-packaging",
            Preference::FamilyOriented => "family-oriented",
        }
    }

    /// Japanese wording used when the preference surfaces in customer-facing text.
    pub fn description(&self) -> &'static str {
        match self {
            Preference::GiftPackaging => "贈答用梱包",
            Preference::FamilyOriented => "家族向け",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Japanese sentiment label used in context fragments and reasoning text.
    pub fn description(&self) -> &'static str {
        match self {
            Sentiment::Positive => "ポジティブ",
            Sentiment::Neutral => "ニュートラル",
            Sentiment::Negative => "ネガティブ",
        }
    }
}

/// A customer's accumulated profile.
///
/// Topic and preference sets cannot hold duplicates by construction;
/// purchase history keeps discovery order and permits repeats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: SummaryId,
    pub customer_id: CustomerId,
    pub key_topics: BTreeSet<Topic>,
    pub sentiment: Sentiment,
    pub purchase_history: Vec<String>,
    pub preferences: BTreeSet<Preference>,
    pub last_updated: DateTime<Utc>,
}
