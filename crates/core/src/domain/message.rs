use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Coarse classification of a conversational turn. The same vocabulary
/// is used for caller-assigned message categories and for the engine's
/// own classification of inbound text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    Order,
    Inquiry,
    Review,
    Request,
    Feedback,
    Complaint,
}

impl MessageCategory {
    /// Lowercase label echoed into reasoning text.
    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::Order => "order",
            MessageCategory::Inquiry => "inquiry",
            MessageCategory::Review => "review",
            MessageCategory::Request => "request",
            MessageCategory::Feedback => "feedback",
            MessageCategory::Complaint => "complaint",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderRole {
    Customer,
    Farmer,
}

/// One conversational turn. Immutable once created; the caller assigns
/// the identifier and timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub category: MessageCategory,
    pub timestamp: DateTime<Utc>,
    pub sender: SenderRole,
}
