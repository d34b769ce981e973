//! Types for the response suggestion engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::message::{Message, MessageCategory};
use crate::domain::summary::{CustomerSummary, Sentiment};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuggestionId(pub Uuid);

impl SuggestionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Reply register governing template pool selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Friendly,
    Professional,
    Apologetic,
    Enthusiastic,
}

impl Tone {
    /// Lowercase label echoed into reasoning text.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Apologetic => "apologetic",
            Tone::Enthusiastic => "enthusiastic",
        }
    }
}

/// Cue-based estimate of how quickly a reply is expected. Annotates
/// reasoning text only; it never changes scores or templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Analysis of one inbound message. The four outputs are computed
/// independently and do not affect each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageAnalysis {
    pub category: MessageCategory,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub urgency: Urgency,
}

/// One candidate reply. Engine output only; never mutated by callers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponseSuggestion {
    pub id: SuggestionId,
    pub content: String,
    pub tone: Tone,
    pub confidence: f64,
    pub reasoning: String,
}

/// Input bundle for the suggestion engine.
///
/// `customer_message` is the only required field; its absence is the one
/// rejected condition (an empty string is valid input). Everything else
/// falls back to a documented default.
#[derive(Clone, Debug, Default)]
pub struct SuggestionRequest {
    pub customer_message: Option<String>,
    pub customer_summary: Option<CustomerSummary>,
    pub conversation_history: Option<Vec<Message>>,
    pub preferred_tone: Option<Tone>,
}

impl SuggestionRequest {
    /// Create a request for one inbound message.
    pub fn new(customer_message: impl Into<String>) -> Self {
        Self { customer_message: Some(customer_message.into()), ..Self::default() }
    }

    /// Attach the customer's profile summary.
    pub fn with_summary(mut self, summary: CustomerSummary) -> Self {
        self.customer_summary = Some(summary);
        self
    }

    /// Attach prior conversation history, oldest first.
    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.conversation_history = Some(history);
        self
    }

    /// Request a single preferred tone instead of the default pair.
    pub fn with_preferred_tone(mut self, tone: Tone) -> Self {
        self.preferred_tone = Some(tone);
        self
    }
}
