pub mod domain;
pub mod errors;
pub mod suggestions;
pub mod summarizer;

pub use domain::message::{Message, MessageCategory, MessageId, SenderRole};
pub use domain::summary::{CustomerId, CustomerSummary, Preference, Sentiment, SummaryId, Topic};
pub use errors::DomainError;
pub use suggestions::{
    MessageAnalysis, ResponseEngine, ResponseSuggestion, SuggestionId, SuggestionRequest, Tone,
    Urgency,
};
pub use summarizer::ProfileSummarizer;
