//! Suggestion engine pipeline.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::message::MessageCategory;
use crate::errors::DomainError;

use super::types::{MessageAnalysis, ResponseSuggestion, SuggestionId, SuggestionRequest, Tone};
use super::{analysis, context, scoring, templates, SuggestionResult, DEFAULT_TONES};

/// Tone-templated response generation over analyzed customer messages.
///
/// The engine holds no state across calls; each invocation is a pure
/// function of its request. The only nondeterminism is the uniform
/// template pick, which runs through a caller-suppliable random source
/// so output can be pinned.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseEngine;

impl ResponseEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate ranked suggestions with a thread-local random source.
    pub fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> SuggestionResult<Vec<ResponseSuggestion>> {
        self.suggest_with_rng(request, &mut rand::thread_rng())
    }

    /// Generate ranked suggestions, picking templates through `rng`.
    ///
    /// One suggestion per requested tone: the preferred tone alone when
    /// given, otherwise the default pair. Results come back sorted by
    /// descending confidence; ties keep the tone-evaluation order.
    pub fn suggest_with_rng<R: Rng + ?Sized>(
        &self,
        request: &SuggestionRequest,
        rng: &mut R,
    ) -> SuggestionResult<Vec<ResponseSuggestion>> {
        let content = request
            .customer_message
            .as_deref()
            .ok_or(DomainError::InvalidInput { field: "customer_message" })?;

        let analysis = analysis::analyze(content);
        let customer_context = context::build(
            request.customer_summary.as_ref(),
            request.conversation_history.as_deref(),
        );

        let tones: Vec<Tone> = match request.preferred_tone {
            Some(tone) => vec![tone],
            None => DEFAULT_TONES.to_vec(),
        };

        let mut suggestions: Vec<ResponseSuggestion> = tones
            .into_iter()
            .map(|tone| generate_single(content, &analysis, &customer_context, tone, rng))
            .collect();

        scoring::rank(&mut suggestions);
        Ok(suggestions)
    }
}

fn generate_single<R: Rng + ?Sized>(
    content: &str,
    analysis: &MessageAnalysis,
    customer_context: &str,
    tone: Tone,
    rng: &mut R,
) -> ResponseSuggestion {
    let pool = templates::pool(analysis.category, tone, analysis.sentiment);
    let template = pool.choose(rng).copied().unwrap_or_default();

    let content = if analysis.category == MessageCategory::Order {
        templates::substitute_product(template, templates::product_for(content))
    } else {
        template.to_string()
    };

    ResponseSuggestion {
        id: SuggestionId::generate(),
        content,
        tone,
        confidence: scoring::adjusted_confidence(analysis.category, !customer_context.is_empty()),
        reasoning: scoring::reasoning(analysis, tone, customer_context),
    }
}
