use std::path::Path;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use satsuma_core::{CustomerSummary, ResponseEngine, SuggestionRequest, Tone};
use tracing::debug;

use crate::commands::{summarize, CommandResult};

pub struct SuggestArgs<'a> {
    pub message: &'a str,
    pub tone: Option<Tone>,
    pub summary_path: Option<&'a Path>,
    pub history_path: Option<&'a Path>,
    pub seed: Option<u64>,
}

pub fn run(args: SuggestArgs<'_>) -> CommandResult {
    let mut request = SuggestionRequest::new(args.message);

    if let Some(path) = args.summary_path {
        match load_summary(path) {
            Ok(summary) => request = request.with_summary(summary),
            Err(error) => {
                return CommandResult::failure("suggest", "summary_parse", format!("{error:#}"), 2)
            }
        }
    }

    if let Some(path) = args.history_path {
        match summarize::load_history(path) {
            Ok(history) => request = request.with_history(history),
            Err(error) => {
                return CommandResult::failure("suggest", "history_parse", format!("{error:#}"), 2)
            }
        }
    }

    if let Some(tone) = args.tone {
        request = request.with_preferred_tone(tone);
    }

    debug!(
        event_name = "cli.suggest.request_built",
        has_summary = request.customer_summary.is_some(),
        has_history = request.conversation_history.is_some(),
        seeded = args.seed.is_some(),
    );

    let engine = ResponseEngine::new();
    let outcome = match args.seed {
        Some(seed) => engine.suggest_with_rng(&request, &mut StdRng::seed_from_u64(seed)),
        None => engine.suggest(&request),
    };

    let suggestions = match outcome {
        Ok(suggestions) => suggestions,
        Err(error) => return CommandResult::failure("suggest", "invalid_input", error.to_string(), 2),
    };

    match serde_json::to_value(&suggestions) {
        Ok(data) => CommandResult::success(
            "suggest",
            format!("{} suggestion(s) generated", suggestions.len()),
            Some(data),
        ),
        Err(error) => CommandResult::failure("suggest", "serialization", error.to_string(), 1),
    }
}

fn load_summary(path: &Path) -> anyhow::Result<CustomerSummary> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading summary file {}", path.display()))?;
    let summary = serde_json::from_str(&raw)
        .with_context(|| format!("parsing summary file {}", path.display()))?;
    Ok(summary)
}
