use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use satsuma_core::{
    CustomerId, ProfileSummarizer, ResponseEngine, Sentiment, SuggestionRequest, Tone,
};
use serde::Serialize;

use crate::commands::CommandResult;
use crate::fixtures;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum SmokeStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct SmokeCheck {
    name: &'static str,
    status: SmokeStatus,
    elapsed_ms: u64,
    message: String,
}

#[derive(Debug, Serialize)]
struct SmokeReport {
    command: &'static str,
    status: SmokeStatus,
    summary: String,
    total_elapsed_ms: u64,
    checks: Vec<SmokeCheck>,
}

pub fn run() -> CommandResult {
    let started = Instant::now();
    let mut checks = Vec::new();

    checks.push(timed_check("empty_history_summary", || {
        let summary =
            ProfileSummarizer::new().generate(&CustomerId(fixtures::DEMO_CUSTOMER_ID.into()), &[]);

        if summary.sentiment != Sentiment::Neutral {
            return Err(format!("expected neutral sentiment, got {}", summary.sentiment.label()));
        }
        if !summary.key_topics.is_empty() || !summary.preferences.is_empty() {
            return Err("expected empty topic and preference sets".to_string());
        }
        Ok("empty history produced a neutral empty profile".to_string())
    }));

    checks.push(timed_check("fixture_summary", || {
        let history = fixtures::demo_history();
        let summary = ProfileSummarizer::new()
            .generate(&CustomerId(fixtures::DEMO_CUSTOMER_ID.into()), &history);

        if summary.sentiment != Sentiment::Positive {
            return Err(format!("expected positive sentiment, got {}", summary.sentiment.label()));
        }
        if summary.purchase_history.len() != 1 {
            return Err(format!(
                "expected one purchase record, got {}",
                summary.purchase_history.len()
            ));
        }
        Ok(format!(
            "profile derived: {} topic(s), {} preference(s), {} purchase(s)",
            summary.key_topics.len(),
            summary.preferences.len(),
            summary.purchase_history.len()
        ))
    }));

    checks.push(timed_check("ranked_order_suggestions", || {
        let history = fixtures::demo_history();
        let summarizer = ProfileSummarizer::new();
        let summary =
            summarizer.generate(&CustomerId(fixtures::DEMO_CUSTOMER_ID.into()), &history);

        let request = SuggestionRequest::new("青島みかんを5kg注文したいです")
            .with_summary(summary)
            .with_history(history);
        let suggestions = ResponseEngine::new()
            .suggest_with_rng(&request, &mut StdRng::seed_from_u64(0))
            .map_err(|error| error.to_string())?;

        if suggestions.len() != 2 {
            return Err(format!("expected two suggestions, got {}", suggestions.len()));
        }
        if suggestions.windows(2).any(|pair| pair[0].confidence < pair[1].confidence) {
            return Err("suggestions are not sorted by descending confidence".to_string());
        }
        Ok("two ranked suggestions generated with customer context".to_string())
    }));

    checks.push(timed_check("preferred_tone_single_suggestion", || {
        let request = SuggestionRequest::new("青島みかんを5kg注文したいです")
            .with_preferred_tone(Tone::Enthusiastic);
        let suggestions = ResponseEngine::new()
            .suggest_with_rng(&request, &mut StdRng::seed_from_u64(0))
            .map_err(|error| error.to_string())?;

        if suggestions.len() != 1 || suggestions[0].tone != Tone::Enthusiastic {
            return Err("expected exactly one enthusiastic suggestion".to_string());
        }
        Ok("preferred tone produced exactly one suggestion".to_string())
    }));

    finalize_report(checks, started.elapsed().as_millis() as u64)
}

fn timed_check(
    name: &'static str,
    check: impl FnOnce() -> Result<String, String>,
) -> SmokeCheck {
    let started = Instant::now();
    let outcome = check();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(message) => SmokeCheck { name, status: SmokeStatus::Pass, elapsed_ms, message },
        Err(message) => SmokeCheck { name, status: SmokeStatus::Fail, elapsed_ms, message },
    }
}

fn finalize_report(checks: Vec<SmokeCheck>, total_elapsed_ms: u64) -> CommandResult {
    let failed = checks.iter().filter(|check| check.status == SmokeStatus::Fail).count();
    let status = if failed == 0 { SmokeStatus::Pass } else { SmokeStatus::Fail };
    let summary = if failed == 0 {
        format!("{} checks passed", checks.len())
    } else {
        format!("{failed} of {} checks failed", checks.len())
    };

    let report = SmokeReport { command: "smoke", status, summary, total_elapsed_ms, checks };
    let output = serde_json::to_string(&report).unwrap_or_else(|error| {
        format!("{{\"command\":\"smoke\",\"status\":\"fail\",\"summary\":\"{error}\"}}")
    });

    CommandResult { exit_code: if failed == 0 { 0 } else { 1 }, output }
}
