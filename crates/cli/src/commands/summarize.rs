use std::path::Path;

use anyhow::Context;
use satsuma_core::{CustomerId, Message, ProfileSummarizer};
use tracing::debug;

use crate::commands::CommandResult;

pub fn run(customer: &str, history_path: Option<&Path>) -> CommandResult {
    let history = match history_path {
        Some(path) => match load_history(path) {
            Ok(messages) => messages,
            Err(error) => {
                return CommandResult::failure("summarize", "history_parse", format!("{error:#}"), 2)
            }
        },
        None => Vec::new(),
    };

    debug!(event_name = "cli.summarize.history_loaded", message_count = history.len());

    let summary =
        ProfileSummarizer::new().generate(&CustomerId(customer.to_string()), &history);

    match serde_json::to_value(&summary) {
        Ok(data) => CommandResult::success(
            "summarize",
            format!("summary generated from {} message(s)", history.len()),
            Some(data),
        ),
        Err(error) => CommandResult::failure("summarize", "serialization", error.to_string(), 1),
    }
}

pub(crate) fn load_history(path: &Path) -> anyhow::Result<Vec<Message>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading history file {}", path.display()))?;
    let messages = serde_json::from_str(&raw)
        .with_context(|| format!("parsing history file {}", path.display()))?;
    Ok(messages)
}
