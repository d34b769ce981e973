use std::io::Write;
use std::path::Path;

use satsuma_cli::commands::suggest::{self, SuggestArgs};
use satsuma_cli::commands::{smoke, summarize};
use satsuma_core::Tone;
use serde_json::Value;

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn write_temp_json(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{content}").expect("write temp json");
    file
}

fn suggest_args<'a>(message: &'a str, seed: u64) -> SuggestArgs<'a> {
    SuggestArgs { message, tone: None, summary_path: None, history_path: None, seed: Some(seed) }
}

#[test]
fn summarize_without_history_returns_neutral_empty_summary() {
    let result = summarize::run("taro", None);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "summarize");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["data"]["sentiment"], "neutral");
    assert_eq!(payload["data"]["customer_id"], "taro");
    assert!(payload["data"]["key_topics"].as_array().unwrap().is_empty());
    assert!(payload["data"]["purchase_history"].as_array().unwrap().is_empty());
}

#[test]
fn summarize_reads_history_file() {
    let file = write_temp_json(
        r#"[
            {"id":"1","content":"青島みかんを5kg注文したいです","category":"order","timestamp":"2024-01-01T09:00:00Z","sender":"customer"},
            {"id":"2","content":"贈答用の梱包でお願いします","category":"request","timestamp":"2024-01-02T09:00:00Z","sender":"customer"}
        ]"#,
    );

    let result = summarize::run("taro", Some(file.path()));
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let data = &payload["data"];
    assert_eq!(data["purchase_history"].as_array().unwrap().len(), 1);
    let topics = data["key_topics"].as_array().unwrap();
    assert!(topics.contains(&Value::String("packaging-interest".to_string())));
    let preferences = data["preferences"].as_array().unwrap();
    assert!(preferences.contains(&Value::String("gift-packaging".to_string())));
}

#[test]
fn summarize_rejects_unreadable_history_file() {
    let result = summarize::run("taro", Some(Path::new("/nonexistent/history.json")));
    assert_eq!(result.exit_code, 2);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "history_parse");
}

#[test]
fn suggest_returns_two_ranked_suggestions() {
    let result = suggest::run(suggest_args("青島みかんを5kg注文したいです", 7));
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let suggestions = payload["data"].as_array().unwrap();
    assert_eq!(suggestions.len(), 2);

    let first = suggestions[0]["confidence"].as_f64().unwrap();
    let second = suggestions[1]["confidence"].as_f64().unwrap();
    assert!(first >= second);

    for suggestion in suggestions {
        assert!(suggestion["content"].as_str().unwrap().contains("青島みかん"));
    }
}

#[test]
fn suggest_honors_preferred_tone() {
    let mut args = suggest_args("こんにちは", 7);
    args.tone = Some(Tone::Enthusiastic);

    let result = suggest::run(args);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let suggestions = payload["data"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["tone"], "enthusiastic");
}

#[test]
fn suggest_with_summary_file_boosts_confidence() {
    let summary = write_temp_json(
        r#"{
            "id":"7f1f35c0-2c9b-4f64-9f6a-2a64a2fb3a10",
            "customer_id":"taro",
            "key_topics":["packaging-interest"],
            "sentiment":"positive",
            "purchase_history":["青島みかん5kg"],
            "preferences":["gift-packaging"],
            "last_updated":"2024-01-02T09:00:00Z"
        }"#,
    );

    let mut args = suggest_args("青島みかんを5kg注文したいです", 7);
    args.summary_path = Some(summary.path());

    let result = suggest::run(args);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    for suggestion in payload["data"].as_array().unwrap() {
        assert_eq!(suggestion["confidence"].as_f64().unwrap(), 1.0);
        assert!(suggestion["reasoning"].as_str().unwrap().contains("顧客コンテキストを考慮"));
    }
}

#[test]
fn suggest_is_reproducible_under_a_fixed_seed() {
    let first = suggest::run(suggest_args("青島みかんを5kg注文したいです", 42));
    let second = suggest::run(suggest_args("青島みかんを5kg注文したいです", 42));

    let first_data = parse_payload(&first.output)["data"].clone();
    let second_data = parse_payload(&second.output)["data"].clone();

    let strip_ids = |data: &Value| -> Vec<(String, String, String)> {
        data.as_array()
            .unwrap()
            .iter()
            .map(|suggestion| {
                (
                    suggestion["content"].as_str().unwrap().to_string(),
                    suggestion["tone"].as_str().unwrap().to_string(),
                    suggestion["reasoning"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    };

    assert_eq!(strip_ids(&first_data), strip_ids(&second_data));
}

#[test]
fn smoke_passes_on_bundled_fixtures() {
    let result = smoke::run();
    assert_eq!(result.exit_code, 0, "smoke output: {}", result.output);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "smoke");
    assert_eq!(payload["status"], "pass");
    assert_eq!(payload["checks"].as_array().unwrap().len(), 4);
}
