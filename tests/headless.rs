//! Headless runner tests: NDJSON output for one submission
//!
//! Run with: cargo test --test headless

use std::time::Duration;

use stressmark::headless::runner::run_headless_with_output;
use stressmark::OutputFormat;
use stressmark_app::config::Settings;
use stressmark_app::Engine;
use stressmark_client::test_utils::{FakeReply, FakeStressService};
use stressmark_core::stress::nested;
use stressmark_core::RequestFailure;

async fn run(
    service: &FakeStressService,
    text: &str,
    format: OutputFormat,
) -> (bool, Vec<serde_json::Value>) {
    let engine = Engine::new(Settings::default(), service.clone());
    let mut out = Vec::new();

    let ok = tokio::time::timeout(
        Duration::from_secs(5),
        run_headless_with_output(engine, text.to_string(), format, &mut out),
    )
    .await
    .expect("headless run timed out")
    .expect("headless run failed");

    let events = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    (ok, events)
}

#[tokio::test]
async fn test_success_emits_submitted_then_result() {
    let service = FakeStressService::new();
    service.push_ok(nested(&[&[&["a b"]]]));

    let (ok, events) = run(&service, "a b", OutputFormat::Json).await;

    assert!(ok);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "submitted");
    assert_eq!(events[0]["chars"], 3);
    assert_eq!(events[1]["event"], "result");
    assert_eq!(events[1]["request_id"], 1);
    assert_eq!(events[1]["lines"], serde_json::json!([[["a\u{00A0}b"]]]));
}

#[tokio::test]
async fn test_text_is_sent_untrimmed() {
    let service = FakeStressService::new();
    service.push_ok(nested(&[]));

    run(&service, "  line one\nline two\n", OutputFormat::Json).await;

    assert_eq!(service.requests()[0].text, "  line one\nline two\n");
}

#[tokio::test]
async fn test_text_format_joins_words() {
    let service = FakeStressService::new();
    service.push_ok(nested(&[&[&["sto", "ry"], &["x  y"]], &[]]));

    let (ok, events) = run(&service, "story x  y\n", OutputFormat::Text).await;

    assert!(ok);
    assert_eq!(
        events[1]["text"],
        serde_json::json!(["story x\u{00A0}\u{00A0}y", ""])
    );
    assert!(events[1].get("lines").is_none());
}

#[tokio::test]
async fn test_failure_emits_request_failed() {
    let service = FakeStressService::new();
    service.push(
        Duration::from_millis(20),
        FakeReply::Fail(RequestFailure::Status(503)),
    );

    let (ok, events) = run(&service, "text", OutputFormat::Json).await;

    assert!(!ok);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1]["event"], "request_failed");
    assert_eq!(events[1]["kind"], "HTTP 503");
}

#[tokio::test]
async fn test_failure_reported_even_when_errors_hidden() {
    let service = FakeStressService::new();
    service.push_fail(RequestFailure::Transport);

    let mut settings = Settings::default();
    settings.behavior.show_errors = false;
    let engine = Engine::new(settings, service);
    let mut out = Vec::new();

    let ok = run_headless_with_output(engine, String::new(), OutputFormat::Json, &mut out)
        .await
        .unwrap();

    assert!(!ok);
    assert!(String::from_utf8(out).unwrap().contains("request_failed"));
}
