//! End-to-end submission flow through the Engine with a scripted service
//!
//! Run with: cargo test --test engine_flow

use std::time::Duration;

use stressmark_app::config::{load_settings, Settings};
use stressmark_app::message::Message;
use stressmark_app::{Engine, InputKey};
use stressmark_client::test_utils::FakeStressService;
use stressmark_core::stress::nested;
use stressmark_core::{RenderedResult, RequestFailure, WhitespaceMarker};

fn engine_with(service: &FakeStressService) -> Engine<FakeStressService> {
    Engine::new(Settings::default(), service.clone())
}

/// Process channel messages until no request is in flight
async fn settle(engine: &mut Engine<FakeStressService>) {
    while engine.state.submissions.is_busy() {
        let msg = tokio::time::timeout(Duration::from_secs(2), engine.next_message())
            .await
            .expect("timed out waiting for the service")
            .expect("message channel closed");
        engine.process_message(msg);
    }
}

fn type_keys(engine: &mut Engine<FakeStressService>, text: &str) {
    for c in text.chars() {
        engine.process_message(Message::Key(InputKey::Char(c)));
    }
}

fn shown(engine: &Engine<FakeStressService>) -> Option<serde_json::Value> {
    engine
        .state
        .results
        .get()
        .map(|r: &RenderedResult| serde_json::to_value(r).expect("serializable"))
}

#[tokio::test]
async fn test_space_inside_token_is_marked() {
    let service = FakeStressService::new();
    service.push_ok(nested(&[&[&["a b"]]]));
    let mut engine = engine_with(&service);

    type_keys(&mut engine, "a b");
    engine.process_message(Message::Key(InputKey::CharCtrl('s')));
    settle(&mut engine).await;

    assert_eq!(service.requests()[0].text, "a b");
    assert_eq!(shown(&engine), Some(serde_json::json!([[["a\u{00A0}b"]]])));
}

#[tokio::test]
async fn test_every_space_is_marked() {
    let service = FakeStressService::new();
    service.push_ok(nested(&[&[&["x  y"]]]));
    let mut engine = engine_with(&service);

    engine.process_message(Message::Key(InputKey::F(5)));
    settle(&mut engine).await;

    assert_eq!(
        shown(&engine),
        Some(serde_json::json!([[["x\u{00A0}\u{00A0}y"]]]))
    );
}

#[tokio::test]
async fn test_failure_leaves_display_unchanged() {
    let service = FakeStressService::new();
    service
        .push_ok(nested(&[&[&["kept"], &["as", "is"]], &[]]))
        .push_fail(RequestFailure::Status(500))
        .push_fail(RequestFailure::Transport)
        .push_fail(RequestFailure::Decode);
    let mut engine = engine_with(&service);

    engine.process_message(Message::Submit);
    settle(&mut engine).await;
    let before = shown(&engine);
    assert!(before.is_some());

    for _ in 0..3 {
        engine.process_message(Message::Submit);
        settle(&mut engine).await;
        assert_eq!(shown(&engine), before);
    }
    assert_eq!(engine.state.results.generation(), 1);
}

#[tokio::test]
async fn test_failure_before_first_success_shows_nothing() {
    let service = FakeStressService::new();
    service.push_fail(RequestFailure::Timeout);
    let mut engine = engine_with(&service);

    engine.process_message(Message::Submit);
    settle(&mut engine).await;

    assert_eq!(shown(&engine), None);
    assert!(engine.state.submissions.last_failure.is_some());
}

#[tokio::test]
async fn test_empty_input_is_submitted_verbatim() {
    let service = FakeStressService::new();
    service.push_ok(nested(&[]));
    let mut engine = engine_with(&service);

    engine.process_message(Message::Submit);
    settle(&mut engine).await;

    assert_eq!(service.requests()[0].text, "");
    assert_eq!(shown(&engine), Some(serde_json::json!([])));
}

#[tokio::test]
async fn test_settings_file_selects_marker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[render]\nmarker = \"html_entity\"\n").unwrap();

    let settings = load_settings(&path);
    assert_eq!(settings.render.marker, WhitespaceMarker::HtmlEntity);

    let service = FakeStressService::new();
    service.push_ok(nested(&[&[&["a b"]]]));
    let mut engine = Engine::new(settings, service);

    engine.process_message(Message::Submit);
    settle(&mut engine).await;

    assert_eq!(shown(&engine), Some(serde_json::json!([[["a&nbsp;b"]]])));
}
