use std::time::Duration;

use deck_engine::{ApiSettings, EngineEvent, EngineHandle};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        feed_base: server.uri(),
        oracle_base: server.uri(),
        ..ApiSettings::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_page_round_trips_through_the_handle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "J1", "company": "Acme", "title": "Engineer", "description": "d" }],
            "nextOffset": 12
        })))
        .mount(&server)
        .await;

    let (handle, events) = EngineHandle::spawn(settings_for(&server));
    handle.fetch_page(0, 12);

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    match event {
        EngineEvent::PageLoaded { page } => {
            assert_eq!(page.next_offset, 12);
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.items[0].id, "J1");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_fetch_reports_page_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (handle, events) = EngineHandle::spawn(settings_for(&server));
    handle.fetch_page(0, 12);

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert!(matches!(event, EngineEvent::PageFailed { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn cancelled_score_emits_no_event() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({ "score": 0.5, "percent": "50%" })),
        )
        .mount(&server)
        .await;

    let (handle, events) = EngineHandle::spawn(settings_for(&server));
    handle.score(1, "jd text", "cv text");
    handle.cancel_score(1);

    assert!(events.recv_timeout(Duration::from_millis(900)).is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn superseding_score_settles_only_the_latest_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_string_contains("first draft"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(600))
                .set_body_json(json!({ "score": 0.1, "percent": "10%" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_string_contains("second draft"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "score": 0.9, "percent": "90%" })),
        )
        .mount(&server)
        .await;

    let (handle, events) = EngineHandle::spawn(settings_for(&server));
    handle.score(1, "jd text", "first draft");
    handle.score(2, "jd text", "second draft");

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    match event {
        EngineEvent::ScoreSettled { request_id, result } => {
            assert_eq!(request_id, 2);
            assert_eq!(result.expect("outcome").percent, "90%");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // The superseded request must never settle.
    assert!(events.recv_timeout(Duration::from_millis(800)).is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn decision_recording_is_fire_and_forget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/decisions"))
        .and(body_string_contains("J1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (handle, events) = EngineHandle::spawn(settings_for(&server));
    handle.record("J1", "apply");

    // No event surfaces either way; give the request time to land before the
    // mock server verifies its expectation on drop.
    assert!(events.recv_timeout(Duration::from_millis(500)).is_err());
}
