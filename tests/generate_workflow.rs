//! End-to-end workflow tests against a mock API server
//!
//! Exercises the full submit → poll → download pipeline the way a consumer
//! drives it, with wiremock standing in for the generation service.

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{
    mock_downloader, mount_audio, record_info_pending_body, record_info_success_body,
    submit_ok_body, track_with_audio, track_without_audio,
};
use suno_dl::{Error, Event, GenerationRequest, TaskStatus};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn full_workflow_downloads_rendered_tracks_and_skips_pending_ones() {
    let server = MockServer::start().await;
    let audio = b"ID3\x04 full workflow mp3 bytes".to_vec();

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submit_ok_body("task-77")))
        .expect(1)
        .mount(&server)
        .await;

    // Status sequence: PENDING, TEXT_SUCCESS, then SUCCESS with two tracks
    Mock::given(method("GET"))
        .and(path("/generate/record-info"))
        .and(query_param("taskId", "task-77"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(record_info_pending_body("task-77", "PENDING")),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/generate/record-info"))
        .and(query_param("taskId", "task-77"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(record_info_pending_body("task-77", "TEXT_SUCCESS")),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/generate/record-info"))
        .and(query_param("taskId", "task-77"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(record_info_success_body(
                "task-77",
                vec![
                    track_with_audio(&server, "aaaa1111bbbb", "Rainy Night"),
                    track_without_audio("cccc2222dddd", "Still Rendering"),
                ],
            )),
        )
        .mount(&server)
        .await;

    mount_audio(&server, "aaaa1111bbbb", &audio).await;

    let temp = TempDir::new().unwrap();
    let downloader = mock_downloader(&server, temp.path());
    let mut events = downloader.subscribe();

    let saved = downloader
        .generate(&GenerationRequest::simple("a song about rain"))
        .await
        .unwrap();

    // One rendered track saved, one URL-less track skipped
    assert_eq!(saved.len(), 2);
    let rendered = &saved[0];
    assert_eq!(rendered.track.id, "aaaa1111bbbb");
    let saved_path = rendered.path.as_ref().unwrap();
    assert_eq!(saved_path, &temp.path().join("Rainy Night_aaaa1111.mp3"));
    assert_eq!(std::fs::read(saved_path).unwrap(), audio);

    let skipped = &saved[1];
    assert_eq!(skipped.track.id, "cccc2222dddd");
    assert!(skipped.path.is_none());
    assert!(
        !temp.path().join("Still Rendering_cccc2222.mp3").exists(),
        "skipped track must not produce a file"
    );

    // Event stream mirrors the workflow stages in order
    assert!(matches!(
        events.try_recv().unwrap(),
        Event::TaskSubmitted { ref task_id } if task_id.as_str() == "task-77"
    ));
    assert!(matches!(
        events.try_recv().unwrap(),
        Event::StatusChecked { status: TaskStatus::Pending, .. }
    ));
    assert!(matches!(
        events.try_recv().unwrap(),
        Event::StatusChecked { status: TaskStatus::TextSuccess, .. }
    ));
    assert!(matches!(
        events.try_recv().unwrap(),
        Event::StatusChecked { status: TaskStatus::Success, .. }
    ));
    assert!(matches!(
        events.try_recv().unwrap(),
        Event::GenerationComplete { track_count: 2, .. }
    ));
    assert!(matches!(events.try_recv().unwrap(), Event::TrackSaved { .. }));
    assert!(matches!(events.try_recv().unwrap(), Event::TrackSkipped { .. }));
}

#[tokio::test]
async fn rejected_submission_aborts_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 401,
            "msg": "unauthorized"
        })))
        .expect(1)
        .mount(&server)
        .await;
    // No record-info mock: a rejected submission must never reach polling

    let temp = TempDir::new().unwrap();
    let downloader = mock_downloader(&server, temp.path());

    let err = downloader
        .generate(&GenerationRequest::simple("a song"))
        .await
        .unwrap_err();

    match err {
        Error::Service { code, message } => {
            assert_eq!(code, 401);
            assert_eq!(message, "unauthorized");
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn terminal_failure_aborts_before_any_download() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submit_ok_body("task-9")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/generate/record-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "msg": "success",
            "data": {
                "taskId": "task-9",
                "status": "FAILED",
                "errorMessage": "quota exceeded"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let downloader = mock_downloader(&server, temp.path());

    let err = downloader
        .generate(&GenerationRequest::simple("a song"))
        .await
        .unwrap_err();

    match err {
        Error::Generation { message } => assert_eq!(message.as_deref(), Some("quota exceeded")),
        other => panic!("expected Generation error, got {other:?}"),
    }
    assert_eq!(
        std::fs::read_dir(temp.path()).unwrap().count(),
        0,
        "a failed generation must not leave files behind"
    );
}

#[tokio::test]
async fn failed_audio_fetch_aborts_the_remaining_downloads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submit_ok_body("task-3")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/generate/record-info"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(record_info_success_body(
                "task-3",
                vec![
                    track_with_audio(&server, "eeee3333ffff", "Broken Link"),
                    track_with_audio(&server, "gggg4444hhhh", "Never Reached"),
                ],
            )),
        )
        .mount(&server)
        .await;
    // Only the second track's audio exists; the first 404s
    mount_audio(&server, "gggg4444hhhh", b"bytes").await;

    let temp = TempDir::new().unwrap();
    let downloader = mock_downloader(&server, temp.path());

    let err = downloader
        .generate(&GenerationRequest::simple("a song"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    assert!(
        !temp.path().join("Never Reached_gggg4444.mp3").exists(),
        "the run aborts on the first fetch failure; later tracks are not attempted"
    );
}

#[tokio::test]
async fn custom_mode_request_reaches_the_wire_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "customMode": true,
            "instrumental": false,
            "prompt": "[Verse 1]\nFirst line",
            "style": "okinawan folk",
            "title": "Island Song",
            "vocalGender": "m"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(submit_ok_body("task-c")))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let downloader = mock_downloader(&server, temp.path());

    let request = suno_dl::GenerationRequest {
        vocal_gender: Some(suno_dl::VocalGender::Male),
        ..GenerationRequest::custom("[Verse 1]\nFirst line", "okinawan folk", "Island Song")
    };
    let task_id = downloader.submit(&request).await.unwrap();
    assert_eq!(task_id.as_str(), "task-c");
}
