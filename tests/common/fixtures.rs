//! Fixture helpers: mock API bodies and preconfigured downloaders

use std::path::Path;
use std::time::Duration;
use suno_dl::config::{ApiConfig, Config, DownloadConfig, PollingConfig};
use suno_dl::SunoDownloader;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a downloader pointed at a mock server, with fast polling
pub fn mock_downloader(server: &MockServer, download_dir: &Path) -> SunoDownloader {
    SunoDownloader::new(Config {
        api: ApiConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            ..Default::default()
        },
        download: DownloadConfig {
            download_dir: download_dir.to_path_buf(),
        },
        polling: PollingConfig {
            poll_interval: Duration::from_millis(25),
            completion_timeout: Duration::from_secs(5),
        },
    })
    .expect("test config must validate")
}

/// Envelope for a successful submission
pub fn submit_ok_body(task_id: &str) -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "msg": "success",
        "data": { "taskId": task_id }
    })
}

/// Envelope for an in-progress record-info response
pub fn record_info_pending_body(task_id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "msg": "success",
        "data": { "taskId": task_id, "status": status }
    })
}

/// Envelope for a successful record-info response with the given tracks
pub fn record_info_success_body(
    task_id: &str,
    tracks: Vec<serde_json::Value>,
) -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "msg": "success",
        "data": {
            "taskId": task_id,
            "status": "SUCCESS",
            "response": { "sunoData": tracks }
        }
    })
}

/// A track record with a downloadable audio URL on the mock server
pub fn track_with_audio(server: &MockServer, id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "tags": ["test"],
        "duration": 120.5,
        "audioUrl": format!("{}/audio/{id}.mp3", server.uri())
    })
}

/// A track record whose audio has not been rendered yet (no audioUrl)
pub fn track_without_audio(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "tags": [],
        "duration": 0
    })
}

/// Serve fixed audio bytes for a track id
pub async fn mount_audio(server: &MockServer, id: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/audio/{id}.mp3")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(server)
        .await;
}

/// Whether live-API credentials are available in the environment
pub fn has_live_credentials() -> bool {
    dotenvy::dotenv().ok();
    std::env::var("SUNO_API_KEY").is_ok_and(|k| !k.trim().is_empty())
}
