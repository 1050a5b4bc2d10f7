//! Core types for suno-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default model tag sent when a request does not specify one
pub const DEFAULT_MODEL: &str = "V4_5ALL";

/// Unique identifier for a generation task
///
/// Opaque string assigned by the service on submission. Owned by the caller
/// for the lifetime of the polling loop; it is not reused or cached.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    /// Create a new TaskId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation task status as reported by the service
///
/// The service reports progress through a string status field. Known
/// in-progress values are modeled explicitly; anything unrecognized is
/// preserved in [`TaskStatus::Unknown`] and treated as still in progress,
/// so a status value this library has never seen keeps the poll loop
/// running until the timeout rather than failing outright.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TaskStatus {
    /// Queued, generation not started
    Pending,
    /// Lyrics/text stage finished, audio still rendering
    TextSuccess,
    /// First track rendered, remaining tracks still in progress
    FirstSuccess,
    /// All tracks rendered; the track list is available
    Success,
    /// Generation failed
    Failed,
    /// Generation hit an internal service error
    Error,
    /// Any status value this library does not recognize (raw value preserved)
    Unknown(String),
}

impl TaskStatus {
    /// Whether this status ends the polling loop
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Success | TaskStatus::Failed | TaskStatus::Error)
    }

    /// The wire representation of this status
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::TextSuccess => "TEXT_SUCCESS",
            TaskStatus::FirstSuccess => "FIRST_SUCCESS",
            TaskStatus::Success => "SUCCESS",
            TaskStatus::Failed => "FAILED",
            TaskStatus::Error => "ERROR",
            TaskStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PENDING" => TaskStatus::Pending,
            "TEXT_SUCCESS" => TaskStatus::TextSuccess,
            "FIRST_SUCCESS" => TaskStatus::FirstSuccess,
            "SUCCESS" => TaskStatus::Success,
            "FAILED" => TaskStatus::Failed,
            "ERROR" => TaskStatus::Error,
            _ => TaskStatus::Unknown(s),
        }
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vocal gender hint for custom-mode requests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VocalGender {
    /// Male vocals
    #[serde(rename = "m")]
    Male,
    /// Female vocals
    #[serde(rename = "f")]
    Female,
}

/// A music generation request
///
/// Created once per invocation and immutable after construction. In custom
/// mode the prompt is interpreted as literal lyrics; in simple mode it is a
/// natural-language description of the song. The optional fields are only
/// meaningful in custom mode but always pass through unmodified when set;
/// the service decides what to do with them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Custom mode: prompt is lyrics. Simple mode: prompt is a description
    pub custom_mode: bool,

    /// Suppress vocals, generate an instrumental track
    pub instrumental: bool,

    /// Service model tag (e.g. "V4_5ALL"); the value space is service-defined
    pub model: String,

    /// Lyrics (custom mode) or song description (simple mode)
    pub prompt: String,

    /// Musical style description (custom mode)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub style: Option<String>,

    /// Song title (custom mode)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    /// Vocal gender hint (custom mode)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vocal_gender: Option<VocalGender>,

    /// Callback URL, mandatory per the service contract
    ///
    /// The service requires one even though this library never receives on
    /// it; completion is observed by polling. Left `None`, the configured
    /// callback URL is filled in at submission time.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub call_back_url: Option<String>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            custom_mode: false,
            instrumental: false,
            model: DEFAULT_MODEL.to_string(),
            prompt: String::new(),
            style: None,
            title: None,
            vocal_gender: None,
            call_back_url: None,
        }
    }
}

impl GenerationRequest {
    /// Build a simple-mode request: the prompt describes the desired song
    pub fn simple(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Build a custom-mode request: the prompt is the literal lyrics
    pub fn custom(
        lyrics: impl Into<String>,
        style: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            custom_mode: true,
            prompt: lyrics.into(),
            style: Some(style.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// A generated track (one artifact of a successful task)
///
/// Immutable once obtained. The audio URL may be absent if the track has
/// not finished rendering; some pipelines finalize metadata before audio.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Service-assigned track identifier
    pub id: String,

    /// Track title (may be absent or empty)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    /// Style tags attached to the track
    #[serde(default)]
    pub tags: Vec<String>,

    /// Track length in seconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration: Option<f64>,

    /// Download URL for the rendered audio (absent until rendered)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub audio_url: Option<String>,

    /// Streaming URL, available earlier than the download URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stream_audio_url: Option<String>,

    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,

    /// Model that rendered this track
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model_name: Option<String>,

    /// Creation timestamp as reported by the service (passed through verbatim)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub create_time: Option<String>,
}

impl Track {
    /// The display title, falling back to the track id when absent or blank
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => &self.id,
        }
    }
}

/// Track list embedded in a successful record-info payload
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    /// The generated tracks
    #[serde(rename = "sunoData", default)]
    pub suno_data: Vec<Track>,
}

/// Status payload returned by the record-info endpoint
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordInfo {
    /// The task this record describes
    pub task_id: TaskId,

    /// Current task status
    pub status: TaskStatus,

    /// Error detail for FAILED/ERROR statuses (may be absent)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,

    /// Present once status reaches SUCCESS
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response: Option<GenerationResult>,
}

/// Payload of a successful submission
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitData {
    /// Server-assigned identifier for the queued task
    pub task_id: TaskId,
}

/// Envelope wrapping every service response
///
/// Invariant: code 200 implies the data payload is present; any other code
/// means [`msg`](Self::msg) is authoritative and the call failed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResponseEnvelope<T> {
    /// Numeric status code (200 = success)
    pub code: i64,

    /// Service-provided message, authoritative for non-200 codes
    #[serde(default)]
    pub msg: String,

    /// Payload, present when code is 200
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Unwrap the envelope into its payload
    ///
    /// Returns [`Error::Service`](crate::Error::Service) for non-200 codes
    /// and [`Error::MalformedResponse`](crate::Error::MalformedResponse)
    /// when a 200 envelope arrives without data. `context` names the call
    /// for the malformed-response message.
    pub fn into_data(self, context: &str) -> crate::Result<T> {
        if self.code != 200 {
            return Err(crate::Error::Service {
                code: self.code,
                message: self.msg,
            });
        }
        self.data.ok_or_else(|| {
            crate::Error::MalformedResponse(format!("{context}: envelope code 200 without data"))
        })
    }
}

/// A track paired with where (or whether) its audio landed on disk
///
/// `path` is `None` when the track was skipped because no audio URL was
/// available yet: a notice, not an error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SavedTrack {
    /// The track metadata as returned by the service
    pub track: Track,
    /// Local path of the written audio file, if any
    pub path: Option<PathBuf>,
}

/// Progress events emitted while a generation workflow runs
///
/// Broadcast to all subscribers; slow subscribers may miss events (the
/// channel is lossy), so events carry identifying context rather than
/// relying on ordering.
#[derive(Clone, Debug, Serialize)]
pub enum Event {
    /// Task accepted by the service
    TaskSubmitted {
        /// Task ID returned by the service
        task_id: TaskId,
    },

    /// One poll tick completed
    StatusChecked {
        /// Task being polled
        task_id: TaskId,
        /// Status observed on this tick
        status: TaskStatus,
    },

    /// Task reached SUCCESS
    GenerationComplete {
        /// Task that completed
        task_id: TaskId,
        /// Number of tracks in the result
        track_count: usize,
    },

    /// A track's audio was written to disk
    TrackSaved {
        /// Track identifier
        id: String,
        /// Track title, if any
        title: Option<String>,
        /// Local file path
        path: PathBuf,
    },

    /// A track was skipped (no audio URL available yet)
    TrackSkipped {
        /// Track identifier
        id: String,
        /// Why the track was skipped
        reason: String,
    },
}
