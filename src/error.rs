//! Error types for suno-dl
//!
//! This module provides the error taxonomy for the library:
//! - Configuration errors with context about which setting is invalid
//! - Transport failures (network errors, unparsable bodies)
//! - Service rejections carrying the envelope code and message
//! - Terminal generation failures and poll timeouts
//!
//! Every error is fatal to the current workflow invocation: there is no
//! internal retry or partial-result salvage. The first failure aborts the
//! run and is surfaced directly to the caller.

use std::time::Duration;
use thiserror::Error;

use crate::types::TaskId;

/// Result type alias for suno-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for suno-dl
///
/// This is the primary error type used throughout the library. Each variant
/// includes contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api.api_key")
        key: Option<String>,
    },

    /// Network/connection failure or unparsable response body
    ///
    /// Covers DNS, TLS, timeouts, and JSON bodies that fail to decode.
    /// Never retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but violates the service's envelope contract
    ///
    /// For example: envelope code 200 without a data payload, or a SUCCESS
    /// status without the track list. Treated as a transport-level fault.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The service rejected the call (envelope code != 200)
    ///
    /// Carries the service-provided message verbatim. Never retried; a
    /// rejected status query is treated as fatal, not transient.
    #[error("service rejected request (code {code}): {message}")]
    Service {
        /// Numeric envelope code returned by the service
        code: i64,
        /// Service-provided error message (authoritative for any non-200 code)
        message: String,
    },

    /// Generation reached a terminal FAILED/ERROR status
    ///
    /// The message may be absent; the service does not always provide
    /// detail, and callers must handle the `None` case.
    #[error("generation failed: {}", message.as_deref().unwrap_or("no detail provided"))]
    Generation {
        /// Optional error message reported by the service
        message: Option<String>,
    },

    /// Polling exceeded the configured bound without a terminal status
    ///
    /// Distinct from [`Error::Generation`]: a timeout means the outcome is
    /// unknown, not that the service reported a failure.
    #[error("timed out after {elapsed:?} waiting for task {task_id}")]
    Timeout {
        /// The task that was being polled
        task_id: TaskId,
        /// Wall-clock time spent polling before giving up
        elapsed: Duration,
    },

    /// I/O error while writing downloaded audio to disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
