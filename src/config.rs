//! Configuration types for suno-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Service endpoint and credential configuration
///
/// Groups settings for reaching the generation API. Used as a nested
/// sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the generation API (default: "https://api.sunoapi.org/api/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API credential, sent as a bearer token on every call
    ///
    /// There is intentionally no built-in fallback value: the key must be
    /// set explicitly (or via [`Config::from_env`]), and
    /// [`Config::validate`] fails fast when it is empty.
    #[serde(default)]
    pub api_key: String,

    /// Callback URL sent with every generation request
    ///
    /// The service contract requires one, but this library never listens on
    /// it; completion is observed by polling. A dummy URL is fine
    /// (default: "https://example.com/callback").
    #[serde(default = "default_callback_url")]
    pub callback_url: String,

    /// Per-request timeout for API calls and audio fetches (default: 30s)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            callback_url: default_callback_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Download behavior configuration
///
/// Groups settings for where generated audio lands on disk. Used as a
/// nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DownloadConfig {
    /// Download directory (default: "./downloads"), created on demand
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
        }
    }
}

/// Polling behavior configuration
///
/// Groups settings for the completion poll loop. Used as a nested
/// sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PollingConfig {
    /// Fixed interval between status queries (default: 10s)
    ///
    /// There is no backoff or jitter: every tick sleeps exactly this long.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: Duration,

    /// Wall-clock bound on the whole poll loop (default: 300s)
    ///
    /// Checked once per tick boundary, not preemptively mid-sleep, so the
    /// actual elapsed time may exceed the bound by up to one interval.
    #[serde(default = "default_completion_timeout")]
    pub completion_timeout: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
            completion_timeout: default_completion_timeout(),
        }
    }
}

/// Main configuration for [`SunoDownloader`](crate::SunoDownloader)
///
/// All fields have sensible defaults except the API key, which must be
/// supplied explicitly. Construct with struct-update syntax:
///
/// ```
/// use suno_dl::config::{ApiConfig, Config};
///
/// let config = Config {
///     api: ApiConfig {
///         api_key: "your-api-key".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Service endpoint and credential settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Download directory settings
    #[serde(default)]
    pub download: DownloadConfig,

    /// Poll interval and timeout settings
    #[serde(default)]
    pub polling: PollingConfig,
}

impl Config {
    /// Build a configuration from environment variables
    ///
    /// Reads `SUNO_API_KEY` (required for a usable config: validation
    /// fails if unset) plus the optional overrides `SUNO_API_BASE_URL`,
    /// `SUNO_CALLBACK_URL` and `SUNO_DOWNLOAD_DIR` on top of the defaults.
    /// No fallback credential exists: an unset `SUNO_API_KEY` leaves the
    /// key empty and [`validate`](Self::validate) rejects the config.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(key) = std::env::var("SUNO_API_KEY") {
            config.api.api_key = key;
        }
        if let Ok(base_url) = std::env::var("SUNO_API_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Ok(callback_url) = std::env::var("SUNO_CALLBACK_URL") {
            config.api.callback_url = callback_url;
        }
        if let Ok(dir) = std::env::var("SUNO_DOWNLOAD_DIR") {
            config.download.download_dir = PathBuf::from(dir);
        }

        config
    }

    /// Validate the configuration, failing fast on unusable values
    ///
    /// Called by [`SunoDownloader::new`](crate::SunoDownloader::new) before
    /// any network activity. Checks:
    /// - the API key is set (no silent placeholder credential)
    /// - `base_url` and `callback_url` parse as URLs
    /// - the poll interval and completion timeout are non-zero
    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.trim().is_empty() {
            return Err(Error::Config {
                message: "api key is not set; supply one explicitly or via SUNO_API_KEY"
                    .to_string(),
                key: Some("api.api_key".to_string()),
            });
        }

        if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(Error::Config {
                message: format!("invalid base URL '{}': {e}", self.api.base_url),
                key: Some("api.base_url".to_string()),
            });
        }

        if let Err(e) = url::Url::parse(&self.api.callback_url) {
            return Err(Error::Config {
                message: format!("invalid callback URL '{}': {e}", self.api.callback_url),
                key: Some("api.callback_url".to_string()),
            });
        }

        if self.polling.poll_interval.is_zero() {
            return Err(Error::Config {
                message: "poll interval must be non-zero".to_string(),
                key: Some("polling.poll_interval".to_string()),
            });
        }

        if self.polling.completion_timeout.is_zero() {
            return Err(Error::Config {
                message: "completion timeout must be non-zero".to_string(),
                key: Some("polling.completion_timeout".to_string()),
            });
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.sunoapi.org/api/v1".to_string()
}

fn default_callback_url() -> String {
    "https://example.com/callback".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("./downloads")
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(10)
}

fn default_completion_timeout() -> Duration {
    Duration::from_secs(300)
}
