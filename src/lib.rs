//! # suno-dl
//!
//! Client library for the Suno music generation API: submit a generation
//! request, poll for completion, download the resulting audio.
//!
//! ## Design Philosophy
//!
//! suno-dl is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - Only the API key needs explicit configuration
//! - **Deliberately sequential** - One task at a time: submit, poll, download
//! - **Event-driven** - Consumers subscribe to progress events
//!
//! ## Quick Start
//!
//! ```no_run
//! use suno_dl::{Config, GenerationRequest, SunoDownloader};
//! use suno_dl::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         api: ApiConfig {
//!             api_key: std::env::var("SUNO_API_KEY")?,
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!
//!     let downloader = SunoDownloader::new(config)?;
//!
//!     // Subscribe to events
//!     let mut events = downloader.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {:?}", event);
//!         }
//!     });
//!
//!     let request = GenerationRequest::simple("a mellow lo-fi track about rain");
//!     let saved = downloader.generate(&request).await?;
//!     println!("downloaded {} track(s)", saved.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST client for the generation API
pub mod client;
/// Configuration types
pub mod config;
/// Core workflow orchestration (submit, poll, download)
pub mod downloader;
/// Error types
pub mod error;
/// Core types and events
pub mod types;
/// Utility functions for file naming
pub mod utils;

// Re-export commonly used types
pub use client::SunoClient;
pub use config::{ApiConfig, Config, DownloadConfig, PollingConfig};
pub use downloader::SunoDownloader;
pub use error::{Error, Result};
pub use types::{
    Event, GenerationRequest, RecordInfo, ResponseEnvelope, SavedTrack, TaskId, TaskStatus, Track,
    VocalGender,
};
