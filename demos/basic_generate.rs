//! Basic generation example
//!
//! This example demonstrates the core functionality of suno-dl:
//! - Configuring the API credential
//! - Creating a downloader instance
//! - Subscribing to events
//! - Generating a song from a plain-language description
//! - Downloading the resulting audio

use suno_dl::config::{ApiConfig, Config};
use suno_dl::{Event, GenerationRequest, SunoDownloader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    // Build configuration; the API key must be supplied explicitly
    let config = Config {
        api: ApiConfig {
            api_key: std::env::var("SUNO_API_KEY")?,
            ..Default::default()
        },
        ..Default::default()
    };

    // Create downloader instance (validates the config up front)
    let downloader = SunoDownloader::new(config)?;

    // Subscribe to events
    let mut events = downloader.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                Event::TaskSubmitted { task_id } => {
                    println!("✓ Submitted task {}", task_id);
                }
                Event::StatusChecked { status, .. } => {
                    println!("  status: {}", status);
                }
                Event::GenerationComplete { track_count, .. } => {
                    println!("✓ Generation complete, {} track(s)", track_count);
                }
                Event::TrackSaved { id, path, .. } => {
                    println!("  saved {} -> {}", id, path.display());
                }
                Event::TrackSkipped { id, reason } => {
                    println!("  skipped {}: {}", id, reason);
                }
            }
        }
    });

    // Simple mode: the prompt describes the song you want
    let request = GenerationRequest::simple(
        "an upbeat synthwave track about driving through a neon city at night",
    );

    let saved = downloader.generate(&request).await?;

    println!("\nGenerated {} track(s):", saved.len());
    for entry in &saved {
        println!("\n  title:    {}", entry.track.display_title());
        println!("  tags:     {}", entry.track.tags.join(", "));
        if let Some(duration) = entry.track.duration {
            println!("  duration: {duration}s");
        }
        match &entry.path {
            Some(path) => println!("  file:     {}", path.display()),
            None => println!("  file:     (audio not rendered yet)"),
        }
    }

    Ok(())
}
