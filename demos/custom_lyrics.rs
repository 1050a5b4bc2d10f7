//! Custom-mode example: generate a song from your own lyrics
//!
//! In custom mode the prompt is the literal lyrics, and style/title
//! (optionally vocal gender) steer the arrangement.

use suno_dl::config::{ApiConfig, Config};
use suno_dl::{GenerationRequest, SunoDownloader, VocalGender};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    let config = Config {
        api: ApiConfig {
            api_key: std::env::var("SUNO_API_KEY")?,
            ..Default::default()
        },
        ..Default::default()
    };

    let downloader = SunoDownloader::new(config)?;

    let lyrics = "\
[Verse 1]
Rain on the window, the kettle hums low
Maps on the table of places we'll go

[Chorus]
Pack nothing heavy, the road will provide
Every wrong turn is a story worth the ride
";

    let request = GenerationRequest {
        vocal_gender: Some(VocalGender::Female),
        ..GenerationRequest::custom(
            lyrics,
            "acoustic folk, warm fingerpicked guitar, soft brushed drums, intimate vocals",
            "Road Will Provide",
        )
    };

    let saved = downloader.generate(&request).await?;

    for entry in &saved {
        match &entry.path {
            Some(path) => println!("saved {}", path.display()),
            None => println!("{}: audio not rendered yet", entry.track.id),
        }
    }

    Ok(())
}
