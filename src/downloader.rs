//! Core workflow orchestration: submit, poll, download
//!
//! [`SunoDownloader`] owns the whole generation workflow. Each invocation is
//! strictly sequential: one task is submitted, polled to completion, and its
//! tracks downloaded one after another. There is no job queue, no concurrent
//! multi-task management, and no retry: the first fatal error aborts the
//! run. Consumers observe progress through the broadcast event channel.

use crate::client::SunoClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Event, GenerationRequest, SavedTrack, TaskId, TaskStatus, Track};
use crate::utils;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::{Instant, sleep};
use tracing::{debug, error, info, warn};

/// Event channel capacity; slow subscribers miss events beyond this backlog
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Main downloader instance (cloneable - shared state is Arc-wrapped)
///
/// ```no_run
/// use suno_dl::{Config, GenerationRequest, SunoDownloader};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let downloader = SunoDownloader::new(Config::from_env())?;
///
/// let request = GenerationRequest::simple("an upbeat synthwave track");
/// let saved = downloader.generate(&request).await?;
///
/// for entry in saved {
///     match entry.path {
///         Some(path) => println!("saved {}", path.display()),
///         None => println!("{} has no audio yet", entry.track.id),
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SunoDownloader {
    /// Configuration (wrapped in Arc for sharing across clones)
    config: Arc<Config>,
    /// REST client for the generation API
    client: SunoClient,
    /// Event broadcast channel sender (multiple subscribers supported)
    event_tx: tokio::sync::broadcast::Sender<Event>,
}

impl SunoDownloader {
    /// Create a new downloader instance
    ///
    /// Validates the configuration before anything else, so a missing API key
    /// or unusable URL fails here with [`Error::Config`], not on the first
    /// network call.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = SunoClient::new(&config.api)?;
        let (event_tx, _) = tokio::sync::broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            config: Arc::new(config),
            client,
            event_tx,
        })
    }

    /// Subscribe to workflow progress events
    ///
    /// Each call returns an independent receiver. The channel is lossy:
    /// a subscriber that falls more than the channel capacity behind
    /// misses the oldest events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// The configuration this downloader was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full workflow: submit, wait for completion, download tracks
    ///
    /// Convenience wrapper over [`submit`](Self::submit),
    /// [`wait_for_completion`](Self::wait_for_completion) and
    /// [`download_all`](Self::download_all). Any fatal error aborts the
    /// entire run, even if some tracks might otherwise have been
    /// retrievable.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<SavedTrack>> {
        let task_id = self.submit(request).await?;
        let tracks = self.wait_for_completion(&task_id).await?;
        self.download_all(&tracks).await
    }

    /// Submit a generation request, returning the server-assigned task id
    ///
    /// If the request carries no callback URL, the configured one is filled
    /// in; the service requires the field even though this library only
    /// ever polls for completion.
    pub async fn submit(&self, request: &GenerationRequest) -> Result<TaskId> {
        let mut request = request.clone();
        if request.call_back_url.is_none() {
            request.call_back_url = Some(self.config.api.callback_url.clone());
        }

        let task_id = self.client.generate(&request).await?;
        info!(%task_id, "generation task submitted");
        self.emit(Event::TaskSubmitted {
            task_id: task_id.clone(),
        });

        Ok(task_id)
    }

    /// Poll a task until it reaches a terminal status or times out
    ///
    /// One status query per tick, with a fixed sleep between ticks (no
    /// backoff, no jitter). The timeout bound is checked at each tick
    /// boundary (never mid-sleep), so the elapsed time on
    /// [`Error::Timeout`] may exceed the configured bound by up to one
    /// poll interval. Terminal outcomes:
    /// - `SUCCESS` returns the track list
    /// - `FAILED`/`ERROR` fails with [`Error::Generation`]
    /// - a non-200 envelope on any tick fails with [`Error::Service`]
    ///
    /// Unrecognized status values are treated as still in progress and
    /// logged, so a new terminal state the service introduces surfaces in
    /// logs rather than silently spinning until the timeout.
    pub async fn wait_for_completion(&self, task_id: &TaskId) -> Result<Vec<Track>> {
        let interval = self.config.polling.poll_interval;
        let timeout = self.config.polling.completion_timeout;
        let start = Instant::now();

        info!(%task_id, ?timeout, ?interval, "waiting for generation to complete");

        loop {
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                warn!(%task_id, ?elapsed, "gave up waiting for a terminal status");
                return Err(Error::Timeout {
                    task_id: task_id.clone(),
                    elapsed,
                });
            }

            let record = self.client.record_info(task_id).await?;
            debug!(%task_id, status = %record.status, "poll tick");
            self.emit(Event::StatusChecked {
                task_id: task_id.clone(),
                status: record.status.clone(),
            });

            match record.status {
                TaskStatus::Success => {
                    let tracks = record
                        .response
                        .map(|r| r.suno_data)
                        .ok_or_else(|| {
                            Error::MalformedResponse(
                                "record-info: SUCCESS status without a response payload"
                                    .to_string(),
                            )
                        })?;
                    info!(%task_id, track_count = tracks.len(), "generation complete");
                    self.emit(Event::GenerationComplete {
                        task_id: task_id.clone(),
                        track_count: tracks.len(),
                    });
                    return Ok(tracks);
                }
                TaskStatus::Failed | TaskStatus::Error => {
                    error!(
                        %task_id,
                        message = record.error_message.as_deref().unwrap_or("<none>"),
                        "generation failed"
                    );
                    return Err(Error::Generation {
                        message: record.error_message,
                    });
                }
                TaskStatus::Unknown(ref raw) => {
                    warn!(%task_id, status = %raw, "unrecognized status value, still polling");
                }
                _ => {}
            }

            sleep(interval).await;
        }
    }

    /// Download one track's audio into the configured download directory
    ///
    /// Returns `Ok(None)` when the track has no audio URL yet; some
    /// pipelines finalize metadata before audio, so this is a notice, not
    /// an error. Otherwise fetches the content, creates the download
    /// directory if needed, and writes
    /// `{title-or-id}_{first 8 of id}.mp3`, silently overwriting any
    /// existing file of the same name. A failed fetch or write aborts with
    /// the underlying error; partially written files are not cleaned up.
    pub async fn download_track(&self, track: &Track) -> Result<Option<PathBuf>> {
        let Some(audio_url) = track.audio_url.as_deref() else {
            info!(id = %track.id, "no audio URL available yet, skipping");
            self.emit(Event::TrackSkipped {
                id: track.id.clone(),
                reason: "no audio URL available yet".to_string(),
            });
            return Ok(None);
        };

        info!(id = %track.id, title = track.display_title(), "downloading track");
        let content = self.client.fetch_audio(audio_url).await?;

        let dir = &self.config.download.download_dir;
        tokio::fs::create_dir_all(dir).await?;

        let path = utils::track_path(dir, track);
        tokio::fs::write(&path, &content).await?;

        info!(id = %track.id, path = %path.display(), bytes = content.len(), "saved track");
        self.emit(Event::TrackSaved {
            id: track.id.clone(),
            title: track.title.clone(),
            path: path.clone(),
        });

        Ok(Some(path))
    }

    /// Download every track in a result list, one after another
    ///
    /// Strictly sequential: no parallelism across downloads. Tracks
    /// without an audio URL are skipped (`path: None`); the first fetch or
    /// write failure aborts the rest.
    pub async fn download_all(&self, tracks: &[Track]) -> Result<Vec<SavedTrack>> {
        let mut saved = Vec::with_capacity(tracks.len());
        for track in tracks {
            let path = self.download_track(track).await?;
            saved.push(SavedTrack {
                track: track.clone(),
                path,
            });
        }
        Ok(saved)
    }

    /// Broadcast an event, ignoring the error when nobody is subscribed
    fn emit(&self, event: Event) {
        let _ = self.event_tx.send(event);
    }
}
