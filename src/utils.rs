//! Utility functions for file naming and path construction

use crate::types::Track;
use std::path::{Path, PathBuf};

/// Characters not allowed in filenames on at least one supported platform
const ILLEGAL_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Sanitize a string for use as a filename component
///
/// Replaces path separators, characters illegal on common filesystems, and
/// control characters with `_`, and trims surrounding whitespace. Does not
/// enforce any length limit.
///
/// # Examples
///
/// ```
/// use suno_dl::utils::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My Song"), "My Song");
/// assert_eq!(sanitize_filename("a/b: c?"), "a_b_ c_");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Build the local filename for a track: `{title-or-id}_{first 8 of id}.mp3`
///
/// The title falls back to the track id when absent or blank, and is
/// sanitized for the filesystem. The id prefix keeps files from different
/// tracks with the same title distinct.
///
/// # Examples
///
/// ```
/// use suno_dl::types::Track;
/// use suno_dl::utils::track_filename;
///
/// let track = Track {
///     id: "5c79a9ae8e234a5fa3f3b74d".to_string(),
///     title: Some("Night Drive".to_string()),
///     tags: vec![],
///     duration: None,
///     audio_url: None,
///     stream_audio_url: None,
///     image_url: None,
///     model_name: None,
///     create_time: None,
/// };
/// assert_eq!(track_filename(&track), "Night Drive_5c79a9ae.mp3");
/// ```
#[must_use]
pub fn track_filename(track: &Track) -> String {
    let name = sanitize_filename(track.display_title());
    let name = if name.is_empty() {
        track.id.as_str()
    } else {
        name.as_str()
    };
    let id_prefix: String = track.id.chars().take(8).collect();
    format!("{name}_{id_prefix}.mp3")
}

/// Build the full local path for a track inside a download directory
#[must_use]
pub fn track_path(download_dir: &Path, track: &Track) -> PathBuf {
    download_dir.join(track_filename(track))
}
