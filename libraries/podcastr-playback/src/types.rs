//! Core types for playback management

use crate::time::format_duration;
use serde::{Deserialize, Serialize};

/// Media file descriptor attached to an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    /// Address the rendering surface loads
    pub url: String,

    /// Total length in whole seconds
    pub duration_secs: u64,

    /// Pre-rendered `HH:MM:SS` label for `duration_secs`
    pub duration_display: String,
}

impl MediaFile {
    /// Build a descriptor, deriving the display label from the duration
    pub fn new(url: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            url: url.into(),
            duration_secs,
            duration_display: format_duration(duration_secs),
        }
    }
}

/// Episode information for queue management
///
/// Supplied by the episode provider and never mutated by the player.
/// The queue holds its own copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier from the catalog
    pub id: String,

    /// Episode title
    pub title: String,

    /// Hosts and guests, free text
    pub members: String,

    /// Thumbnail image reference
    pub thumbnail: String,

    /// Media to render
    pub file: MediaFile,
}

/// Full state of the shared player
///
/// Owned by [`crate::PlaybackCoordinator`]; consumers only ever see it
/// through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Episodes staged for playback, in order
    pub queue: Vec<Episode>,

    /// Position of the current episode; 0 and unused when the queue is empty
    pub current_index: usize,

    /// Whether playback is intended to be active
    pub playing: bool,

    /// Restart the current episode on completion instead of advancing
    pub looping: bool,

    /// Pick a random index on advance instead of the next one
    pub shuffling: bool,

    /// Displayed playback offset in whole seconds
    pub elapsed_secs: u64,
}

impl PlaybackState {
    /// Episode at `current_index`, if the queue is non-empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    /// Whether an advance would select an episode
    ///
    /// Always true while shuffling (a random pick may land on the current
    /// index), false for an empty queue.
    pub fn has_next(&self) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        self.shuffling || self.current_index + 1 < self.queue.len()
    }

    /// Whether a retreat would select an episode
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }
}

/// Configuration for a player session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Start rendering freshly loaded media without waiting for a play
    /// command (default: true)
    pub autoplay: bool,

    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            looping: false,
            shuffling: false,
        }
    }
}
