//! Playback coordinator - shared player state
//!
//! Owns the queue, the current index and the player flags. Every state
//! change goes through one of the operations below; none of them fail and
//! none of them perform I/O. Driving the rendering surface is the job of
//! [`crate::SurfaceAdapter`].

use crate::{
    events::PlaybackEvent,
    shuffle::pick_random_index,
    types::{Episode, PlaybackConfig, PlaybackState},
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Central playback state management
///
/// Besides [`PlaybackState`] the coordinator keeps a selection counter that
/// increases every time the current episode is (re)selected. The surface
/// adapter compares it against the last load it issued to decide when to
/// load new media, which also covers a shuffled advance landing on the
/// index that was already current.
pub struct PlaybackCoordinator {
    state: PlaybackState,
    selection: u64,
    rng: Box<dyn RngCore>,

    // Event queue for display synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackCoordinator {
    /// Create a coordinator with an empty queue and playback stopped
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a coordinator drawing shuffle picks from `rng`
    pub fn with_rng(config: PlaybackConfig, rng: impl RngCore + 'static) -> Self {
        Self {
            state: PlaybackState {
                looping: config.looping,
                shuffling: config.shuffling,
                ..PlaybackState::default()
            },
            selection: 0,
            rng: Box::new(rng),
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Loading =====

    /// Stage a single episode
    ///
    /// Replaces the queue with `[episode]`. Does not touch `playing`; the
    /// surface's autoplay (or the user) decides whether it starts.
    pub fn play_single(&mut self, episode: Episode) {
        tracing::debug!(episode_id = %episode.id, "Staging single episode");

        self.state.queue = vec![episode];
        self.emit_queue_changed();
        self.select(0);
    }

    /// Replace the queue and start playing at `start_index`
    ///
    /// An empty list leaves the state untouched. A start index past the end
    /// is clamped to the last episode.
    pub fn play_queue(&mut self, episodes: Vec<Episode>, start_index: usize) {
        if episodes.is_empty() {
            tracing::debug!("Ignoring empty play list");
            return;
        }

        let last = episodes.len() - 1;
        let start_index = if start_index > last {
            tracing::warn!(
                start_index,
                queue_len = episodes.len(),
                "Start index out of range, clamping"
            );
            last
        } else {
            start_index
        };

        tracing::debug!(queue_len = episodes.len(), start_index, "Loading play list");

        self.state.queue = episodes;
        self.emit_queue_changed();
        self.select(start_index);
        self.set_playing(true);
    }

    // ===== Flags =====

    /// Flip the `playing` flag
    pub fn toggle_play(&mut self) {
        self.set_playing(!self.state.playing);
    }

    /// Set `playing` explicitly
    ///
    /// Used when the rendering surface reports that it started or stopped
    /// on its own, so the flag follows what is actually heard.
    pub fn set_playing(&mut self, playing: bool) {
        if self.state.playing == playing {
            return;
        }
        self.state.playing = playing;
        self.pending_events
            .push(PlaybackEvent::StateChanged { playing });
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.state.looping = !self.state.looping;
        self.pending_events.push(PlaybackEvent::LoopChanged {
            looping: self.state.looping,
        });
    }

    /// Flip the shuffle flag
    ///
    /// The queue order is left as is.
    pub fn toggle_shuffle(&mut self) {
        self.state.shuffling = !self.state.shuffling;
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            shuffling: self.state.shuffling,
        });
    }

    // ===== Navigation =====

    /// Check if there is a next episode
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Check if there is a previous episode
    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    /// Play next
    ///
    /// Shuffling picks a uniformly random index (possibly the current one);
    /// otherwise moves one forward. At the end of the queue this is a no-op.
    pub fn advance(&mut self) {
        if self.state.shuffling {
            if let Some(index) = pick_random_index(&mut self.rng, self.state.queue.len()) {
                tracing::debug!(from = self.state.current_index, to = index, "Shuffled advance");
                self.select(index);
            }
        } else if self.has_next() {
            self.select(self.state.current_index + 1);
        }
    }

    /// Play previous
    ///
    /// Always moves by queue position, even while shuffling.
    pub fn retreat(&mut self) {
        if self.has_previous() {
            self.select(self.state.current_index - 1);
        }
    }

    /// Empty the queue
    ///
    /// Flags are kept.
    pub fn clear(&mut self) {
        if self.state.queue.is_empty() {
            self.state.current_index = 0;
            return;
        }

        self.state.queue.clear();
        self.state.current_index = 0;
        self.emit_queue_changed();
        self.selection += 1;
        self.reset_elapsed();
        self.pending_events.push(PlaybackEvent::EpisodeChanged {
            index: None,
            episode_id: None,
        });
    }

    /// End-of-media policy
    ///
    /// Advances when there is a next episode, otherwise clears the queue.
    pub fn on_episode_completed(&mut self) {
        if self.has_next() {
            self.advance();
        } else {
            tracing::debug!("Queue finished");
            self.clear();
        }
    }

    // ===== Elapsed =====

    /// Update the displayed elapsed counter
    pub fn set_elapsed(&mut self, seconds: u64) {
        if self.state.elapsed_secs == seconds {
            return;
        }
        self.state.elapsed_secs = seconds;
        self.pending_events
            .push(PlaybackEvent::ElapsedChanged { seconds });
    }

    /// Reset the displayed elapsed counter to zero
    pub fn reset_elapsed(&mut self) {
        self.set_elapsed(0);
    }

    // ===== State Queries =====

    /// Full player state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Episode at the current index
    pub fn current_episode(&self) -> Option<&Episode> {
        self.state.current_episode()
    }

    /// Selection counter, bumped on every current-episode change
    pub fn selection(&self) -> u64 {
        self.selection
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Make `index` current and restart the elapsed counter
    fn select(&mut self, index: usize) {
        debug_assert!(index < self.state.queue.len());

        self.state.current_index = index;
        self.selection += 1;
        self.reset_elapsed();

        self.pending_events.push(PlaybackEvent::EpisodeChanged {
            index: Some(index),
            episode_id: self.state.queue.get(index).map(|e| e.id.clone()),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.state.queue.len(),
        });
    }
}

impl Default for PlaybackCoordinator {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl std::fmt::Debug for PlaybackCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackCoordinator")
            .field("state", &self.state)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
