//! Player session
//!
//! A [`PlayerSession`] is the single state owner of a player: one
//! coordinator plus the adapter binding it to a rendering surface. Every
//! command re-syncs the surface before returning, so callers never deal
//! with the adapter directly.

use crate::{
    coordinator::PlaybackCoordinator,
    error::Result,
    events::{PlaybackEvent, SurfaceEvent},
    surface::{RenderingSurface, SurfaceAdapter},
    time::format_duration,
    types::{Episode, PlaybackConfig, PlaybackState},
};
use rand::RngCore;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Session handle shared by every display point of one player
///
/// The player lives on a single UI thread, so shared ownership is
/// reference counted without locking.
pub type SharedSession<S> = Rc<RefCell<PlayerSession<S>>>;

/// Coordinator and surface adapter driven as one unit
pub struct PlayerSession<S: RenderingSurface> {
    coordinator: PlaybackCoordinator,
    adapter: SurfaceAdapter<S>,
}

impl<S: RenderingSurface> PlayerSession<S> {
    pub fn new(config: PlaybackConfig, surface: S) -> Self {
        Self::from_parts(PlaybackCoordinator::new(config), config, surface)
    }

    /// Create a session with a deterministic shuffle source
    pub fn with_rng(config: PlaybackConfig, surface: S, rng: impl RngCore + 'static) -> Self {
        Self::from_parts(PlaybackCoordinator::with_rng(config, rng), config, surface)
    }

    fn from_parts(coordinator: PlaybackCoordinator, config: PlaybackConfig, surface: S) -> Self {
        let mut session = Self {
            coordinator,
            adapter: SurfaceAdapter::new(surface, config.autoplay),
        };
        session.sync();
        session
    }

    /// Wrap the session for shared ownership
    pub fn into_shared(self) -> SharedSession<S> {
        Rc::new(RefCell::new(self))
    }

    // ===== Commands =====

    pub fn play_single(&mut self, episode: Episode) {
        self.coordinator.play_single(episode);
        self.sync();
    }

    pub fn play_queue(&mut self, episodes: Vec<Episode>, start_index: usize) {
        self.coordinator.play_queue(episodes, start_index);
        self.sync();
    }

    pub fn toggle_play(&mut self) {
        self.coordinator.toggle_play();
        self.sync();
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.coordinator.set_playing(playing);
        self.sync();
    }

    pub fn toggle_loop(&mut self) {
        self.coordinator.toggle_loop();
        self.sync();
    }

    pub fn toggle_shuffle(&mut self) {
        self.coordinator.toggle_shuffle();
        self.sync();
    }

    pub fn advance(&mut self) {
        self.coordinator.advance();
        self.sync();
    }

    pub fn retreat(&mut self) {
        self.coordinator.retreat();
        self.sync();
    }

    pub fn clear(&mut self) {
        self.coordinator.clear();
        self.sync();
    }

    /// Scrub the current episode
    pub fn seek(&mut self, position_secs: f64) -> Result<()> {
        self.adapter.seek(&mut self.coordinator, position_secs)
    }

    /// Feed a surface report into the session
    ///
    /// Returns false if the event was stale and discarded.
    pub fn dispatch(&mut self, event: SurfaceEvent) -> bool {
        let applied = self.adapter.handle_event(&mut self.coordinator, event);
        if applied {
            self.sync();
        }
        applied
    }

    /// Release the surface; the session stays usable and reloads on the
    /// next selection or play command
    pub fn shutdown(&mut self) {
        self.adapter.shutdown();
    }

    fn sync(&mut self) {
        self.adapter.sync(&mut self.coordinator);
    }

    // ===== Queries =====

    pub fn state(&self) -> &PlaybackState {
        self.coordinator.state()
    }

    pub fn coordinator(&self) -> &PlaybackCoordinator {
        &self.coordinator
    }

    pub fn adapter(&self) -> &SurfaceAdapter<S> {
        &self.adapter
    }

    pub fn surface(&self) -> &S {
        self.adapter.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.adapter.surface_mut()
    }

    /// Drain display events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.coordinator.drain_events()
    }

    /// Snapshot for the player panel
    pub fn view(&self) -> PlayerView {
        PlayerView::from_state(self.coordinator.state())
    }
}

/// Player panel snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub episode: Option<Episode>,
    pub playing: bool,
    pub looping: bool,
    pub shuffling: bool,

    /// Elapsed counter rendered as `HH:MM:SS`
    pub elapsed_display: String,

    /// Total length rendered as `HH:MM:SS`, `00:00:00` with no episode
    pub duration_display: String,

    /// Upper bound of the seek slider in seconds
    pub seek_max: u64,

    pub controls: Controls,
}

/// Which panel controls accept input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub shuffle: bool,
    pub previous: bool,
    pub play_pause: bool,
    pub next: bool,
    pub looping: bool,
    pub seek: bool,
}

impl PlayerView {
    pub fn from_state(state: &PlaybackState) -> Self {
        let episode = state.current_episode().cloned();
        let duration_secs = episode.as_ref().map_or(0, |e| e.file.duration_secs);

        let controls = match episode {
            None => Controls::default(),
            Some(_) => Controls {
                shuffle: state.queue.len() > 1,
                previous: state.has_previous(),
                play_pause: true,
                next: state.has_next(),
                looping: true,
                seek: true,
            },
        };

        Self {
            playing: state.playing,
            looping: state.looping,
            shuffling: state.shuffling,
            elapsed_display: format_duration(state.elapsed_secs),
            duration_display: format_duration(duration_secs),
            seek_max: duration_secs,
            controls,
            episode,
        }
    }
}
