//! Rendering surface binding
//!
//! [`RenderingSurface`] abstracts the platform's media element (an HTML
//! `<audio>` element in the browser, a test double elsewhere).
//! [`SurfaceAdapter`] translates coordinator state into surface commands and
//! surface events back into coordinator operations.

use crate::{
    coordinator::PlaybackCoordinator,
    error::{PlaybackError, Result},
    events::SurfaceEvent,
    listener::{ListenerId, ListenerRegistry},
    time::whole_seconds,
    types::MediaFile,
};

/// Platform media element
///
/// Implementors render one media reference at a time and report back
/// through [`SurfaceEvent`]s tagged with the [`ListenerId`] passed to the
/// `load` that produced them.
pub trait RenderingSurface {
    /// Replace the loaded media
    ///
    /// Events for this media must be tagged with `listener`.
    fn load(&mut self, media: &MediaFile, listener: ListenerId) -> Result<()>;

    /// Drop the loaded media; no further events are expected
    fn unload(&mut self) -> Result<()>;

    /// Start or resume producing audio
    fn play(&mut self) -> Result<()>;

    /// Halt audio
    fn pause(&mut self) -> Result<()>;

    /// Repeat the media on completion instead of reporting `Ended`
    fn set_loop(&mut self, looping: bool) -> Result<()>;

    /// Move the playback offset
    fn seek(&mut self, position_secs: f64) -> Result<()>;
}

/// Binding between the coordinator and a rendering surface
///
/// Outbound, [`SurfaceAdapter::sync`] is called after every coordinator
/// operation:
/// - a new selection reloads the surface under a fresh listener
/// - a change of the `playing` flag becomes a play/pause command
/// - the loop flag is mirrored onto the surface
///
/// Inbound, [`SurfaceAdapter::handle_event`] drops anything delivered
/// through a released listener before it can touch the coordinator.
pub struct SurfaceAdapter<S: RenderingSurface> {
    surface: S,
    listeners: ListenerRegistry,

    /// Start freshly loaded media without waiting for a play command
    autoplay: bool,

    /// Coordinator selection the surface currently reflects
    applied_selection: u64,

    /// Last observed value of the coordinator's `playing` flag
    last_playing: bool,

    /// Loop flag last pushed to the surface
    applied_looping: Option<bool>,
}

impl<S: RenderingSurface> SurfaceAdapter<S> {
    /// Wrap a surface
    pub fn new(surface: S, autoplay: bool) -> Self {
        Self {
            surface,
            listeners: ListenerRegistry::new(),
            autoplay,
            applied_selection: 0,
            last_playing: false,
            applied_looping: None,
        }
    }

    // ===== Outbound =====

    /// Bring the surface in line with the coordinator
    pub fn sync(&mut self, coordinator: &mut PlaybackCoordinator) {
        if coordinator.selection() != self.applied_selection {
            self.applied_selection = coordinator.selection();
            self.load_current(coordinator);
        }

        // Attempted once per flag change; a rejected value is not retried
        // until the flag flips again
        let looping = coordinator.state().looping;
        if self.applied_looping != Some(looping) {
            self.applied_looping = Some(looping);
            if let Err(e) = self.surface.set_loop(looping) {
                tracing::warn!(error = %e, looping, "Failed to set loop flag");
            }
        }

        let playing = coordinator.state().playing;
        if playing != self.last_playing {
            self.last_playing = playing;
            if self.listeners.current().is_some() {
                self.command_playing(coordinator, playing);
            } else if playing && coordinator.current_episode().is_some() {
                // Previous load failed or the surface was shut down
                self.load_current(coordinator);
            }
        }
    }

    /// Load the coordinator's current episode, or unload if there is none
    fn load_current(&mut self, coordinator: &mut PlaybackCoordinator) {
        // Detach before anything of the new load can be delivered
        self.listeners.release();
        self.last_playing = coordinator.state().playing;

        let Some(episode) = coordinator.current_episode() else {
            tracing::debug!("No current episode, unloading surface");
            if let Err(e) = self.surface.unload() {
                tracing::warn!(error = %e, "Failed to unload surface");
            }
            return;
        };

        let listener = self.listeners.register();
        tracing::debug!(
            episode_id = %episode.id,
            url = %episode.file.url,
            %listener,
            "Loading episode"
        );

        if let Err(e) = self.surface.load(&episode.file, listener) {
            tracing::warn!(error = %e, "Failed to load media");
            self.listeners.release();
            coordinator.set_playing(false);
            self.last_playing = false;
            return;
        }

        if self.autoplay || coordinator.state().playing {
            self.command_playing(coordinator, true);
        }
    }

    fn command_playing(&mut self, coordinator: &mut PlaybackCoordinator, playing: bool) {
        let result = if playing {
            self.surface.play()
        } else {
            self.surface.pause()
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, playing, "Surface rejected play state");
            if playing {
                // Nothing is heard, so the flag must not claim otherwise
                coordinator.set_playing(false);
                self.last_playing = false;
            }
        }
    }

    // ===== Inbound =====

    /// Apply a surface event
    ///
    /// Returns false if the event was discarded: delivered through a
    /// released listener, or a position report before metadata was ready.
    ///
    /// Metadata-ready always rewinds the surface to 0 and zeroes the
    /// elapsed counter, so a seek issued between `load` and metadata-ready
    /// does not survive.
    pub fn handle_event(
        &mut self,
        coordinator: &mut PlaybackCoordinator,
        event: SurfaceEvent,
    ) -> bool {
        let listener = event.listener();
        if !self.listeners.is_current(listener) {
            tracing::trace!(%listener, ?event, "Discarding stale surface event");
            return false;
        }

        match event {
            SurfaceEvent::MetadataLoaded { .. } => {
                if !self.listeners.attach_position(listener) {
                    return false;
                }
                coordinator.reset_elapsed();
                if let Err(e) = self.surface.seek(0.0) {
                    tracing::warn!(error = %e, "Failed to rewind freshly loaded media");
                }
                true
            }
            SurfaceEvent::PositionChanged { position_secs, .. } => {
                if !self.listeners.accepts_position(listener) {
                    return false;
                }
                coordinator.set_elapsed(whole_seconds(position_secs));
                true
            }
            SurfaceEvent::Ended { .. } => {
                tracing::debug!(%listener, "Episode completed");
                coordinator.on_episode_completed();
                self.sync(coordinator);
                true
            }
            SurfaceEvent::Played { .. } => {
                coordinator.set_playing(true);
                self.last_playing = true;
                true
            }
            SurfaceEvent::Paused { .. } => {
                coordinator.set_playing(false);
                self.last_playing = false;
                true
            }
        }
    }

    /// Scrub to `position_secs`
    ///
    /// The elapsed counter follows immediately instead of waiting for the
    /// next position report.
    pub fn seek(
        &mut self,
        coordinator: &mut PlaybackCoordinator,
        position_secs: f64,
    ) -> Result<()> {
        if !position_secs.is_finite() || position_secs < 0.0 {
            return Err(PlaybackError::InvalidSeekPosition(position_secs));
        }
        if self.listeners.current().is_none() || coordinator.current_episode().is_none() {
            return Err(PlaybackError::NoEpisodeLoaded);
        }

        self.surface.seek(position_secs)?;
        coordinator.set_elapsed(whole_seconds(position_secs));
        Ok(())
    }

    /// Release the live listener and unload the surface
    pub fn shutdown(&mut self) {
        if self.listeners.release().is_some() {
            if let Err(e) = self.surface.unload() {
                tracing::warn!(error = %e, "Failed to unload surface on shutdown");
            }
        }
    }

    // ===== Accessors =====

    /// Listener of the media currently loaded
    pub fn current_listener(&self) -> Option<ListenerId> {
        self.listeners.current()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: RenderingSurface> Drop for SurfaceAdapter<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
