//! Podcastr - Playback Coordination
//!
//! Shared player state for the Podcastr front end, independent of any UI
//! toolkit or media backend.
//!
//! This crate provides:
//! - A single state owner for the queue, current episode and player flags
//! - Sequential and shuffled "next" selection
//! - Loop and end-of-queue policies
//! - A rendering surface adapter with per-load listener scoping
//! - `HH:MM:SS` time labels for the player panel
//!
//! # Architecture
//!
//! [`PlaybackCoordinator`] holds the state and never performs I/O.
//! [`SurfaceAdapter`] binds it to a [`RenderingSurface`] (the HTML audio
//! element in the browser) and discards events left over from earlier
//! loads. [`PlayerSession`] drives both as one unit.
//!
//! Browser bindings live behind the `wasm` feature.
//!
//! # Example: Queue Playback
//!
//! ```rust
//! use podcastr_playback::{Episode, MediaFile, PlaybackCoordinator, PlaybackConfig};
//!
//! let mut coordinator = PlaybackCoordinator::new(PlaybackConfig::default());
//!
//! let episodes: Vec<Episode> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| Episode {
//!         id: id.to_string(),
//!         title: format!("Episode {}", id),
//!         members: "Diego Fernandes".to_string(),
//!         thumbnail: String::new(),
//!         file: MediaFile::new(format!("https://cdn.example.com/{}.m4a", id), 1800),
//!     })
//!     .collect();
//!
//! coordinator.play_queue(episodes, 1);
//! assert_eq!(coordinator.current_episode().map(|e| e.id.as_str()), Some("b"));
//! assert!(coordinator.state().playing);
//!
//! coordinator.advance();
//! assert_eq!(coordinator.state().current_index, 2);
//!
//! // End of queue: nothing left, so the queue is emptied
//! coordinator.on_episode_completed();
//! assert!(coordinator.state().queue.is_empty());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_playback::{
//!     ListenerId, MediaFile, PlaybackConfig, PlayerSession, RenderingSurface, Result,
//!     SurfaceEvent,
//! };
//!
//! struct MyAudioElement {
//!     // ... platform media handle
//! }
//!
//! impl RenderingSurface for MyAudioElement {
//!     fn load(&mut self, media: &MediaFile, listener: ListenerId) -> Result<()> {
//!         // Point the element at media.url, tag its events with `listener`
//!         Ok(())
//!     }
//!     fn unload(&mut self) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn set_loop(&mut self, looping: bool) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, position_secs: f64) -> Result<()> { Ok(()) }
//! }
//!
//! let mut session = PlayerSession::new(PlaybackConfig::default(), MyAudioElement {});
//!
//! // Forward element callbacks as they arrive
//! # let listener = ListenerId::from_raw(1);
//! session.dispatch(SurfaceEvent::PositionChanged { listener, position_secs: 12.4 });
//! println!("{}", session.view().elapsed_display);
//! ```

mod coordinator;
mod error;
pub mod events;
mod listener;
mod session;
mod shuffle;
mod surface;
pub mod time;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use coordinator::PlaybackCoordinator;
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, SurfaceEvent};
pub use listener::{ListenerId, ListenerRegistry};
pub use session::{Controls, PlayerSession, PlayerView, SharedSession};
pub use surface::{RenderingSurface, SurfaceAdapter};
pub use time::format_duration;
pub use types::{Episode, MediaFile, PlaybackConfig, PlaybackState};
