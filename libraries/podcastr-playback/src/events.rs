//! Playback Events
//!
//! Two directions of event traffic:
//! - [`PlaybackEvent`]: coordinator state changes, drained by the display
//! - [`SurfaceEvent`]: reports from the rendering surface, fed to the adapter

use crate::listener::ListenerId;
use serde::{Deserialize, Serialize};

/// Events emitted by the coordinator when its state actually changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// The `playing` flag changed
    StateChanged {
        /// New value of the flag
        playing: bool,
    },

    /// A different episode became current, or none
    ///
    /// Also emitted when a shuffled advance re-selects the same index,
    /// since the surface reloads it from the start.
    #[serde(rename_all = "camelCase")]
    EpisodeChanged {
        /// Index of the new current episode
        index: Option<usize>,
        /// ID of the new current episode
        episode_id: Option<String>,
    },

    /// The queue was replaced or cleared
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// The loop flag changed
    LoopChanged { looping: bool },

    /// The shuffle flag changed
    ShuffleChanged { shuffling: bool },

    /// The displayed elapsed counter moved
    ElapsedChanged { seconds: u64 },
}

/// Reports from the rendering surface
///
/// Every event carries the listener it was delivered through. The surface
/// receives a fresh [`ListenerId`] with each media load and must tag the
/// events of that load with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SurfaceEvent {
    /// Enough of the media is loaded to know its duration
    MetadataLoaded { listener: ListenerId },

    /// Current playback offset, at the surface's own cadence
    #[serde(rename_all = "camelCase")]
    PositionChanged {
        listener: ListenerId,
        position_secs: f64,
    },

    /// Media finished without looping
    Ended { listener: ListenerId },

    /// The surface started producing audio on its own (e.g. autoplay)
    Played { listener: ListenerId },

    /// The surface stopped producing audio on its own
    Paused { listener: ListenerId },
}

impl SurfaceEvent {
    /// Listener the event was delivered through
    pub fn listener(&self) -> ListenerId {
        match *self {
            SurfaceEvent::MetadataLoaded { listener }
            | SurfaceEvent::PositionChanged { listener, .. }
            | SurfaceEvent::Ended { listener }
            | SurfaceEvent::Played { listener }
            | SurfaceEvent::Paused { listener } => listener,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_event_listener() {
        let listener = ListenerId::from_raw(7);
        let events = [
            SurfaceEvent::MetadataLoaded { listener },
            SurfaceEvent::PositionChanged {
                listener,
                position_secs: 1.5,
            },
            SurfaceEvent::Ended { listener },
            SurfaceEvent::Played { listener },
            SurfaceEvent::Paused { listener },
        ];

        assert!(events.iter().all(|e| e.listener() == listener));
    }

    #[test]
    fn playback_event_json_shape() {
        let event = PlaybackEvent::EpisodeChanged {
            index: Some(2),
            episode_id: Some("a-importancia-da-contribuicao-em-open-source".to_string()),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "episodeChanged");
        assert_eq!(json["index"], 2);
        assert_eq!(
            json["episodeId"],
            "a-importancia-da-contribuicao-em-open-source"
        );
    }

    #[test]
    fn surface_event_from_json() {
        let event: SurfaceEvent =
            serde_json::from_str(r#"{ "type": "positionChanged", "listener": 3, "positionSecs": 12.7 }"#)
                .unwrap();
        assert_eq!(
            event,
            SurfaceEvent::PositionChanged {
                listener: ListenerId::from_raw(3),
                position_secs: 12.7,
            }
        );
    }
}
