//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// The coordinator itself never fails; these come from the rendering
/// surface side of the player.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No episode is currently loaded on the surface
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// The rendering surface rejected a command
    #[error("Rendering surface error: {0}")]
    Surface(String),

    /// Invalid seek position
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
