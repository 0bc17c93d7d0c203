//! WASM bindings for podcastr-playback
//!
//! Lets the page drive a [`crate::PlayerSession`] whose rendering surface
//! is an HTML audio element wrapped by a small JS object.

pub mod player;
pub mod surface;

pub use player::WasmPlayer;
pub use surface::JsSurface;
