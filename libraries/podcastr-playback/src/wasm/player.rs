//! WASM-compatible player session wrapper

use super::surface::JsSurface;
use crate::{
    Episode, ListenerId, PlaybackConfig, PlaybackError, PlayerSession, SurfaceEvent,
};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// WASM-compatible player
///
/// Commands mirror [`PlayerSession`]. After each one the drained
/// [`crate::PlaybackEvent`]s are passed to the `onChange` callback as an
/// array, so the page re-renders only when something moved.
#[wasm_bindgen]
pub struct WasmPlayer {
    session: PlayerSession<JsSurface>,

    // Event callbacks
    on_change: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player bound to `surface`
    ///
    /// `config` is a `PlaybackConfig` object (as served by
    /// `/api/player/config`); `undefined` selects the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(surface: JsValue, config: JsValue) -> Result<WasmPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let config: PlaybackConfig = if config.is_undefined() || config.is_null() {
            PlaybackConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid player config: {}", e)))?
        };

        Ok(Self {
            session: PlayerSession::new(config, JsSurface::new(surface)),
            on_change: None,
            on_error: None,
        })
    }

    // ===== Queue Loading =====

    /// Stage one episode
    #[wasm_bindgen(js_name = playSingle)]
    pub fn play_single(&mut self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = serde_wasm_bindgen::from_value(episode)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episode: {}", e)))?;

        self.session.play_single(episode);
        self.emit_change();
        Ok(())
    }

    /// Replace the queue and start at `start_index`
    #[wasm_bindgen(js_name = playQueue)]
    pub fn play_queue(&mut self, episodes: JsValue, start_index: usize) -> Result<(), JsValue> {
        let episodes: Vec<Episode> = serde_wasm_bindgen::from_value(episodes)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;

        self.session.play_queue(episodes, start_index);
        self.emit_change();
        Ok(())
    }

    #[wasm_bindgen(js_name = clearQueue)]
    pub fn clear_queue(&mut self) {
        self.session.clear();
        self.emit_change();
    }

    // ===== Playback Control =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.session.toggle_play();
        self.emit_change();
    }

    #[wasm_bindgen(js_name = setPlaying)]
    pub fn set_playing(&mut self, playing: bool) {
        self.session.set_playing(playing);
        self.emit_change();
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.session.toggle_loop();
        self.emit_change();
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.session.toggle_shuffle();
        self.emit_change();
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.session.advance();
        self.emit_change();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.session.retreat();
        self.emit_change();
    }

    /// Scrub the current episode to `position_secs`
    pub fn seek(&mut self, position_secs: f64) -> Result<(), JsValue> {
        self.session
            .seek(position_secs)
            .map_err(|e| self.handle_error(&e))?;
        self.emit_change();
        Ok(())
    }

    // ===== Surface Callbacks =====

    /// Element reported `loadedmetadata`
    #[wasm_bindgen(js_name = onMetadataLoaded)]
    pub fn on_metadata_loaded(&mut self, listener: f64) -> bool {
        self.dispatch(SurfaceEvent::MetadataLoaded {
            listener: listener_id(listener),
        })
    }

    /// Element reported `timeupdate`
    #[wasm_bindgen(js_name = onTimeUpdate)]
    pub fn on_time_update(&mut self, listener: f64, position_secs: f64) -> bool {
        self.dispatch(SurfaceEvent::PositionChanged {
            listener: listener_id(listener),
            position_secs,
        })
    }

    /// Element reported `ended`
    #[wasm_bindgen(js_name = onEnded)]
    pub fn on_ended(&mut self, listener: f64) -> bool {
        self.dispatch(SurfaceEvent::Ended {
            listener: listener_id(listener),
        })
    }

    /// Element reported `play`
    #[wasm_bindgen(js_name = onPlay)]
    pub fn on_play(&mut self, listener: f64) -> bool {
        self.dispatch(SurfaceEvent::Played {
            listener: listener_id(listener),
        })
    }

    /// Element reported `pause`
    #[wasm_bindgen(js_name = onPause)]
    pub fn on_pause(&mut self, listener: f64) -> bool {
        self.dispatch(SurfaceEvent::Paused {
            listener: listener_id(listener),
        })
    }

    // ===== State Queries =====

    /// Player panel snapshot as a plain object
    pub fn view(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.session.view()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.session.state().has_next()
    }

    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.session.state().has_previous()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.session.state().playing
    }

    // ===== Event Listeners =====

    /// Register the state change callback
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Register the error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn dispatch(&mut self, event: SurfaceEvent) -> bool {
        let applied = self.session.dispatch(event);
        self.emit_change();
        applied
    }

    fn emit_change(&mut self) {
        let events = self.session.drain_events();
        if events.is_empty() {
            return;
        }
        if let Some(ref cb) = self.on_change {
            if let Ok(js_events) = serde_wasm_bindgen::to_value(&events) {
                cb.call1(&JsValue::NULL, &js_events).ok();
            }
        }
    }

    fn handle_error(&self, error: &PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}

fn listener_id(raw: f64) -> ListenerId {
    ListenerId::from_raw(raw as u64)
}
