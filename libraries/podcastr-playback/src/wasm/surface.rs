//! Rendering surface backed by a JS object

use crate::{ListenerId, MediaFile, PlaybackError, RenderingSurface, Result};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Forwards surface commands to a JS object
///
/// The object must implement `load(url, listenerId)`, `unload()`,
/// `play()`, `pause()`, `setLoop(flag)` and `seek(secs)`, and report the
/// element's `loadedmetadata`, `timeupdate`, `ended`, `play` and `pause`
/// events back to [`super::WasmPlayer`] together with the listener id of
/// the load they belong to.
///
/// `HTMLMediaElement.play()` rejects asynchronously when autoplay is
/// blocked; the JS side reports that as a pause.
pub struct JsSurface {
    target: JsValue,
}

impl JsSurface {
    pub fn new(target: JsValue) -> Self {
        Self { target }
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Result<()> {
        let function = Reflect::get(&self.target, &JsValue::from_str(method))
            .map_err(|e| js_error(method, &e))?
            .dyn_into::<Function>()
            .map_err(|_| PlaybackError::Surface(format!("surface has no `{}` method", method)))?;

        let args: Array = args.iter().collect();
        function
            .apply(&self.target, &args)
            .map(|_| ())
            .map_err(|e| js_error(method, &e))
    }
}

fn js_error(method: &str, error: &JsValue) -> PlaybackError {
    let detail = error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error));
    PlaybackError::Surface(format!("{}: {}", method, detail))
}

impl RenderingSurface for JsSurface {
    fn load(&mut self, media: &MediaFile, listener: ListenerId) -> Result<()> {
        self.call(
            "load",
            &[
                JsValue::from_str(&media.url),
                JsValue::from_f64(listener.raw() as f64),
            ],
        )
    }

    fn unload(&mut self) -> Result<()> {
        self.call("unload", &[])
    }

    fn play(&mut self) -> Result<()> {
        self.call("play", &[])
    }

    fn pause(&mut self) -> Result<()> {
        self.call("pause", &[])
    }

    fn set_loop(&mut self, looping: bool) -> Result<()> {
        self.call("setLoop", &[JsValue::from_bool(looping)])
    }

    fn seek(&mut self, position_secs: f64) -> Result<()> {
        self.call("seek", &[JsValue::from_f64(position_secs)])
    }
}
