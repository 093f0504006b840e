//! Clipboard writes through the async Clipboard API
//!
//! Drop-in replacement for the legacy copy command on hosts that expose
//! `navigator.clipboard`. The promise is awaited on the local executor so the
//! caller still returns within the same turn.

use wasm_bindgen_futures::JsFuture;
use web_sys::Clipboard;

use crate::clipboard::ClipboardWriter;
use crate::error::{BridgeError, BridgeResult};

pub struct AsyncClipboard {
    clipboard: Clipboard,
}

impl AsyncClipboard {
    pub fn from_window() -> BridgeResult<Self> {
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
        let clipboard = window.navigator().clipboard();
        // Absent outside secure contexts
        if wasm_bindgen::JsValue::from(clipboard.clone()).is_undefined() {
            return Err(BridgeError::NoClipboard);
        }
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for AsyncClipboard {
    /// Starts the write and returns immediately. Rejections are logged once
    /// the promise settles.
    fn write_text(&self, text: &str) -> BridgeResult<()> {
        let promise = self.clipboard.write_text(text);
        let len = text.chars().count();

        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::debug!("Clipboard write of {} chars settled", len),
                Err(e) => log::warn!("Clipboard write rejected: {:?}", e),
            }
        });

        Ok(())
    }
}
