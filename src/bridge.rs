//! Copy bridge
//!
//! Connects a copy-request source to a clipboard writer. Every emitted string
//! is handed to the writer synchronously; failures are logged and dropped, so
//! the application emitting the request never sees them.

use crate::clipboard::ClipboardWriter;
use crate::error::BridgeResult;
use crate::ports::CopySource;

pub struct CopyBridge<W: ClipboardWriter> {
    writer: W,
}

impl<W: ClipboardWriter> CopyBridge<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Copy `text` to the clipboard, best effort
    pub fn handle(&self, text: &str) {
        log::debug!("copy request ({} chars)", text.chars().count());

        if let Err(e) = self.writer.write_text(text) {
            if e.is_unsupported_host() {
                log::warn!("Clipboard unavailable: {}", e);
            } else {
                log::warn!("Copy failed: {}", e);
            }
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

/// Subscribe a bridge around `writer` to `source`.
///
/// Keep the returned subscription alive; dropping it disconnects the bridge.
pub fn connect<S, W>(source: &S, writer: W) -> BridgeResult<S::Subscription>
where
    S: CopySource,
    W: ClipboardWriter + 'static,
{
    let bridge = CopyBridge::new(writer);
    source.subscribe(Box::new(move |text: String| bridge.handle(&text)))
}
