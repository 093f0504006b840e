//! Clipboard writers
//!
//! `ClipboardWriter` is the "copy this string" capability the bridge depends
//! on. Two browser implementations exist:
//!
//! - [`LegacyCopy`]: transient `<input>` + `document.execCommand("copy")`
//! - [`AsyncClipboard`]: `navigator.clipboard.writeText`
//!
//! Which one a page uses is decided by [`crate::config::CopyBackend`].

use std::rc::Rc;

use crate::error::BridgeResult;

#[cfg(target_arch = "wasm32")]
pub mod async_api;
pub mod legacy;

pub use legacy::{LegacyCopy, SelectionHost, TransientInput};

#[cfg(target_arch = "wasm32")]
pub use async_api::AsyncClipboard;
#[cfg(target_arch = "wasm32")]
pub use legacy::DomHost;

/// Something that can place text on the system clipboard
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> BridgeResult<()>;
}

impl<W: ClipboardWriter + ?Sized> ClipboardWriter for Box<W> {
    fn write_text(&self, text: &str) -> BridgeResult<()> {
        (**self).write_text(text)
    }
}

impl<W: ClipboardWriter + ?Sized> ClipboardWriter for Rc<W> {
    fn write_text(&self, text: &str) -> BridgeResult<()> {
        (**self).write_text(text)
    }
}

/// Build the writer selected by `backend` against the live browser document
#[cfg(target_arch = "wasm32")]
pub fn writer_for(backend: crate::config::CopyBackend) -> BridgeResult<Box<dyn ClipboardWriter>> {
    use crate::config::CopyBackend;

    match backend {
        CopyBackend::ExecCommand => Ok(Box::new(LegacyCopy::new(DomHost::from_window()?))),
        CopyBackend::AsyncClipboard => Ok(Box::new(AsyncClipboard::from_window()?)),
    }
}
