//! Browser clipboard bridge
//!
//! Subscribes to an application's copy-request port and copies each emitted
//! string to the system clipboard. From JS:
//!
//! ```js
//! import init, { subscribeToCopy } from "./clipbridge.js";
//! await init();
//! subscribeToCopy(app);                                   // app.ports.copy
//! subscribeToCopy(app, { port: "toClipboard", backend: "async_clipboard" });
//! ```
//!
//! From Rust, [`bridge::connect`] takes any [`ports::CopySource`] and
//! [`clipboard::ClipboardWriter`].

pub mod bridge;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod ports;

#[cfg(test)]
mod testing;

pub use bridge::{connect, CopyBridge};
pub use clipboard::{ClipboardWriter, LegacyCopy, SelectionHost};
pub use config::{BridgeConfig, CopyBackend};
pub use error::{BridgeError, BridgeResult};
pub use ports::{CopySource, LocalPort};

#[cfg(target_arch = "wasm32")]
mod js {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::config::BridgeConfig;
    use crate::ports::{ElmPort, PortSubscription};
    use crate::{clipboard, logging};

    // One active port subscription per page. Held here instead of leaked with
    // Closure::forget so it can be released again.
    thread_local! {
        static ACTIVE: RefCell<Option<PortSubscription>> = RefCell::new(None);
    }

    /// Connect `app.ports.<port>` to the clipboard.
    ///
    /// Calling again replaces the previous subscription.
    #[wasm_bindgen(js_name = subscribeToCopy)]
    pub fn subscribe_to_copy(app: JsValue, options: JsValue) -> Result<(), JsValue> {
        let config = BridgeConfig::load(&options)?;
        logging::init(config.log_level());

        let port = ElmPort::from_app(&app, &config.port)?;
        let writer = clipboard::writer_for(config.backend)?;
        let subscription = crate::connect(&port, writer)?;

        let replaced = ACTIVE.with(|active| active.borrow_mut().replace(subscription));
        if replaced.is_some() {
            log::info!("Replaced existing copy subscription");
        }
        log::info!("Copy bridge listening on port '{}' ({})", config.port, config.backend.as_str());
        Ok(())
    }

    /// Disconnect the active copy subscription, if any
    #[wasm_bindgen(js_name = unsubscribeFromCopy)]
    pub fn unsubscribe_from_copy() -> bool {
        let removed = ACTIVE.with(|active| active.borrow_mut().take());
        if removed.is_some() {
            log::info!("Copy bridge unsubscribed");
        }
        removed.is_some()
    }
}
