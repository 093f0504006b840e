// Inbound copy-request channels
// A port emits one string per copy request; the bridge subscribes to it.

pub mod local;
#[cfg(target_arch = "wasm32")]
pub mod elm;

pub use local::{LocalPort, LocalSubscription};
#[cfg(target_arch = "wasm32")]
pub use elm::{ElmPort, PortSubscription};

use crate::error::BridgeResult;

/// Handler invoked once per emitted string
pub type CopyHandler = Box<dyn FnMut(String)>;

/// A channel that emits copy requests.
///
/// The returned subscription keeps the handler registered; dropping it
/// unsubscribes.
pub trait CopySource {
    type Subscription;

    fn subscribe(&self, handler: CopyHandler) -> BridgeResult<Self::Subscription>;
}
