//! JS application ports
//!
//! An outbound port on the JS side is an object with `subscribe(fn)` and
//! `unsubscribe(fn)`, found under `app.ports.<name>` (the Elm port shape).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{CopyHandler, CopySource};
use crate::error::{BridgeError, BridgeResult};

#[wasm_bindgen]
extern "C" {
    /// Outbound port object exposed by the application runtime
    #[derive(Clone, Debug)]
    pub type ElmPort;

    #[wasm_bindgen(method, js_name = subscribe)]
    fn js_subscribe(this: &ElmPort, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = unsubscribe)]
    fn js_unsubscribe(this: &ElmPort, callback: &js_sys::Function);
}

impl ElmPort {
    /// Look up `app.ports[name]` and check it can be subscribed to
    pub fn from_app(app: &JsValue, name: &str) -> BridgeResult<Self> {
        let ports = js_sys::Reflect::get(app, &JsValue::from_str("ports"))?;
        if !ports.is_object() {
            return Err(BridgeError::MissingPort(name.to_string()));
        }

        let port = js_sys::Reflect::get(&ports, &JsValue::from_str(name))?;
        if !port.is_object() {
            return Err(BridgeError::MissingPort(name.to_string()));
        }
        let subscribe = js_sys::Reflect::get(&port, &JsValue::from_str("subscribe"))?;
        if !subscribe.is_function() {
            return Err(BridgeError::MissingPort(name.to_string()));
        }

        Ok(port.unchecked_into::<ElmPort>())
    }
}

impl CopySource for ElmPort {
    type Subscription = PortSubscription;

    fn subscribe(&self, mut handler: CopyHandler) -> BridgeResult<PortSubscription> {
        // No coercion to string: a typed String port never sends anything else,
        // so a non-string value is a wiring mistake and is not copied.
        let callback = Closure::wrap(Box::new(move |value: JsValue| match value.as_string() {
            Some(text) => handler(text),
            None => log::warn!("Ignoring non-string copy request: {:?}", value),
        }) as Box<dyn FnMut(JsValue)>);

        self.js_subscribe(callback.as_ref().unchecked_ref());

        Ok(PortSubscription {
            port: self.clone(),
            callback,
        })
    }
}

/// Live subscription on a JS port.
///
/// Owns the closure the port calls into, so it must be kept alive for as long
/// as copies should work. Dropping it unsubscribes.
pub struct PortSubscription {
    port: ElmPort,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for PortSubscription {
    fn drop(&mut self) {
        self.port.js_unsubscribe(self.callback.as_ref().unchecked_ref());
    }
}
