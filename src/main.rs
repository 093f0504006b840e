#![allow(non_snake_case)]

use std::rc::Rc;

use clipbridge::ports::LocalSubscription;
use clipbridge::{BridgeConfig, CopyBackend, LocalPort};
use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        clipbridge::logging::init(initial_config().log_level());
    }

    log::info!("Starting clipbridge demo");

    dioxus::launch(App);
}

/// Outbound copy port of the demo page and the bridge listening on it
struct CopyChannel {
    port: LocalPort,
    _subscription: Option<LocalSubscription>,
}

fn open_channel(backend: CopyBackend) -> Rc<CopyChannel> {
    let port = LocalPort::new();
    let subscription = connect_backend(&port, backend);
    Rc::new(CopyChannel {
        port,
        _subscription: subscription,
    })
}

#[cfg(target_arch = "wasm32")]
fn connect_backend(port: &LocalPort, backend: CopyBackend) -> Option<LocalSubscription> {
    let writer = match clipbridge::clipboard::writer_for(backend) {
        Ok(writer) => writer,
        Err(e) => {
            log::error!("Clipboard unavailable: {}", e);
            return None;
        }
    };

    match clipbridge::connect(port, writer) {
        Ok(subscription) => Some(subscription),
        Err(e) => {
            log::error!("Failed to connect copy bridge: {}", e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn connect_backend(_port: &LocalPort, backend: CopyBackend) -> Option<LocalSubscription> {
    log::warn!("Copy backend {} needs a browser", backend.as_str());
    None
}

fn initial_config() -> BridgeConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match BridgeConfig::load(&wasm_bindgen::JsValue::UNDEFINED) {
            Ok(config) => return config,
            Err(e) => log::warn!("Using default bridge config: {}", e),
        }
    }

    BridgeConfig::default()
}

#[component]
fn App() -> Element {
    let mut config = use_signal(initial_config);
    let mut channel = use_signal(|| open_channel(config.peek().backend));
    let mut text = use_signal(String::new);
    let mut sent = use_signal(|| 0u32);

    let backend = config.read().backend;

    rsx! {
        div { class: "clipbridge-demo",
            h1 { "clipbridge" }
            input {
                r#type: "text",
                placeholder: "Text to copy",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }
            button {
                onclick: move |_| {
                    let payload = text.read().clone();
                    channel.read().port.send(payload);
                    sent += 1;
                },
                "Copy"
            }
            select {
                value: backend.as_str(),
                onchange: move |e| {
                    let backend = CopyBackend::from_str(&e.value());
                    config.write().backend = backend;
                    channel.set(open_channel(backend));

                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Err(e) = config.read().save() {
                            log::warn!("Failed to save bridge config: {}", e);
                        }
                    }
                },
                option { value: "exec_command", "execCommand(\"copy\")" }
                option { value: "async_clipboard", "navigator.clipboard" }
            }
            p { "Copy requests sent: {sent}" }
        }
    }
}
