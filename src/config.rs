use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, BridgeResult};

/// localStorage key holding a JSON `BridgeConfig`
pub const STORAGE_KEY: &str = "clipbridge_config";

/// Port name applications use when none is configured
pub const DEFAULT_PORT: &str = "copy";

/// Which clipboard mechanism to copy with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyBackend {
    /// Transient input + `document.execCommand("copy")`
    ExecCommand,
    /// `navigator.clipboard.writeText`
    AsyncClipboard,
}

impl Default for CopyBackend {
    fn default() -> Self {
        CopyBackend::ExecCommand
    }
}

impl CopyBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyBackend::ExecCommand => "exec_command",
            CopyBackend::AsyncClipboard => "async_clipboard",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "async_clipboard" => CopyBackend::AsyncClipboard,
            _ => CopyBackend::ExecCommand,
        }
    }
}

/// Bridge options, from the JS options object or localStorage
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BridgeConfig {
    pub port: String,
    pub backend: CopyBackend,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            backend: CopyBackend::default(),
            log_level: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse and validate a stored JSON config
    pub fn from_json_value(value: serde_json::Value) -> BridgeResult<Self> {
        let config: BridgeConfig =
            serde_json::from_value(value).map_err(|e| BridgeError::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    fn validated(self) -> BridgeResult<Self> {
        if self.port.trim().is_empty() {
            return Err(BridgeError::InvalidConfig("port name is empty".to_string()));
        }
        Ok(self)
    }

    /// Configured log level, `Info` if it does not parse
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Resolve the config: a JS options object first, then localStorage, then defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load(options: &wasm_bindgen::JsValue) -> BridgeResult<Self> {
        if !options.is_undefined() && !options.is_null() {
            let config: BridgeConfig = serde_wasm_bindgen::from_value(options.clone())
                .map_err(|e| BridgeError::InvalidConfig(e.to_string()))?;
            return config.validated();
        }

        Ok(Self::from_storage().unwrap_or_default())
    }

    #[cfg(target_arch = "wasm32")]
    fn from_storage() -> Option<Self> {
        use gloo_storage::errors::StorageError;
        use gloo_storage::{LocalStorage, Storage};

        match LocalStorage::get::<serde_json::Value>(STORAGE_KEY).map(BridgeConfig::from_json_value) {
            Ok(Ok(config)) => {
                log::info!("Loaded bridge config from storage: {:?}", config);
                Some(config)
            }
            Ok(Err(e)) => {
                log::warn!("Ignoring stored bridge config: {}", e);
                None
            }
            Err(StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("Failed to read stored bridge config: {}", e);
                None
            }
        }
    }

    /// Persist to localStorage so later page loads pick it up
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> BridgeResult<()> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::set(STORAGE_KEY, self).map_err(|e| BridgeError::Js(e.to_string()))
    }
}
