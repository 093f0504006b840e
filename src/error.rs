//! Error types for the copy bridge
//!
//! The bridge itself is fire-and-forget, so these errors never reach the code
//! that emits a copy request. They are returned by setup calls and logged by
//! the request handler.

use std::fmt;

use wasm_bindgen::JsValue;

/// Error type for bridge setup and clipboard writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// `window` is not available (worker or non-browser host)
    NoWindow,
    /// The window has no document
    NoDocument,
    /// The document has no `<body>` to attach the transient input to
    NoBody,
    /// `navigator.clipboard` is missing (insecure context or old browser)
    NoClipboard,
    /// A DOM or JS call threw
    Js(String),
    /// The platform copy command ran but reported that nothing was copied
    CommandRejected,
    /// The application has no port with this name
    MissingPort(String),
    /// The bridge options could not be parsed
    InvalidConfig(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No window"),
            Self::NoDocument => write!(f, "No document"),
            Self::NoBody => write!(f, "Document has no body"),
            Self::NoClipboard => write!(f, "Clipboard API is not available"),
            Self::Js(msg) => write!(f, "JS error: {}", msg),
            Self::CommandRejected => write!(f, "Copy command was rejected by the browser"),
            Self::MissingPort(name) => write!(f, "Application has no port named '{}'", name),
            Self::InvalidConfig(msg) => write!(f, "Invalid bridge config: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<JsValue> for BridgeError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Errors that mean the host cannot copy at all, as opposed to a single
    /// request failing
    pub fn is_unsupported_host(&self) -> bool {
        matches!(self, Self::NoWindow | Self::NoDocument | Self::NoBody | Self::NoClipboard)
    }
}
