//! Legacy copy via a transient input element
//!
//! `execCommand("copy")` only copies the current selection, so the text is put
//! into a throwaway `<input>`, attached to the body, selected, copied, and the
//! input is removed again. Removal happens in `Drop` for [`TransientInput`],
//! so the element never outlives the call even if the copy command throws.

use crate::clipboard::ClipboardWriter;
use crate::error::{BridgeError, BridgeResult};

/// The DOM operations the legacy copy sequence needs
pub trait SelectionHost {
    type Input;

    /// Create a detached single-line input holding `value`
    fn create_input(&self, value: &str) -> BridgeResult<Self::Input>;
    fn attach(&self, input: &Self::Input) -> BridgeResult<()>;
    fn select_all(&self, input: &Self::Input) -> BridgeResult<()>;
    /// Run the platform copy command on the current selection.
    /// `Ok(false)` means the host refused without throwing.
    fn exec_copy(&self) -> BridgeResult<bool>;
    fn detach(&self, input: &Self::Input);
}

/// An input element attached to the document for the length of one copy
pub struct TransientInput<'h, H: SelectionHost> {
    host: &'h H,
    input: H::Input,
}

impl<'h, H: SelectionHost> TransientInput<'h, H> {
    /// Create the input and attach it. Nothing is left in the document if
    /// attaching fails.
    pub fn attach(host: &'h H, value: &str) -> BridgeResult<Self> {
        let input = host.create_input(value)?;
        host.attach(&input)?;
        Ok(Self { host, input })
    }

    pub fn select(&self) -> BridgeResult<()> {
        self.host.select_all(&self.input)
    }
}

impl<H: SelectionHost> Drop for TransientInput<'_, H> {
    fn drop(&mut self) {
        self.host.detach(&self.input);
    }
}

/// `ClipboardWriter` backed by `execCommand("copy")`
pub struct LegacyCopy<H: SelectionHost> {
    host: H,
}

impl<H: SelectionHost> LegacyCopy<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: SelectionHost> ClipboardWriter for LegacyCopy<H> {
    fn write_text(&self, text: &str) -> BridgeResult<()> {
        let input = TransientInput::attach(&self.host, text)?;
        input.select()?;
        let copied = self.host.exec_copy()?;
        drop(input);

        if copied {
            Ok(())
        } else {
            Err(BridgeError::CommandRejected)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomHost;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, HtmlInputElement};

    use super::SelectionHost;
    use crate::error::{BridgeError, BridgeResult};

    /// Keeps the input out of view without `display: none`, which would make
    /// it unselectable.
    const OFFSCREEN_STYLE: &str = "position:fixed;top:0;left:-9999px;opacity:0;";

    /// `SelectionHost` for the live browser document
    pub struct DomHost {
        document: HtmlDocument,
    }

    impl DomHost {
        pub fn from_window() -> BridgeResult<Self> {
            let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
            let document = window.document().ok_or(BridgeError::NoDocument)?;
            let document = document
                .dyn_into::<HtmlDocument>()
                .map_err(|_| BridgeError::NoDocument)?;
            Ok(Self { document })
        }
    }

    impl SelectionHost for DomHost {
        type Input = HtmlInputElement;

        fn create_input(&self, value: &str) -> BridgeResult<HtmlInputElement> {
            let input = self
                .document
                .create_element("input")?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| BridgeError::Js("created element is not an input".to_string()))?;

            input.set_type("text");
            input.set_read_only(true);
            input.set_attribute("style", OFFSCREEN_STYLE)?;
            input.set_attribute("aria-hidden", "true")?;
            input.set_value(value);
            Ok(input)
        }

        fn attach(&self, input: &HtmlInputElement) -> BridgeResult<()> {
            let body = self.document.body().ok_or(BridgeError::NoBody)?;
            body.append_child(input)?;
            Ok(())
        }

        fn select_all(&self, input: &HtmlInputElement) -> BridgeResult<()> {
            input.select();
            Ok(())
        }

        fn exec_copy(&self) -> BridgeResult<bool> {
            Ok(self.document.exec_command("copy")?)
        }

        fn detach(&self, input: &HtmlInputElement) {
            input.remove();
        }
    }
}
