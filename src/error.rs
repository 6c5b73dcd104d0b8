//! Error taxonomy for header lookup, listener wiring, and configuration.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Everything that can go wrong while installing or running the toggler.
#[derive(Debug, thiserror::Error)]
pub enum ShadowError {
    /// No global `window`; the code is not running in a browser.
    #[error("no global window object")]
    NoWindow,
    /// The window exists but has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// No element carries the configured header id.
    #[error("no element with id `{id}` found in the document")]
    MissingHeader { id: String },
    /// `window.scrollY` threw.
    #[error("failed to read scroll offset: {0}")]
    ScrollOffset(String),
    /// `classList.add` / `classList.remove` rejected the token.
    #[error("failed to update class `{class}`: {message}")]
    ClassList { class: String, message: String },
    /// `addEventListener` threw.
    #[error("failed to listen for `{event}`: {message}")]
    Listen { event: &'static str, message: String },
    /// The configuration parsed but is not usable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The configuration JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// A toggler is already installed for this page.
    #[error("scroll shadow is already installed")]
    AlreadyInstalled,
}

/// Render a thrown JS value for an error message.
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
