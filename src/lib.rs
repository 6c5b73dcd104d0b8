//! Header shadow toggling for scrolled pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Once the
//! document has been parsed it finds the `#header` element and listens for
//! `scroll`, `wheel` and `touchmove` on the window. Every event re-reads
//! `window.scrollY`: a positive offset adds the `is-scrolling` class to the
//! header, anything else removes it. The stylesheet decides what the class
//! looks like.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`shadow`] | Pure offset-to-class logic and the [`shadow::ShadowToggler`] |
//! | [`event`] | The subscribed window events |
//! | [`config`] | Header id, class name, events, log level |
//! | [`dom`] | `web-sys` implementations of the toggler's seams |
//! | [`listener`] | Listener registration and the page-wide install |
//! | [`logging`] | Console logger and panic hook |
//! | [`error`] | [`error::ShadowError`] |

pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod listener;
pub mod logging;
pub mod shadow;

use wasm_bindgen::prelude::*;

use crate::config::ShadowConfig;
use crate::error::ShadowError;

/// Module start hook: install with the default config.
///
/// A missing header is logged and leaves the page untouched.
#[wasm_bindgen(start)]
pub fn start() {
    let config = ShadowConfig::default();
    logging::init(log::Level::Info);
    if let Err(err) = listener::when_ready(config) {
        log::error!("scroll shadow: {err}");
    }
}

/// Install with a JSON config (`header_id`, `class_name`, `events`,
/// `log_level`; all optional).
///
/// Only useful when [`start`] did not already install, e.g. on pages without
/// a `#header` element.
///
/// # Errors
///
/// Rejects with the error message if the config is invalid or the install
/// fails.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) -> Result<(), JsValue> {
    let config = ShadowConfig::from_json(json).map_err(to_js)?;
    logging::init(config.level().map_err(to_js)?);
    listener::when_ready(config).map_err(to_js)
}

/// Whether a toggler is active on this page.
#[wasm_bindgen(js_name = isInstalled)]
#[must_use]
pub fn is_installed() -> bool {
    listener::is_installed()
}

fn to_js(err: ShadowError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
