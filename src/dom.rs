//! `web-sys` side of the toggler: the real document, header element and window.

use web_sys::{Document, Element, Window};

use crate::error::{ShadowError, describe_js};
use crate::listener::HeaderLookup;
use crate::shadow::{ClassTarget, ScrollSource};

impl ClassTarget for Element {
    fn add_class(&self, class: &str) -> Result<(), ShadowError> {
        self.class_list().add_1(class).map_err(|err| ShadowError::ClassList {
            class: class.to_owned(),
            message: describe_js(&err),
        })
    }

    fn remove_class(&self, class: &str) -> Result<(), ShadowError> {
        self.class_list().remove_1(class).map_err(|err| ShadowError::ClassList {
            class: class.to_owned(),
            message: describe_js(&err),
        })
    }
}

impl ScrollSource for Window {
    fn scroll_offset(&self) -> Result<f64, ShadowError> {
        self.scroll_y().map_err(|err| ShadowError::ScrollOffset(describe_js(&err)))
    }
}

/// The global window.
///
/// # Errors
///
/// Returns [`ShadowError::NoWindow`] outside a browser.
pub fn window() -> Result<Window, ShadowError> {
    web_sys::window().ok_or(ShadowError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`ShadowError::NoDocument`] if none is attached.
pub fn document(window: &Window) -> Result<Document, ShadowError> {
    window.document().ok_or(ShadowError::NoDocument)
}

impl HeaderLookup for Document {
    type Header = Element;

    fn find_header(&self, id: &str) -> Result<Element, ShadowError> {
        self.get_element_by_id(id)
            .ok_or_else(|| ShadowError::MissingHeader { id: id.to_owned() })
    }
}

/// Whether the document is still parsing, i.e. `DOMContentLoaded` is pending.
#[must_use]
pub fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}
