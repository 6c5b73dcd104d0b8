//! Window listener registration and the page-wide install slot.
//!
//! [`bind`] is the browser-free part of an install: resolve the header
//! through a [`HeaderLookup`], register one handler per configured event with
//! a [`ListenerRegistry`], then evaluate once. [`install`] runs it against the
//! real document and window and returns an [`Installed`] that owns the
//! closures; dropping it unregisters them. [`install_global`] parks the result
//! in an [`InstallSlot`] so the listeners live as long as the page.

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, Event, Window};

use crate::config::ShadowConfig;
use crate::dom;
use crate::error::{ShadowError, describe_js};
use crate::event::ScrollEvent;
use crate::shadow::{ClassTarget, ScrollSource, ShadowToggler};

const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";

pub type PageToggler = ShadowToggler<Element, Window>;

thread_local! {
    static INSTALLED: InstallSlot<Installed> = const { InstallSlot::new() };
}

/// Resolves the header element by id.
pub trait HeaderLookup {
    type Header: ClassTarget;

    /// # Errors
    ///
    /// Returns [`ShadowError::MissingHeader`] when no element has that id.
    fn find_header(&self, id: &str) -> Result<Self::Header, ShadowError>;
}

/// Accepts one handler registration per event.
pub trait ListenerRegistry<H, S> {
    /// Route `event` to `toggler.handle`.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::Listen`] if the registration is refused.
    fn listen(&mut self, event: ScrollEvent, toggler: &Rc<ShadowToggler<H, S>>) -> Result<(), ShadowError>;
}

/// Bind the configured header to `viewport` through `registry`.
///
/// The header is resolved before anything is registered, so a missing header
/// leaves `registry` untouched. After registration the current offset is
/// applied once; a failure there is logged, not returned.
///
/// # Errors
///
/// Returns config, lookup, and registration failures.
pub fn bind<L, S, R>(
    config: &ShadowConfig,
    lookup: &L,
    viewport: S,
    registry: &mut R,
) -> Result<Rc<ShadowToggler<L::Header, S>>, ShadowError>
where
    L: HeaderLookup,
    S: ScrollSource,
    R: ListenerRegistry<L::Header, S>,
{
    config.validate()?;
    let header = lookup.find_header(&config.header_id)?;
    let toggler = Rc::new(ShadowToggler::new(header, viewport, config.class_name.clone()));
    for event in config.unique_events() {
        registry.listen(event, &toggler)?;
    }

    // Pages restored mid-scroll (back/forward, anchors) start in the right state.
    if let Err(err) = toggler.refresh() {
        log::warn!("scroll shadow: initial evaluation failed: {err}");
    }
    Ok(toggler)
}

/// Live listener registrations on the window.
pub struct Installed {
    window: Window,
    listeners: Vec<(ScrollEvent, Closure<dyn FnMut(Event)>)>,
}

impl Installed {
    /// Events currently listened for, in registration order.
    #[must_use]
    pub fn events(&self) -> Vec<ScrollEvent> {
        self.listeners.iter().map(|(event, _)| *event).collect()
    }
}

impl ListenerRegistry<Element, Window> for Installed {
    fn listen(&mut self, event: ScrollEvent, toggler: &Rc<PageToggler>) -> Result<(), ShadowError> {
        let toggler = Rc::clone(toggler);
        let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Err(err) = toggler.handle(event) {
                log::warn!("scroll shadow: {err}");
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event.dom_name(),
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                &options,
            )
            .map_err(|err| ShadowError::Listen { event: event.dom_name(), message: describe_js(&err) })?;

        self.listeners.push((event, closure));
        Ok(())
    }
}

impl Drop for Installed {
    fn drop(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event.dom_name(), closure.as_ref().unchecked_ref())
            {
                log::debug!("failed to remove `{event}` listener: {}", describe_js(&err));
            }
        }
    }
}

/// Bind the configured header to the window's scroll events.
///
/// If a registration fails part-way, the ones already made are removed again
/// when the partial [`Installed`] is dropped.
///
/// # Errors
///
/// Returns the first lookup or registration failure.
pub fn install(config: &ShadowConfig) -> Result<Installed, ShadowError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let mut installed = Installed { window: window.clone(), listeners: Vec::new() };
    let toggler = bind(config, &document, window, &mut installed)?;

    log::info!(
        "scroll shadow toggles `{}` on #{} for {:?}",
        toggler.class_name(),
        config.header_id,
        installed.events()
    );
    Ok(installed)
}

/// Holds at most one value, written once.
pub struct InstallSlot<T> {
    value: RefCell<Option<T>>,
}

impl<T> InstallSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { value: RefCell::new(None) }
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.value.borrow().is_some()
    }

    /// Store the value built by `make`. `make` is not called when the slot is
    /// already filled.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::AlreadyInstalled`] on a filled slot, otherwise
    /// whatever `make` returns.
    pub fn fill(&self, make: impl FnOnce() -> Result<T, ShadowError>) -> Result<(), ShadowError> {
        if self.is_filled() {
            return Err(ShadowError::AlreadyInstalled);
        }
        let value = make()?;
        *self.value.borrow_mut() = Some(value);
        Ok(())
    }
}

impl<T> Default for InstallSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`install`] into the page-wide slot.
///
/// # Errors
///
/// Returns [`ShadowError::AlreadyInstalled`] on a second call, otherwise
/// whatever [`install`] returns.
pub fn install_global(config: &ShadowConfig) -> Result<(), ShadowError> {
    INSTALLED.with(|slot| slot.fill(|| install(config)))
}

/// Whether the page-wide slot holds a toggler.
#[must_use]
pub fn is_installed() -> bool {
    INSTALLED.with(InstallSlot::is_filled)
}

/// Install once the document has been parsed.
///
/// The module may finish loading after `DOMContentLoaded` fired, so the
/// install runs immediately unless the document is still loading. Failures
/// inside the deferred install are logged.
///
/// # Errors
///
/// Returns lookup failures, the immediate install's failure, or a failure to
/// register the `DOMContentLoaded` listener.
pub fn when_ready(config: ShadowConfig) -> Result<(), ShadowError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if !dom::is_loading(&document) {
        return install_global(&config);
    }

    let callback = Closure::once_into_js(move || {
        if let Err(err) = install_global(&config) {
            log::error!("scroll shadow: {err}");
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            DOM_CONTENT_LOADED,
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|err| ShadowError::Listen { event: DOM_CONTENT_LOADED, message: describe_js(&err) })?;
    log::debug!("scroll shadow deferred until {DOM_CONTENT_LOADED}");
    Ok(())
}
