use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use super::*;
use crate::shadow::Shadow;

/// Header whose class list is shared with the test, like a DOM node the
/// document keeps owning.
#[derive(Clone, Default)]
struct FakeHeader {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl FakeHeader {
    fn has(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl ClassTarget for FakeHeader {
    fn add_class(&self, class: &str) -> Result<(), ShadowError> {
        self.classes.borrow_mut().insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), ShadowError> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }
}

/// Document with at most one element, found by id.
struct FakeDocument {
    header: Option<(String, FakeHeader)>,
    lookups: Cell<usize>,
}

impl FakeDocument {
    fn with_header(id: &str, header: &FakeHeader) -> Self {
        Self { header: Some((id.to_owned(), header.clone())), lookups: Cell::new(0) }
    }

    fn empty() -> Self {
        Self { header: None, lookups: Cell::new(0) }
    }
}

impl HeaderLookup for FakeDocument {
    type Header = FakeHeader;

    fn find_header(&self, id: &str) -> Result<FakeHeader, ShadowError> {
        self.lookups.set(self.lookups.get() + 1);
        match &self.header {
            Some((found, header)) if found == id => Ok(header.clone()),
            _ => Err(ShadowError::MissingHeader { id: id.to_owned() }),
        }
    }
}

#[derive(Clone, Default)]
struct FakeViewport {
    offset: Rc<Cell<f64>>,
}

impl ScrollSource for FakeViewport {
    fn scroll_offset(&self) -> Result<f64, ShadowError> {
        Ok(self.offset.get())
    }
}

type FakeToggler = ShadowToggler<FakeHeader, FakeViewport>;

/// Records registrations and can dispatch events to them.
#[derive(Default)]
struct FakeWindow {
    listeners: Vec<(ScrollEvent, Rc<FakeToggler>)>,
    refuse: Option<ScrollEvent>,
}

impl FakeWindow {
    fn events(&self) -> Vec<ScrollEvent> {
        self.listeners.iter().map(|(event, _)| *event).collect()
    }

    fn dispatch(&self, event: ScrollEvent) {
        for (listened, toggler) in &self.listeners {
            if *listened == event {
                toggler.handle(event).unwrap();
            }
        }
    }
}

impl ListenerRegistry<FakeHeader, FakeViewport> for FakeWindow {
    fn listen(&mut self, event: ScrollEvent, toggler: &Rc<FakeToggler>) -> Result<(), ShadowError> {
        if self.refuse == Some(event) {
            return Err(ShadowError::Listen { event: event.dom_name(), message: "refused".into() });
        }
        self.listeners.push((event, Rc::clone(toggler)));
        Ok(())
    }
}

const CLASS: &str = "is-scrolling";

// =============================================================
// bind: missing header
// =============================================================

#[test]
fn missing_header_registers_nothing() {
    let document = FakeDocument::empty();
    let mut window = FakeWindow::default();

    let Err(err) = bind(&ShadowConfig::default(), &document, FakeViewport::default(), &mut window) else {
        panic!("bind succeeded without a header");
    };
    assert!(matches!(err, ShadowError::MissingHeader { ref id } if id == "header"));
    assert!(window.listeners.is_empty());
}

#[test]
fn header_under_other_id_counts_as_missing() {
    let header = FakeHeader::default();
    let document = FakeDocument::with_header("masthead", &header);
    let mut window = FakeWindow::default();

    let result = bind(&ShadowConfig::default(), &document, FakeViewport::default(), &mut window);
    assert!(matches!(result, Err(ShadowError::MissingHeader { .. })));
    assert!(window.listeners.is_empty());

    // Nothing listens, so scrolling never touches the class.
    for event in ScrollEvent::ALL {
        window.dispatch(event);
    }
    assert!(!header.has(CLASS));
}

#[test]
fn invalid_config_fails_before_lookup() {
    let document = FakeDocument::empty();
    let mut window = FakeWindow::default();
    let config = ShadowConfig { events: Vec::new(), ..ShadowConfig::default() };

    let result = bind(&config, &document, FakeViewport::default(), &mut window);
    assert!(matches!(result, Err(ShadowError::InvalidConfig(_))));
    assert_eq!(document.lookups.get(), 0);
}

// =============================================================
// bind: registration
// =============================================================

#[test]
fn registers_each_configured_event_once() {
    let header = FakeHeader::default();
    let document = FakeDocument::with_header("header", &header);
    let mut window = FakeWindow::default();
    let config = ShadowConfig {
        events: vec![ScrollEvent::Wheel, ScrollEvent::Scroll, ScrollEvent::Wheel],
        ..ShadowConfig::default()
    };

    bind(&config, &document, FakeViewport::default(), &mut window).unwrap();
    assert_eq!(window.events(), vec![ScrollEvent::Wheel, ScrollEvent::Scroll]);
    assert_eq!(document.lookups.get(), 1);
}

#[test]
fn refused_registration_is_returned() {
    let header = FakeHeader::default();
    let document = FakeDocument::with_header("header", &header);
    let mut window = FakeWindow { refuse: Some(ScrollEvent::TouchMove), ..FakeWindow::default() };

    let result = bind(&ShadowConfig::default(), &document, FakeViewport::default(), &mut window);
    assert!(matches!(result, Err(ShadowError::Listen { event: "touchmove", .. })));
}

#[test]
fn dispatched_events_drive_the_class() {
    let header = FakeHeader::default();
    let document = FakeDocument::with_header("header", &header);
    let viewport = FakeViewport::default();
    let mut window = FakeWindow::default();
    bind(&ShadowConfig::default(), &document, viewport.clone(), &mut window).unwrap();

    viewport.offset.set(120.0);
    window.dispatch(ScrollEvent::TouchMove);
    assert!(header.has(CLASS));

    viewport.offset.set(0.0);
    window.dispatch(ScrollEvent::Wheel);
    assert!(!header.has(CLASS));
}

// =============================================================
// bind: initial evaluation
// =============================================================

#[test]
fn initial_evaluation_applies_current_offset() {
    let header = FakeHeader::default();
    let document = FakeDocument::with_header("header", &header);
    let viewport = FakeViewport::default();
    viewport.offset.set(80.0);
    let mut window = FakeWindow::default();

    let toggler = bind(&ShadowConfig::default(), &document, viewport, &mut window).unwrap();
    assert!(header.has(CLASS));
    assert_eq!(toggler.refresh().unwrap(), Shadow::Shown);
}

#[test]
fn initial_evaluation_clears_prerendered_class_at_top() {
    let header = FakeHeader::default();
    header.add_class(CLASS).unwrap();
    let document = FakeDocument::with_header("header", &header);
    let mut window = FakeWindow::default();

    bind(&ShadowConfig::default(), &document, FakeViewport::default(), &mut window).unwrap();
    assert!(!header.has(CLASS));
}

// =============================================================
// InstallSlot
// =============================================================

#[test]
fn slot_starts_empty() {
    let slot: InstallSlot<u32> = InstallSlot::default();
    assert!(!slot.is_filled());
}

#[test]
fn second_fill_is_already_installed() {
    let slot = InstallSlot::new();
    slot.fill(|| Ok(1)).unwrap();

    let called = Cell::new(false);
    let result = slot.fill(|| {
        called.set(true);
        Ok(2)
    });
    assert!(matches!(result, Err(ShadowError::AlreadyInstalled)));
    assert!(!called.get());
    assert!(slot.is_filled());
}

#[test]
fn failed_fill_leaves_slot_empty() {
    let slot: InstallSlot<u32> = InstallSlot::new();
    let result = slot.fill(|| Err(ShadowError::MissingHeader { id: "header".into() }));
    assert!(matches!(result, Err(ShadowError::MissingHeader { .. })));
    assert!(!slot.is_filled());

    slot.fill(|| Ok(7)).unwrap();
    assert!(slot.is_filled());
}
