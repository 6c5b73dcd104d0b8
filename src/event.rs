//! The window events that trigger a re-evaluation of the header shadow.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use std::fmt;

use serde::Deserialize;

/// A window event the toggler subscribes to.
///
/// All three carry the same meaning for the handler: "the viewport may have
/// moved, re-read the offset".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollEvent {
    Scroll,
    Wheel,
    TouchMove,
}

impl ScrollEvent {
    /// Every event kind, in registration order.
    pub const ALL: [Self; 3] = [Self::Scroll, Self::Wheel, Self::TouchMove];

    /// The DOM event type passed to `addEventListener`.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Wheel => "wheel",
            Self::TouchMove => "touchmove",
        }
    }
}

impl fmt::Display for ScrollEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}
