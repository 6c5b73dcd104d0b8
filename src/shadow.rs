//! Core toggling logic, independent of the browser.
//!
//! The desired state is a pure function of the current scroll offset
//! ([`shadow_for_offset`]). [`ShadowToggler`] reads the offset from a
//! [`ScrollSource`] and writes the result to a [`ClassTarget`]; the `dom`
//! module implements both traits for `web-sys` types, tests implement them
//! with plain structs.

#[cfg(test)]
#[path = "shadow_test.rs"]
mod shadow_test;

use crate::error::ShadowError;
use crate::event::ScrollEvent;

/// Desired presence of the presentation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shadow {
    /// Page is scrolled; class present.
    Shown,
    /// Page is at the top; class absent.
    Hidden,
}

impl Shadow {
    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

/// Map a vertical scroll offset to the desired class state.
///
/// Only a strictly positive offset shows the shadow. Negative offsets
/// (rubber-band overscroll) and NaN count as "at the top".
#[must_use]
pub fn shadow_for_offset(offset: f64) -> Shadow {
    if offset > 0.0 { Shadow::Shown } else { Shadow::Hidden }
}

/// Something that owns a class list.
pub trait ClassTarget {
    /// Add `class`; adding a present class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::ClassList`] if the token is rejected.
    fn add_class(&self, class: &str) -> Result<(), ShadowError>;

    /// Remove `class`; removing an absent class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::ClassList`] if the token is rejected.
    fn remove_class(&self, class: &str) -> Result<(), ShadowError>;
}

/// Something that reports the viewport's vertical scroll offset in pixels.
pub trait ScrollSource {
    /// # Errors
    ///
    /// Returns [`ShadowError::ScrollOffset`] if the offset cannot be read.
    fn scroll_offset(&self) -> Result<f64, ShadowError>;
}

/// Binds one header to one viewport.
///
/// Holds no visual state of its own; every call recomputes from the offset.
pub struct ShadowToggler<T, S> {
    header: T,
    viewport: S,
    class_name: String,
}

impl<T: ClassTarget, S: ScrollSource> ShadowToggler<T, S> {
    /// Bind `header` to `viewport`; `class_name` is the token to toggle.
    pub fn new(header: T, viewport: S, class_name: impl Into<String>) -> Self {
        Self { header, viewport, class_name: class_name.into() }
    }

    /// Bring the header's class in line with `offset`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClassTarget`] failure.
    pub fn apply(&self, offset: f64) -> Result<Shadow, ShadowError> {
        let shadow = shadow_for_offset(offset);
        match shadow {
            Shadow::Shown => self.header.add_class(&self.class_name)?,
            Shadow::Hidden => self.header.remove_class(&self.class_name)?,
        }
        Ok(shadow)
    }

    /// React to one window event: read the offset and apply it.
    ///
    /// The event kind is only used for logging; scroll, wheel and touch-move
    /// all lead to the same evaluation.
    ///
    /// # Errors
    ///
    /// Propagates [`ScrollSource`] and [`ClassTarget`] failures.
    pub fn handle(&self, event: ScrollEvent) -> Result<Shadow, ShadowError> {
        let shadow = self.refresh()?;
        log::trace!("{event}: shadow shown={}", shadow.is_shown());
        Ok(shadow)
    }

    /// Re-read the offset and apply it, outside of any event.
    ///
    /// # Errors
    ///
    /// Propagates [`ScrollSource`] and [`ClassTarget`] failures.
    pub fn refresh(&self) -> Result<Shadow, ShadowError> {
        let offset = self.viewport.scroll_offset()?;
        self.apply(offset)
    }

    /// The class token this toggler adds and removes.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}
