//! Toggler configuration.
//!
//! The defaults describe the stock page: a `#header` element, an
//! `is-scrolling` class defined by the stylesheet, and all three scroll-ish
//! window events. Hosts that need something else pass a JSON object with any
//! subset of the fields to `install_with_config`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ShadowError;
use crate::event::ScrollEvent;

pub const DEFAULT_HEADER_ID: &str = "header";
pub const DEFAULT_CLASS_NAME: &str = "is-scrolling";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Id of the element that receives the class.
    pub header_id: String,
    /// Class token toggled on the header.
    pub class_name: String,
    /// Window events that trigger a re-evaluation.
    pub events: Vec<ScrollEvent>,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            header_id: DEFAULT_HEADER_ID.to_owned(),
            class_name: DEFAULT_CLASS_NAME.to_owned(),
            events: ScrollEvent::ALL.to_vec(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ShadowConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::ConfigParse`] for malformed JSON and
    /// [`ShadowError::InvalidConfig`] when validation fails.
    pub fn from_json(json: &str) -> Result<Self, ShadowError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields the browser would otherwise reject at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::InvalidConfig`] describing the first bad field.
    pub fn validate(&self) -> Result<(), ShadowError> {
        if self.header_id.is_empty() {
            return Err(ShadowError::InvalidConfig("header_id must not be empty".into()));
        }
        // DOMTokenList throws SyntaxError / InvalidCharacterError for these.
        if self.class_name.is_empty() {
            return Err(ShadowError::InvalidConfig("class_name must not be empty".into()));
        }
        if self.class_name.chars().any(char::is_whitespace) {
            return Err(ShadowError::InvalidConfig(format!(
                "class_name `{}` must be a single token",
                self.class_name
            )));
        }
        if self.events.is_empty() {
            return Err(ShadowError::InvalidConfig("events must not be empty".into()));
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::InvalidConfig`] for an unknown level name.
    pub fn level(&self) -> Result<log::Level, ShadowError> {
        self.log_level
            .parse()
            .map_err(|_| ShadowError::InvalidConfig(format!("unknown log_level `{}`", self.log_level)))
    }

    /// Configured events with duplicates removed, first occurrence wins.
    #[must_use]
    pub fn unique_events(&self) -> Vec<ScrollEvent> {
        let mut out: Vec<ScrollEvent> = Vec::with_capacity(self.events.len());
        for event in &self.events {
            if !out.contains(event) {
                out.push(*event);
            }
        }
        out
    }
}
