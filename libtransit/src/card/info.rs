//! Bounded printable text for decoded serials.

use crate::constants::INFO_CAPACITY;
use crate::{Error, Result};

/// Rendered serial/account number: printable ASCII, at most
/// `INFO_CAPACITY` characters. Construction fails rather than truncate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InfoText(String);

impl InfoText {
    /// Validate and wrap `text`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if let Some(&b) = text.as_bytes().iter().find(|&&b| !(0x20..=0x7e).contains(&b)) {
            return Err(Error::InfoNotPrintable(b));
        }
        if text.len() > INFO_CAPACITY {
            return Err(Error::InfoOverflow {
                capacity: INFO_CAPACITY,
                actual: text.len(),
            });
        }
        Ok(Self(text))
    }

    /// Text of an identity with nothing decoded
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// The text itself
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes (equal to characters, as the text is ASCII)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is held
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for InfoText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
