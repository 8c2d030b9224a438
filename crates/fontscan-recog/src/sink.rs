//! Labeling sink interface
//!
//! The extraction pipeline hands every unique glyph to a [`LabelingSink`].
//! The sink shows the glyph to an operator, obtains a [`Label`], and
//! persists the glyph under it. Prompting, validation retries and file
//! formats all live on the sink side.

use crate::dedup::GlyphIdentity;
use crate::error::SinkError;
use fontscan_core::GlyphBitmap;
use std::fmt;

/// Characters that may not appear in a label
pub const INVALID_LABEL_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// An operator-chosen, filename-safe name for a glyph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// Validate and wrap a label.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::InvalidLabel`] if the label is empty, is `.` or
    /// `..`, or contains a path separator, a reserved character, NUL or a
    /// control character.
    pub fn new(label: impl Into<String>) -> Result<Self, SinkError> {
        let label = label.into();
        if Self::is_valid(&label) {
            Ok(Self(label))
        } else {
            Err(SinkError::InvalidLabel(label))
        }
    }

    /// Check whether a string would be accepted by [`Label::new`].
    pub fn is_valid(label: &str) -> bool {
        !label.is_empty()
            && label != "."
            && label != ".."
            && label.chars().all(Self::is_valid_char)
    }

    /// Check whether a single character may appear in a label.
    pub fn is_valid_char(c: char) -> bool {
        !c.is_control() && !INVALID_LABEL_CHARS.contains(&c)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label's character if it is exactly one character long.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl TryFrom<char> for Label {
    type Error = SinkError;

    fn try_from(c: char) -> Result<Self, SinkError> {
        Label::new(c.to_string())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receives each unique glyph and returns the label it was stored under.
///
/// `key` is a synthetic identifier the sink may use as a temporary storage
/// name before the operator has chosen a label.
pub trait LabelingSink {
    /// Present, label and persist one glyph.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the operator cancels or persistence fails.
    /// The pipeline stops at the first error; glyphs already stored stay.
    fn present_and_label(
        &mut self,
        glyph: &GlyphBitmap,
        key: GlyphIdentity,
    ) -> Result<Label, SinkError>;
}

impl<F> LabelingSink for F
where
    F: FnMut(&GlyphBitmap, GlyphIdentity) -> Result<Label, SinkError>,
{
    fn present_and_label(
        &mut self,
        glyph: &GlyphBitmap,
        key: GlyphIdentity,
    ) -> Result<Label, SinkError> {
        self(glyph, key)
    }
}
