//! Character sets assembled from labeled glyph files
//!
//! A directory written by [`FileSink`](crate::FileSink) holds one file per
//! label. [`CharacterSet::load_dir`] reads it back into a table keyed by
//! character. Only single-character labels become entries.

use crate::sink::OutputFormat;
use crate::{IoResult, read_glyph};
use fontscan_core::GlyphBitmap;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs;
use std::path::Path;

/// Glyph bitmaps keyed by the character they render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    glyphs: BTreeMap<char, GlyphBitmap>,
}

impl CharacterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.png` and `.txt` glyph in `dir`.
    ///
    /// Files are visited in name order. Other extensions are ignored, and
    /// files whose stem is not exactly one character are skipped with a
    /// warning. When two files share a character the later one wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or a glyph file
    /// fails to decode.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> IoResult<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = Self::new();
        for path in paths {
            let Some(format) = path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(OutputFormat::from_extension)
            else {
                debug!("ignoring {}", path.display());
                continue;
            };

            let Some(c) = path.file_stem().and_then(|s| s.to_str()).and_then(single_char) else {
                warn!("skipping {}: name is not a single character", path.display());
                continue;
            };

            let glyph = read_glyph(&path, format)?;
            if set.insert(c, glyph).is_some() {
                warn!("{:?} defined more than once, using {}", c, path.display());
            }
        }

        debug!("loaded {} characters from {}", set.len(), dir.as_ref().display());
        Ok(set)
    }

    /// Add or replace a character, returning the previous glyph.
    pub fn insert(&mut self, c: char, glyph: GlyphBitmap) -> Option<GlyphBitmap> {
        self.glyphs.insert(c, glyph)
    }

    pub fn get(&self, c: char) -> Option<&GlyphBitmap> {
        self.glyphs.get(&c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Characters in ascending order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, GlyphBitmap> {
        self.glyphs.iter()
    }
}

impl<'a> IntoIterator for &'a CharacterSet {
    type Item = (&'a char, &'a GlyphBitmap);
    type IntoIter = btree_map::Iter<'a, char, GlyphBitmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
