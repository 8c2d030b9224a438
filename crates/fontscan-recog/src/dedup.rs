//! Glyph deduplication
//!
//! Glyphs are keyed by a [`GlyphIdentity`]: a SipHash-2-4 fingerprint (fixed
//! keys) of width, height and the row-major cell pattern. The origin is not
//! hashed, so the same shape found at two places in an image is one glyph.
//!
//! Fingerprints only select candidates. A [`Deduplicator`] keeps every
//! unique shape and confirms a match by exact comparison, so a hash
//! collision can never merge two different glyphs.

use fontscan_core::GlyphBitmap;
use siphasher::sip::SipHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Deterministic fingerprint of a glyph's shape
///
/// Stable across runs on one platform; its hex form doubles as a temporary
/// file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphIdentity(u64);

impl GlyphIdentity {
    /// Fingerprint a glyph's width, height and cells.
    pub fn of(glyph: &GlyphBitmap) -> Self {
        let mut hasher = SipHasher::new();
        glyph.width().hash(&mut hasher);
        glyph.height().hash(&mut hasher);
        glyph.cells().hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Raw 64-bit value
    pub fn value(self) -> u64 {
        self.0
    }

    /// 16-digit lowercase hex key
    pub fn to_key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GlyphIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Outcome of offering a glyph to a [`Deduplicator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// First time this shape was seen; forward it
    Unique(GlyphIdentity),
    /// Same shape as an earlier glyph; drop it
    Duplicate(GlyphIdentity),
}

impl Admission {
    /// The glyph's identity either way
    pub fn identity(self) -> GlyphIdentity {
        match self {
            Self::Unique(id) | Self::Duplicate(id) => id,
        }
    }

    pub fn is_unique(self) -> bool {
        matches!(self, Self::Unique(_))
    }
}

/// Per-run set of glyph shapes already forwarded
#[derive(Debug, Default)]
pub struct Deduplicator {
    /// identity -> indices into `unique`
    by_identity: HashMap<GlyphIdentity, Vec<usize>>,
    /// first instance of each distinct shape
    unique: Vec<GlyphBitmap>,
    /// number of glyphs rejected as duplicates
    duplicates: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a glyph, recording it if its shape is new.
    pub fn admit(&mut self, glyph: &GlyphBitmap) -> Admission {
        let id = GlyphIdentity::of(glyph);
        let candidates = self.by_identity.entry(id).or_default();

        if candidates.iter().any(|&i| self.unique[i].same_shape(glyph)) {
            self.duplicates += 1;
            return Admission::Duplicate(id);
        }

        candidates.push(self.unique.len());
        self.unique.push(glyph.clone());
        Admission::Unique(id)
    }

    /// True if a glyph of this shape has been admitted.
    pub fn contains(&self, glyph: &GlyphBitmap) -> bool {
        self.by_identity
            .get(&GlyphIdentity::of(glyph))
            .is_some_and(|c| c.iter().any(|&i| self.unique[i].same_shape(glyph)))
    }

    /// Number of distinct shapes admitted
    pub fn len(&self) -> usize {
        self.unique.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }

    /// Number of glyphs rejected as duplicates
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// First instance of each distinct shape, in admission order
    pub fn unique_glyphs(&self) -> &[GlyphBitmap] {
        &self.unique
    }

    /// Forget everything; used between images.
    pub fn clear(&mut self) {
        self.by_identity.clear();
        self.unique.clear();
        self.duplicates = 0;
    }
}
