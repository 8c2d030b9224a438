//! fontscan-recog - Glyph extraction
//!
//! This crate turns regions into a deduplicated set of glyphs and drives
//! the per-image pipeline:
//!
//! - **Normalization** ([`normalize`]): region -> tight, origin-relative bitmap
//! - **Deduplication** ([`dedup`]): shape fingerprints and per-run filtering
//! - **Labeling sink** ([`sink`]): the interface unique glyphs are sent to
//! - **Pipeline** ([`extract`]): binarize, discover, normalize, dedup, label
//!
//! # Examples
//!
//! ```
//! use fontscan_core::{GlyphBitmap, RgbImage};
//! use fontscan_recog::{GlyphExtractor, GlyphIdentity, Label};
//!
//! let mut img = RgbImage::new(5, 5).unwrap();
//! img.set_rgb(0, 0, 255, 255, 255).unwrap();
//! img.set_rgb(4, 4, 255, 255, 255).unwrap();
//!
//! let mut sink = |_: &GlyphBitmap, _: GlyphIdentity| Label::new("dot");
//! let report = GlyphExtractor::default().run(&img, &mut sink).unwrap();
//! assert_eq!(report.regions, 2);
//! assert_eq!(report.unique(), 1);
//! ```

pub mod dedup;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod sink;

// Re-export core types
pub use fontscan_core;

pub use error::{RecogError, RecogResult, SinkError};

pub use dedup::{Admission, Deduplicator, GlyphIdentity};
pub use extract::{ExtractOptions, ExtractionReport, GlyphExtractor, LabeledGlyph};
pub use normalize::normalize_region;
pub use sink::{INVALID_LABEL_CHARS, Label, LabelingSink};
