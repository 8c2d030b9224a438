//! fontscan - Glyph extraction from rendered text images
//!
//! Scans images of rendered text, cuts out every connected glyph, drops
//! repeats, and asks an operator to name each distinct shape. The named
//! glyphs form a character set that can be loaded back with
//! [`io::CharacterSet`].
//!
//! # Overview
//!
//! - Binarization by luminance ([`color`])
//! - 8-connected region discovery ([`region`])
//! - Glyph normalization, deduplication and labeling ([`recog`])
//! - Image decoding and glyph files ([`io`])
//!
//! # Example
//!
//! ```
//! use fontscan::recog::{GlyphExtractor, GlyphIdentity, Label};
//! use fontscan::{GlyphBitmap, RgbImage};
//!
//! let mut img = RgbImage::new(4, 1).unwrap();
//! img.set_rgb(0, 0, 255, 255, 255).unwrap();
//! img.set_rgb(2, 0, 255, 255, 255).unwrap();
//! img.set_rgb(3, 0, 255, 255, 255).unwrap();
//!
//! let mut sink = |g: &GlyphBitmap, _: GlyphIdentity| Label::new(format!("w{}", g.width()));
//! let report = GlyphExtractor::default().run(&img, &mut sink).unwrap();
//! assert_eq!(report.unique(), 2);
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod scan;

// Re-export core types (primary data structures used everywhere)
pub use fontscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use fontscan_color as color;
pub use fontscan_io as io;
pub use fontscan_recog as recog;
pub use fontscan_region as region;

pub use config::{ScanConfig, USAGE};
pub use console::ConsoleLabeler;
pub use error::{ImageFailure, ScanError, ScanResult};
pub use fontscan_io::OutputFormat;
pub use scan::{ScanSummary, run, scan_directory};
