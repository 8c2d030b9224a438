//! fontscan Core - Basic data structures for glyph extraction
//!
//! This crate provides the data model shared by every stage of the
//! extraction pipeline:
//!
//! - [`RgbImage`] / [`RgbSource`] - Decoded color input
//! - [`PixelGrid`] - Binarized foreground map, consumed by region discovery
//! - [`Point`] / [`Region`] - Pixel coordinates and connected components
//! - [`Bounds`] - Inclusive bounding boxes
//! - [`GlyphBitmap`] - Canonical glyph shape with its source offset

pub mod bounds;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod pta;
pub mod rgb;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use glyph::{BLOCK_BACKGROUND, BLOCK_FOREGROUND, GlyphBitmap};
pub use grid::PixelGrid;
pub use pta::{Point, Region};
pub use rgb::{RgbImage, RgbSource};
